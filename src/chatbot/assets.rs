//! Nino's repertoire: every canned reply, addressed by a stable index.

use crate::chatbot::message::Reply;

/// One canned response unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Text(&'static str),
    /// A "..." pause followed by the line.
    PausedText(&'static str),
    Sticker(&'static str),
    Voice {
        file_id: &'static str,
        caption: Option<&'static str>,
    },
    Animation(&'static str),
}

impl Asset {
    pub fn replies(&self) -> Vec<Reply> {
        match *self {
            Asset::Text(text) => vec![Reply::text(text)],
            Asset::PausedText(text) => vec![Reply::text("..."), Reply::text(text)],
            Asset::Sticker(id) => vec![Reply::Sticker(id.to_string())],
            Asset::Voice { file_id, caption } => vec![Reply::Voice {
                file_id: file_id.to_string(),
                caption: caption.map(str::to_string),
            }],
            Asset::Animation(id) => vec![Reply::Animation(id.to_string())],
        }
    }
}

pub const AGE: usize = 1;
/// Starts the laughing round.
pub const RIRI_START: usize = 6;
/// Ends the laughing round.
pub const RIRI_STOP: usize = 7;
pub const GOOD_EVENING: usize = 10;
pub const DANCE: usize = 30;

pub const ASSETS: [Asset; 31] = [
    Asset::Text("Io sono Nino."),
    Asset::Text("Ho 47 anni."),
    Asset::Text("Sono di Paceco."),
    Asset::Text("A te u musu ti fazzu shcattare Ngichinè!"),
    Asset::Text("A ballare tanto assai non mi piace"),
    Asset::Text("*risata ebete*"),
    Asset::Text("Ma che cazzo ci riri oh!"),
    Asset::Text("Ma che caspitina ci riri!!!"),
    Asset::Text("Cosa volete fare facete"),
    Asset::Text("Se volete chiamare chiamate"),
    Asset::Text("Buonasera."),
    Asset::Text("Non ho stato mai fidanzato"),
    Asset::PausedText("Vuai ceccando un'anima gemella"),
    // "Buonasera"
    Asset::Sticker("CAACAgQAAxkBAANlYDP628W4thKmIIM2TktXp3n0QOIAAnoAA5tcdge1GHiyda2EVx4E"),
    // "Io sono Nino."
    Asset::Sticker("CAACAgQAAxkBAANnYDP68R5djBgo6jDyxMYVcpQ3yi0AAnsAA5tcdgcxQ_AoiEAefR4E"),
    // A ballare tanto assai non mi piace
    Asset::Voice { file_id: "AwACAgQAAxkBAANbYDLybzTgltgkHe2e2lpQX6bmwfEAAo8IAALWIZlRfjem1-W3x64eBA", caption: None },
    // Che caspitina ci ridi
    Asset::Voice { file_id: "AwACAgQAAxkBAANZYDLyVJ-p19HnAAG-Izv7W1HkjfDsAAKOCAAC1iGZUWA1lqOtsg3DHgQ", caption: None },
    // Cosa volete fare facete, se volete chiamare chiamate
    Asset::Voice { file_id: "AwACAgQAAxkBAANhYDLzeDpELsPcpnZxhES7EKi1mQkAApoIAALWIZlREY6FUQS42CMeBA", caption: None },
    // Io sono Nino
    Asset::Voice { file_id: "AwACAgQAAxkBAANTYDLx8E7HybhXzoD8evbXLisAASw9AAKLCAAC1iGZUXj422CmkJ5iHgQ", caption: None },
    // Pescare
    Asset::Voice { file_id: "AwACAgQAAxkBAANVYDLyF-hUXgbOLjtfssLdciZbwKQAAowIAALWIZlRfj-n3E5V2BEeBA", caption: None },
    // U musu t fazzu shcattare
    Asset::Voice { file_id: "AwACAgQAAxkBAANXYDLyNDT7RLcfp6S-bsEWswqShhoAAo0IAALWIZlRtxc1za0ltWoeBA", caption: None },
    // Vado cercando un'anima gemella
    Asset::Voice { file_id: "AwACAgQAAxkBAANdYDLzHHZ82eZ0O6LNxmZGqzmysOwAApYIAALWIZlR_z6E4_-svTQeBA", caption: None },
    // "U musu t fazzu shcattare Ngichinè!"
    Asset::Sticker("CAACAgQAAxkBAANpYDP7Dp1Cmbj6bM9U4sVStWDfgHAAAnwAA5tcdgekswjUH7G0Zh4E"),
    // "E riri che cazzu ci riri oh?!"
    Asset::Sticker("CAACAgQAAxkBAANrYDP7Id0Y63nl49N-uDKMNg_ZWnQAAn0AA5tcdgelNbWrYhus4h4E"),
    // "Ma che caspitina ci ridi!"
    Asset::Sticker("CAACAgQAAxkBAANtYDP7NN0IowqhqPoChpN5VvukYMQAAn4AA5tcdgf90-GacfV7_B4E"),
    // "A ballare tanto assai non mi piace"
    Asset::Sticker("CAACAgQAAxkBAANvYDP7SLA_OQJulmt3DC3_1OxWiNYAAn8AA5tcdgetgSpHh9qWQB4E"),
    // "...mangiare una pizza..."
    Asset::Sticker("CAACAgQAAxkBAANxYDP7ZpQbIbUvqFlvAjCrp5TAHRUAAoAAA5tcdgcdPMUP3VtDTx4E"),
    // "Che cosa volete fare facete"
    Asset::Sticker("CAACAgQAAxkBAANzYDP7dxchhkHIAAH-Ci5tvi1VkBLiAAKBAAObXHYHeS-dZVQDxz0eBA"),
    // "Se volete chiamare chiamate"
    Asset::Sticker("CAACAgQAAxkBAAN1YDP7jID-G7wiYFKvrcbaZQm_ZYkAAoIAA5tcdgeP02ixTce2Ix4E"),
    // "Nino."
    Asset::Sticker("CAACAgQAAxkBAAN3YDQDXKq2xT1JupwouKkjUo34PZwAAoMAA5tcdgdIQbmeKDiqmx4E"),
    // Nino dancing
    Asset::Animation("CgACAgQAAxkBAAN7YDQjCwKIGY2GfnuIbLiYEru-HTwAAiUNAAK-UqFRgCc7-tmphdoeBA"),
];

/// The whole song catalogue. Only one song has ever been recorded, so asking
/// for a song always plays this one.
pub const SONGS: [Asset; 1] = [Asset::Voice {
    file_id: "AwACAgQAAxkBAANjYDLz7kzO7KtS9lFw0xWs_CAvhvAAApsIAALWIZlR1gl30_hxQ7YeBA",
    caption: Some("By Davide Belvedere"),
}];
