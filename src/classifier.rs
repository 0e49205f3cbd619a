//! Keyword classifier: maps a lower-cased message to what Nino should do about it.

use crate::chatbot::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Credits,
    /// Sent while the laughing round is on; ends it.
    RiriReply,
    Dance,
    Song,
    Age,
    Greeting,
    Random,
    PrivateChitchat,
}

/// Everything a rule may look at.
pub struct Input<'a> {
    /// Already lower-cased.
    pub text: &'a str,
    pub session: &'a Session,
    pub is_private: bool,
}

pub struct Rule {
    pub intent: Intent,
    pub matches: fn(&Input) -> bool,
}

/// Tokens that count as addressing Nino. Plain substring match, so "ni" hits
/// inside any word that contains it.
const NINO_TOKENS: &[&str] = &["nino", "ni", "nì"];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Evaluated top to bottom, first match wins.
pub const RULES: &[Rule] = &[
    Rule { intent: Intent::Start, matches: |i| i.text == "/start" },
    Rule { intent: Intent::Credits, matches: |i| i.text == "/credits" },
    Rule { intent: Intent::RiriReply, matches: |i| i.session.round_riri },
    Rule {
        intent: Intent::Dance,
        matches: |i| i.text.contains("ball") && contains_any(i.text, NINO_TOKENS),
    },
    Rule {
        intent: Intent::Song,
        matches: |i| i.text.contains("cant") && i.text.contains("canzone"),
    },
    Rule {
        intent: Intent::Age,
        matches: |i| i.text.contains("anni") && contains_any(i.text, NINO_TOKENS),
    },
    Rule {
        intent: Intent::Greeting,
        matches: |i| i.text.contains("ciao") && i.text.contains("nino"),
    },
    Rule {
        intent: Intent::Greeting,
        matches: |i| i.text.contains("buon") && contains_any(i.text, &["giorn", "sera"]),
    },
    Rule {
        intent: Intent::Random,
        matches: |i| i.text.contains("donna") && i.text.contains("ideale"),
    },
    Rule {
        intent: Intent::Random,
        matches: |i| contains_any(i.text, &["nino", "nì"]),
    },
    Rule { intent: Intent::PrivateChitchat, matches: |i| i.is_private },
];

/// Classify a lower-cased message. `None` means stay silent.
pub fn classify(text: &str, session: &Session, is_private: bool) -> Option<Intent> {
    let input = Input { text, session, is_private };
    RULES.iter().find(|rule| (rule.matches)(&input)).map(|rule| rule.intent)
}

/// Classify an inline button press by its callback payload.
pub fn classify_callback(data: &str) -> Option<Intent> {
    match data {
        "credits" => Some(Intent::Credits),
        _ => None,
    }
}
