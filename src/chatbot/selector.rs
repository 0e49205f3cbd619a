//! Turns an asset intent into concrete replies.

use rand::Rng;

use crate::chatbot::assets::{self, ASSETS, SONGS};
use crate::chatbot::message::Reply;
use crate::chatbot::session::Session;
use crate::classifier::Intent;

/// Uniform draw over the whole asset table.
pub fn draw_asset<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(0..ASSETS.len())
}

/// Replies for asset `index`, applying its effect on the session first.
///
/// Out-of-range indices produce nothing.
pub fn play_asset(index: usize, session: &mut Session) -> Vec<Reply> {
    let Some(asset) = ASSETS.get(index) else {
        return Vec::new();
    };
    match index {
        assets::RIRI_START => session.round_riri = true,
        assets::RIRI_STOP => session.round_riri = false,
        _ => {}
    }
    asset.replies()
}

/// Replies for an asset-backed intent.
///
/// `n` forces the asset for `Random`; otherwise one is drawn from `rng`.
/// `private_reply_probability` is the chance `PrivateChitchat` answers at all.
/// Start and Credits are not asset-backed and yield nothing here.
pub fn select<R: Rng>(
    intent: Intent,
    n: Option<usize>,
    session: &mut Session,
    rng: &mut R,
    private_reply_probability: f64,
) -> Vec<Reply> {
    match intent {
        Intent::Age => play_asset(assets::AGE, session),
        Intent::Greeting => play_asset(assets::GOOD_EVENING, session),
        Intent::RiriReply => play_asset(assets::RIRI_STOP, session),
        Intent::Dance => play_asset(assets::DANCE, session),
        Intent::Song => SONGS[0].replies(),
        Intent::Random => {
            let index = n.unwrap_or_else(|| draw_asset(rng));
            play_asset(index, session)
        }
        Intent::PrivateChitchat => {
            if rng.gen_range(0.0..1.0) < private_reply_probability {
                let index = n.unwrap_or_else(|| draw_asset(rng));
                play_asset(index, session)
            } else {
                Vec::new()
            }
        }
        Intent::Start | Intent::Credits => Vec::new(),
    }
}
