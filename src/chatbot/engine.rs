//! Responder - decides what Nino says back to a message or button press.

use rand::Rng;
use teloxide::types::ParseMode;
use teloxide::utils::html;
use tracing::{debug, warn};

use crate::chatbot::keyboard::make_buttons;
use crate::chatbot::message::{IncomingCallback, IncomingMessage, Reply};
use crate::chatbot::selector::select;
use crate::chatbot::session::Session;
use crate::classifier::{Intent, classify, classify_callback};

pub const CREDITS_TEXT: &str = "🤖 Bot creato da @GiovanniRanaTortello\n😺 GitHub: https://github.com/DarkFighterLuke\n\
\n🌐 Proudly hosted on Raspberry Pi 3\n\
\nContribuisci anche tu alla linguistica di NinoBot su GitHub o contattando il creatore!\n\
N.B. Questo bot è satirico e non intende offendere chi rappresenta. \
Ti auguriamo di trovare l'amore Nino.";

/// Toast shown when the credits button is pressed.
pub const CREDITS_TOAST: &str = "Crediti";

const CREDITS_BUTTON: &str = "Credits 🌟";
const CREDITS_PAYLOAD: &str = "credits";

/// Welcome message for `/start`.
pub fn start_text(first_name: &str) -> String {
    format!(
        "<b>Hai contattato Nino!</b>\nPiacere di conoscerti, {}!\nIo sono Nino.\nHo 47 anni. Sono di Paceco.\n",
        html::escape(first_name)
    )
}

#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Chance of answering a private message that matched no keyword.
    pub private_reply_probability: f64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self { private_reply_probability: 0.75 }
    }
}

pub struct Responder {
    config: ResponderConfig,
}

impl Responder {
    pub fn new(config: ResponderConfig) -> Self {
        Self { config }
    }

    /// Replies for a text message. Updates `session` in place.
    pub fn respond_to_message<R: Rng>(
        &self,
        msg: &IncomingMessage,
        session: &mut Session,
        rng: &mut R,
    ) -> Vec<Reply> {
        let lowered = msg.text.to_lowercase();
        let Some(intent) = classify(&lowered, session, msg.is_private) else {
            return Vec::new();
        };
        debug!("Chat {} → {:?}", msg.chat_id, intent);

        match intent {
            Intent::Start => vec![self.start(&msg.first_name)],
            Intent::Credits => vec![Reply::html(CREDITS_TEXT)],
            other => select(other, None, session, rng, self.config.private_reply_probability),
        }
    }

    /// Replies for an inline button press.
    pub fn respond_to_callback(&self, cb: &IncomingCallback) -> Vec<Reply> {
        match classify_callback(&cb.data) {
            Some(Intent::Credits) => {
                let mut replies = Vec::with_capacity(2);
                if cb.chat_id.is_some() {
                    replies.push(Reply::html(CREDITS_TEXT));
                }
                replies.push(Reply::AnswerCallback {
                    callback_id: cb.callback_id.clone(),
                    text: CREDITS_TOAST.to_string(),
                    show_alert: false,
                });
                replies
            }
            _ => {
                debug!("Ignoring callback payload {:?}", cb.data);
                Vec::new()
            }
        }
    }

    fn start(&self, first_name: &str) -> Reply {
        let text = start_text(first_name);
        match make_buttons(&[CREDITS_BUTTON], &[CREDITS_PAYLOAD], 1) {
            Ok(keyboard) => Reply::TextWithKeyboard {
                text,
                keyboard,
                parse_mode: Some(ParseMode::Html),
            },
            Err(e) => {
                warn!("Error creating buttons: {e}");
                Reply::html(text)
            }
        }
    }
}
