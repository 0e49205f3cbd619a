//! Platform-neutral views of inbound updates and the replies produced for them.

use teloxide::types::{InlineKeyboardMarkup, ParseMode};

/// A text message as the responder sees it.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Chat ID where this message was sent (negative = group, positive = DM).
    pub chat_id: i64,
    pub is_private: bool,
    /// Sender's first name, used by the welcome message.
    pub first_name: String,
    /// Raw text; empty for stickers, photos and the like.
    pub text: String,
}

/// An inline button press.
#[derive(Debug, Clone)]
pub struct IncomingCallback {
    pub callback_id: String,
    /// Chat of the message carrying the button, if Telegram still has it.
    pub chat_id: Option<i64>,
    pub data: String,
}

/// One outbound call to the delivery adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text {
        text: String,
        parse_mode: Option<ParseMode>,
    },
    TextWithKeyboard {
        text: String,
        keyboard: InlineKeyboardMarkup,
        parse_mode: Option<ParseMode>,
    },
    Sticker(String),
    Voice {
        file_id: String,
        caption: Option<String>,
    },
    Animation(String),
    AnswerCallback {
        callback_id: String,
        text: String,
        show_alert: bool,
    },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), parse_mode: None }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), parse_mode: Some(ParseMode::Html) }
    }
}

/// Who a transcript line belongs to.
#[derive(Debug, Clone, Default)]
pub struct ChatIdentity {
    pub chat_id: i64,
    pub is_private: bool,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
}

impl ChatIdentity {
    /// File stem for the transcript: username, else `first_last` in private
    /// chats; the group title otherwise. Falls back to the chat id.
    pub fn transcript_key(&self) -> String {
        let key = if self.is_private {
            match self.username.as_deref().filter(|u| !u.is_empty()) {
                Some(username) => username.to_string(),
                None => format!(
                    "{}_{}",
                    self.first_name.as_deref().unwrap_or(""),
                    self.last_name.as_deref().unwrap_or("")
                ),
            }
        } else {
            self.title.clone().unwrap_or_default()
        };

        let key = sanitize_file_stem(&key);
        if key.is_empty() || key == "_" {
            self.chat_id.to_string()
        } else {
            key
        }
    }
}

/// Keep a user-controlled string from escaping the logs folder.
fn sanitize_file_stem(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect();
    if cleaned.chars().all(|c| c == '.') {
        String::new()
    } else {
        cleaned
    }
}
