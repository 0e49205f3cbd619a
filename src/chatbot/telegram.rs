//! Delivery adapter: the outbound Telegram calls Nino needs, and a teloxide client for them.

use std::future::Future;

use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, FileId, InlineKeyboardMarkup, InputFile, ParseMode};
use tracing::{info, warn};

use crate::chatbot::message::Reply;

/// Outbound capabilities the responder relies on.
pub trait Delivery: Send + Sync {
    fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> impl Future<Output = Result<(), String>> + Send;

    fn send_text_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: InlineKeyboardMarkup,
        parse_mode: Option<ParseMode>,
    ) -> impl Future<Output = Result<(), String>> + Send;

    fn send_sticker(&self, chat_id: i64, file_id: &str) -> impl Future<Output = Result<(), String>> + Send;

    fn send_voice(
        &self,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> impl Future<Output = Result<(), String>> + Send;

    fn send_animation(&self, chat_id: i64, file_id: &str) -> impl Future<Output = Result<(), String>> + Send;

    fn answer_callback(
        &self,
        callback_id: &str,
        text: &str,
        show_alert: bool,
    ) -> impl Future<Output = Result<(), String>> + Send;
}

/// Send `replies` to `chat_id` in order.
///
/// A failed call is logged and the rest still go out.
pub async fn deliver<D: Delivery>(delivery: &D, chat_id: i64, replies: Vec<Reply>) {
    for reply in replies {
        let result = match reply {
            Reply::Text { text, parse_mode } => delivery.send_text(chat_id, &text, parse_mode).await,
            Reply::TextWithKeyboard { text, keyboard, parse_mode } => {
                delivery.send_text_with_keyboard(chat_id, &text, keyboard, parse_mode).await
            }
            Reply::Sticker(id) => delivery.send_sticker(chat_id, &id).await,
            Reply::Voice { file_id, caption } => {
                delivery.send_voice(chat_id, &file_id, caption.as_deref()).await
            }
            Reply::Animation(id) => delivery.send_animation(chat_id, &id).await,
            Reply::AnswerCallback { callback_id, text, show_alert } => {
                delivery.answer_callback(&callback_id, &text, show_alert).await
            }
        };
        if let Err(e) = result {
            warn!("Delivery to chat {} failed: {}", chat_id, e);
        }
    }
}

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl Delivery for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str, parse_mode: Option<ParseMode>) -> Result<(), String> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(mode) = parse_mode {
            request = request.parse_mode(mode);
        }

        request.await.map(|_| ()).map_err(|e| {
            let msg = format!("Failed to send: {e}");
            warn!("{}", msg);
            msg
        })
    }

    async fn send_text_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: InlineKeyboardMarkup,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), String> {
        let mut request = self.bot.send_message(ChatId(chat_id), text).reply_markup(keyboard);
        if let Some(mode) = parse_mode {
            request = request.parse_mode(mode);
        }

        request.await.map(|_| ()).map_err(|e| {
            let msg = format!("Failed to send with keyboard: {e}");
            warn!("{}", msg);
            msg
        })
    }

    async fn send_sticker(&self, chat_id: i64, file_id: &str) -> Result<(), String> {
        info!("Sending sticker to chat {}", chat_id);

        self.bot
            .send_sticker(ChatId(chat_id), InputFile::file_id(FileId(file_id.to_string())))
            .await
            .map(|_| ())
            .map_err(|e| {
                let msg = format!("Failed to send sticker: {e}");
                warn!("{}", msg);
                msg
            })
    }

    async fn send_voice(&self, chat_id: i64, file_id: &str, caption: Option<&str>) -> Result<(), String> {
        info!("🔊 Sending voice to chat {}", chat_id);

        let mut request = self
            .bot
            .send_voice(ChatId(chat_id), InputFile::file_id(FileId(file_id.to_string())));

        if let Some(cap) = caption {
            request = request.caption(cap);
        }

        request.await.map(|_| ()).map_err(|e| {
            let msg = format!("Failed to send voice: {e}");
            warn!("{}", msg);
            msg
        })
    }

    async fn send_animation(&self, chat_id: i64, file_id: &str) -> Result<(), String> {
        info!("💃 Sending animation to chat {}", chat_id);

        self.bot
            .send_animation(ChatId(chat_id), InputFile::file_id(FileId(file_id.to_string())))
            .await
            .map(|_| ())
            .map_err(|e| {
                let msg = format!("Failed to send animation: {e}");
                warn!("{}", msg);
                msg
            })
    }

    async fn answer_callback(&self, callback_id: &str, text: &str, show_alert: bool) -> Result<(), String> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .text(text)
            .show_alert(show_alert)
            .await
            .map(|_| ())
            .map_err(|e| {
                let msg = format!("Failed to answer callback: {e}");
                warn!("{}", msg);
                msg
            })
    }
}
