//! Chatbot module - Nino's replies, session state and transcripts.

pub mod assets;
pub mod engine;
pub mod keyboard;
pub mod message;
pub mod selector;
pub mod session;
pub mod telegram;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use engine::{Responder, ResponderConfig};
pub use message::{ChatIdentity, IncomingCallback, IncomingMessage, Reply};
pub use session::{Session, SessionStore};
pub use telegram::{Delivery, TelegramClient, deliver};
pub use transcript::TranscriptLogger;
