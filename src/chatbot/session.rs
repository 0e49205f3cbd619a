//! Per-chat session state.

use std::collections::HashMap;
use std::sync::Mutex;

/// State carried between updates of one chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Set when Nino bursts out laughing; the next message gets the
    /// stop-laughing reply no matter what it says.
    pub round_riri: bool,
}

/// In-memory sessions keyed by chat id. Lost on restart.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the chat's session, creating it on first use.
    ///
    /// The lock is held for the duration of `f`, so keep it synchronous.
    pub fn with_session<T>(&self, chat_id: i64, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        f(sessions.entry(chat_id).or_default())
    }

    pub fn get(&self, chat_id: i64) -> Session {
        self.with_session(chat_id, |s| *s)
    }
}
