//! Append-only per-sender transcripts of inbound updates.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum TranscriptError {
    Serialize(serde_json::Error),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "failed to serialize update: {e}"),
            Self::Io { path, source } => write!(f, "failed to write '{}': {}", path.display(), source),
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptLogger {
    folder: PathBuf,
}

impl TranscriptLogger {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self { folder: folder.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.folder.join(format!("{key}.txt"))
    }

    /// Append `<timestamp><json>\n` to `<folder>/<key>.txt`.
    pub fn log<T: Serialize>(&self, key: &str, update: &T) -> Result<PathBuf, TranscriptError> {
        let json = serde_json::to_string(update).map_err(TranscriptError::Serialize)?;
        let line = format!("{}{}\n", Local::now().format("%Y-%m-%dT%H:%M:%S"), json);

        let path = self.path_for(key);
        let io_err = |source| TranscriptError::Io { path: path.clone(), source };

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path).map_err(io_err)?;
        file.write_all(line.as_bytes()).map_err(io_err)?;
        Ok(path)
    }

    /// Best-effort variant of [`log`](Self::log): failures are only reported to the log.
    pub fn record<T: Serialize>(&self, key: &str, update: &T) {
        match self.log(key, update) {
            Ok(path) => debug!("Transcript appended to {}", path.display()),
            Err(e) => warn!("Transcript not written: {e}"),
        }
    }
}
