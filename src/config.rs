use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the bot token when the config file has none.
pub const TOKEN_ENV_VAR: &str = "NinoBot";

/// Root folder for everything the bot writes to disk.
const DATA_FOLDER: &str = "NinoBotData";

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { path: PathBuf, source: serde_json::Error },
    /// Webhook URL is not a valid URL.
    InvalidUrl { url: String, reason: String },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            Self::ParseJson { path, source } => {
                write!(f, "failed to parse config file '{}': {}", path.display(), source)
            }
            Self::InvalidUrl { url, reason } => {
                write!(f, "invalid webhook url '{}': {}", url, reason)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::InvalidUrl { .. } | Self::Validation(_) => None,
        }
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    /// Falls back to the `NinoBot` environment variable when absent.
    #[serde(default)]
    telegram_bot_token: String,
    /// Directory under which `NinoBotData/` is created. Defaults to current directory.
    data_dir: Option<String>,
    /// Public URL Telegram should push updates to. Long polling when unset.
    webhook_url: Option<String>,
    #[serde(default = "default_listen_port")]
    listen_port: u16,
    /// Chance of answering a private message that matched no keyword.
    #[serde(default = "default_private_reply_probability")]
    private_reply_probability: f64,
}

fn default_listen_port() -> u16 {
    40991
}

fn default_private_reply_probability() -> f64 {
    0.75
}

pub struct Config {
    pub telegram_bot_token: String,
    /// `<data_dir>/NinoBotData`
    pub data_root: PathBuf,
    pub webhook_url: Option<Url>,
    pub listen_port: u16,
    pub private_reply_probability: f64,
}

impl Config {
    /// Load from a JSON file, filling the token from the environment if the file omits it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadFile { path: config_path.clone(), source: e })?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseJson { path: config_path.clone(), source: e })?;
        Self::from_file(file, std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Configuration with every field at its default and the token taken from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = ConfigFile {
            listen_port: default_listen_port(),
            private_reply_probability: default_private_reply_probability(),
            ..ConfigFile::default()
        };
        Self::from_file(file, std::env::var(TOKEN_ENV_VAR).ok())
    }

    fn from_file(file: ConfigFile, env_token: Option<String>) -> Result<Self, ConfigError> {
        let telegram_bot_token = if file.telegram_bot_token.is_empty() {
            env_token.unwrap_or_default()
        } else {
            file.telegram_bot_token
        };

        if telegram_bot_token.is_empty() {
            return Err(ConfigError::Validation(format!(
                "telegram_bot_token is required (config file or {TOKEN_ENV_VAR} env var)"
            )));
        }
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = telegram_bot_token.split(':').collect();
        if token_parts.len() != 2 || token_parts[0].parse::<u64>().is_err() || token_parts[1].is_empty() {
            return Err(ConfigError::Validation(
                "telegram_bot_token appears invalid (expected format: 123456789:ABCdefGHI...)".into()
            ));
        }

        if !(0.0..=1.0).contains(&file.private_reply_probability) {
            return Err(ConfigError::Validation(format!(
                "private_reply_probability must be between 0 and 1, got {}",
                file.private_reply_probability
            )));
        }

        let webhook_url = file
            .webhook_url
            .map(|u| Url::parse(&u).map_err(|e| ConfigError::InvalidUrl { reason: e.to_string(), url: u }))
            .transpose()?;

        let data_root = file
            .data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_FOLDER);

        Ok(Self {
            telegram_bot_token,
            data_root,
            webhook_url,
            listen_port: file.listen_port,
            private_reply_probability: file.private_reply_probability,
        })
    }

    /// Per-sender transcript files.
    pub fn logs_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.data_root.join("audio")
    }
}
