mod chatbot;
mod classifier;
mod config;

use std::path::Path;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Chat;
use teloxide::update_listeners::webhooks;
use tracing::{debug, error, info};
use tracing_subscriber::prelude::*;

use chatbot::{
    ChatIdentity, IncomingCallback, IncomingMessage, Reply, Responder, ResponderConfig, SessionStore,
    TelegramClient, TranscriptLogger, deliver,
};
use config::Config;

struct BotState {
    responder: Responder,
    sessions: SessionStore,
    transcripts: TranscriptLogger,
    telegram: TelegramClient,
}

impl BotState {
    fn new(config: &Config, bot: &Bot) -> Self {
        Self {
            responder: Responder::new(ResponderConfig {
                private_reply_probability: config.private_reply_probability,
            }),
            sessions: SessionStore::new(),
            transcripts: TranscriptLogger::new(config.logs_dir()),
            telegram: TelegramClient::new(bot.clone()),
        }
    }

    /// Classify and pick replies while holding the chat's session. Nothing here awaits.
    fn plan_message(&self, msg: &IncomingMessage) -> Vec<Reply> {
        let mut rng = rand::thread_rng();
        self.sessions.with_session(msg.chat_id, |session| {
            self.responder.respond_to_message(msg, session, &mut rng)
        })
    }
}

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ninobot.json".to_string());
    let loaded = if Path::new(&config_path).exists() {
        Config::load(&config_path)
    } else {
        Config::from_env()
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    for dir in [config.logs_dir(), config.audio_dir()] {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("❌ Failed to create {}: {e}", dir.display());
            std::process::exit(1);
        }
    }

    // Setup logging
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.data_root.join("ninobot.log"))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ Failed to open log file: {e}");
            std::process::exit(1);
        }
    };
    let (non_blocking, _guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .init();

    info!("🚀 Starting NinoBot...");
    if Path::new(&config_path).exists() {
        info!("Loaded config from {config_path}");
    } else {
        info!("No {config_path}, using environment");
    }
    info!("Transcripts in {}", config.logs_dir().display());

    let bot = Bot::new(&config.telegram_bot_token);
    let state = Arc::new(BotState::new(&config, &bot));

    let handler = dptree::entry()
        .inspect(record_transcript)
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback_query));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build();

    match config.webhook_url.clone() {
        Some(url) => {
            let addr = ([0, 0, 0, 0], config.listen_port).into();
            info!("Listening for webhooks on {addr} ({url})");
            let listener = match webhooks::axum(bot, webhooks::Options::new(addr, url)).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!("Failed to set up webhook: {e}");
                    return;
                }
            };
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("No webhook_url, long polling");
            dispatcher.dispatch().await;
        }
    }
}

/// Append the raw update to its sender's transcript without holding up the reply.
fn record_transcript(update: Update, state: Arc<BotState>) {
    let Some(chat) = update.chat() else {
        debug!("Update {} has no chat, not transcribed", update.id.0);
        return;
    };
    let key = chat_identity(chat).transcript_key();
    let transcripts = state.transcripts.clone();
    tokio::task::spawn_blocking(move || transcripts.record(&key, &update));
}

fn chat_identity(chat: &Chat) -> ChatIdentity {
    ChatIdentity {
        chat_id: chat.id.0,
        is_private: chat.is_private(),
        username: chat.username().map(str::to_string),
        first_name: chat.first_name().map(str::to_string),
        last_name: chat.last_name().map(str::to_string),
        title: chat.title().map(str::to_string),
    }
}

fn telegram_to_incoming(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        chat_id: msg.chat.id.0,
        is_private: msg.chat.is_private(),
        first_name: msg.from.as_ref().map(|u| u.first_name.clone()).unwrap_or_default(),
        text: msg.text().unwrap_or("").to_string(),
    }
}

async fn handle_message(msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let incoming = telegram_to_incoming(&msg);
    let text_preview: String = incoming.text.chars().take(100).collect();
    info!("📨 Message in chat {}: \"{text_preview}\"", incoming.chat_id);

    let replies = state.plan_message(&incoming);
    if !replies.is_empty() {
        info!("Replying to chat {} with {} message(s)", incoming.chat_id, replies.len());
    }
    deliver(&state.telegram, incoming.chat_id, replies).await;

    Ok(())
}

async fn handle_callback_query(q: CallbackQuery, state: Arc<BotState>) -> ResponseResult<()> {
    let incoming = IncomingCallback {
        callback_id: q.id.0.clone(),
        chat_id: q.message.as_ref().map(|m| m.chat().id.0),
        data: q.data.clone().unwrap_or_default(),
    };
    info!("🔘 Callback {:?} from chat {:?}", incoming.data, incoming.chat_id);

    let replies = state.responder.respond_to_callback(&incoming);
    deliver(&state.telegram, incoming.chat_id.unwrap_or_default(), replies).await;

    Ok(())
}
