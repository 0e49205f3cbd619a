//! End-to-end tests for the chatbot module: message in, Telegram calls out.
//!
//! Run with: cargo test chatbot

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use super::assets::{self, ASSETS};
use super::engine::{CREDITS_TEXT, CREDITS_TOAST};
use super::*;

// =============================================================================
// MOCK DELIVERY
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Text { chat_id: i64, text: String, parse_mode: Option<ParseMode> },
    Keyboard { chat_id: i64, text: String, keyboard: InlineKeyboardMarkup },
    Sticker { chat_id: i64, file_id: String },
    Voice { chat_id: i64, file_id: String, caption: Option<String> },
    Animation { chat_id: i64, file_id: String },
    Answer { callback_id: String, text: String, show_alert: bool },
}

#[derive(Default)]
struct MockDelivery {
    sent: Mutex<Vec<Sent>>,
    fail_stickers: bool,
}

impl MockDelivery {
    fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn push(&self, s: Sent) -> Result<(), String> {
        self.sent.lock().unwrap().push(s);
        Ok(())
    }
}

impl Delivery for MockDelivery {
    async fn send_text(&self, chat_id: i64, text: &str, parse_mode: Option<ParseMode>) -> Result<(), String> {
        self.push(Sent::Text { chat_id, text: text.to_string(), parse_mode })
    }

    async fn send_text_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: InlineKeyboardMarkup,
        _parse_mode: Option<ParseMode>,
    ) -> Result<(), String> {
        self.push(Sent::Keyboard { chat_id, text: text.to_string(), keyboard })
    }

    async fn send_sticker(&self, chat_id: i64, file_id: &str) -> Result<(), String> {
        if self.fail_stickers {
            return Err("sticker rejected".to_string());
        }
        self.push(Sent::Sticker { chat_id, file_id: file_id.to_string() })
    }

    async fn send_voice(&self, chat_id: i64, file_id: &str, caption: Option<&str>) -> Result<(), String> {
        self.push(Sent::Voice {
            chat_id,
            file_id: file_id.to_string(),
            caption: caption.map(str::to_string),
        })
    }

    async fn send_animation(&self, chat_id: i64, file_id: &str) -> Result<(), String> {
        self.push(Sent::Animation { chat_id, file_id: file_id.to_string() })
    }

    async fn answer_callback(&self, callback_id: &str, text: &str, show_alert: bool) -> Result<(), String> {
        self.push(Sent::Answer {
            callback_id: callback_id.to_string(),
            text: text.to_string(),
            show_alert,
        })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

const PRIVATE_CHAT: i64 = 4242;
const GROUP_CHAT: i64 = -100123;

fn responder() -> Responder {
    Responder::new(ResponderConfig::default())
}

fn private_msg(text: &str) -> IncomingMessage {
    IncomingMessage {
        chat_id: PRIVATE_CHAT,
        is_private: true,
        first_name: "Mario".to_string(),
        text: text.to_string(),
    }
}

fn group_msg(text: &str) -> IncomingMessage {
    IncomingMessage {
        chat_id: GROUP_CHAT,
        is_private: false,
        first_name: "Mario".to_string(),
        text: text.to_string(),
    }
}

/// Run one message through the store + responder + delivery, like the dispatcher does.
async fn converse(
    store: &SessionStore,
    delivery: &MockDelivery,
    msg: IncomingMessage,
    rng: &mut StdRng,
) {
    let replies = store.with_session(msg.chat_id, |session| {
        responder().respond_to_message(&msg, session, rng)
    });
    deliver(delivery, msg.chat_id, replies).await;
}

fn animation_id() -> String {
    match ASSETS[assets::DANCE] {
        assets::Asset::Animation(id) => id.to_string(),
        other => panic!("asset 30 should be an animation, got {other:?}"),
    }
}

// =============================================================================
// END-TO-END MESSAGE TESTS
// =============================================================================

mod messages {
    use super::*;

    #[tokio::test]
    async fn test_ciao_nino_says_good_evening() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(1);

        converse(&store, &delivery, private_msg("Ciao Nino"), &mut rng).await;

        assert_eq!(
            delivery.sent(),
            vec![Sent::Text { chat_id: PRIVATE_CHAT, text: "Buonasera.".to_string(), parse_mode: None }]
        );
        assert!(!store.get(PRIVATE_CHAT).round_riri);
    }

    #[tokio::test]
    async fn test_dance_request_sends_animation() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(2);

        converse(&store, &delivery, group_msg("CHI VUOLE BALLARE CON NINO?"), &mut rng).await;

        assert_eq!(
            delivery.sent(),
            vec![Sent::Animation { chat_id: GROUP_CHAT, file_id: animation_id() }]
        );
    }

    #[tokio::test]
    async fn test_laughing_round_outranks_dance() {
        let store = SessionStore::new();
        store.with_session(GROUP_CHAT, |s| s.round_riri = true);
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(3);

        converse(&store, &delivery, group_msg("chi vuole ballare con nino?"), &mut rng).await;
        assert_eq!(
            delivery.sent(),
            vec![Sent::Text {
                chat_id: GROUP_CHAT,
                text: "Ma che caspitina ci riri!!!".to_string(),
                parse_mode: None,
            }]
        );
        assert!(!store.get(GROUP_CHAT).round_riri);

        // Round is over, the same request now dances.
        converse(&store, &delivery, group_msg("chi vuole ballare con nino?"), &mut rng).await;
        assert_eq!(
            delivery.sent().last(),
            Some(&Sent::Animation { chat_id: GROUP_CHAT, file_id: animation_id() })
        );
    }

    #[tokio::test]
    async fn test_laughing_round_is_per_chat() {
        let store = SessionStore::new();
        store.with_session(GROUP_CHAT, |s| s.round_riri = true);
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(4);

        converse(&store, &delivery, private_msg("ciao nino"), &mut rng).await;

        assert_eq!(
            delivery.sent(),
            vec![Sent::Text { chat_id: PRIVATE_CHAT, text: "Buonasera.".to_string(), parse_mode: None }]
        );
        assert!(store.get(GROUP_CHAT).round_riri);
    }

    #[tokio::test]
    async fn test_song_request() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(5);

        converse(&store, &delivery, group_msg("Nino cantaci una canzone"), &mut rng).await;

        let sent = delivery.sent();
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            Sent::Voice { caption, .. } => assert_eq!(caption.as_deref(), Some("By Davide Belvedere")),
            other => panic!("expected voice, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_group_chatter_is_ignored() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(6);

        converse(&store, &delivery, group_msg("che tempo fa oggi?"), &mut rng).await;

        assert!(delivery.sent().is_empty());
    }

    #[tokio::test]
    async fn test_start_sends_welcome_with_credits_button() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(7);

        converse(&store, &delivery, private_msg("/START"), &mut rng).await;

        let sent = delivery.sent();
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            Sent::Keyboard { chat_id, text, keyboard } => {
                assert_eq!(*chat_id, PRIVATE_CHAT);
                assert!(text.contains("Piacere di conoscerti, Mario!"));
                assert_eq!(
                    keyboard.inline_keyboard,
                    vec![vec![InlineKeyboardButton::callback("Credits 🌟", "credits")]]
                );
            }
            other => panic!("expected keyboard message, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_credits_command_has_no_callback_answer() {
        let store = SessionStore::new();
        let delivery = MockDelivery::new();
        let mut rng = StdRng::seed_from_u64(8);

        converse(&store, &delivery, group_msg("/credits"), &mut rng).await;

        assert_eq!(
            delivery.sent(),
            vec![Sent::Text {
                chat_id: GROUP_CHAT,
                text: CREDITS_TEXT.to_string(),
                parse_mode: Some(ParseMode::Html),
            }]
        );
    }

    #[tokio::test]
    async fn test_paused_line_sends_two_texts() {
        let mut session = Session::default();
        let replies = selector::select(
            crate::classifier::Intent::Random,
            Some(12),
            &mut session,
            &mut StdRng::seed_from_u64(9),
            0.75,
        );
        let delivery = MockDelivery::new();
        deliver(&delivery, PRIVATE_CHAT, replies).await;

        let texts: Vec<String> = delivery
            .sent()
            .into_iter()
            .map(|s| match s {
                Sent::Text { text, .. } => text,
                other => panic!("expected text, got {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["...", "Vuai ceccando un'anima gemella"]);
    }
}

// =============================================================================
// CALLBACK TESTS
// =============================================================================

mod callbacks {
    use super::*;

    fn callback(data: &str, chat_id: Option<i64>) -> IncomingCallback {
        IncomingCallback {
            callback_id: "cb-1".to_string(),
            chat_id,
            data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn test_credits_button() {
        let delivery = MockDelivery::new();
        let replies = responder().respond_to_callback(&callback("credits", Some(PRIVATE_CHAT)));
        deliver(&delivery, PRIVATE_CHAT, replies).await;

        assert_eq!(
            delivery.sent(),
            vec![
                Sent::Text {
                    chat_id: PRIVATE_CHAT,
                    text: CREDITS_TEXT.to_string(),
                    parse_mode: Some(ParseMode::Html),
                },
                Sent::Answer {
                    callback_id: "cb-1".to_string(),
                    text: CREDITS_TOAST.to_string(),
                    show_alert: false,
                },
            ]
        );
    }

    #[test]
    fn test_credits_button_without_message_still_answers() {
        let replies = responder().respond_to_callback(&callback("credits", None));
        assert_eq!(
            replies,
            vec![Reply::AnswerCallback {
                callback_id: "cb-1".to_string(),
                text: "Crediti".to_string(),
                show_alert: false,
            }]
        );
    }

    #[test]
    fn test_unknown_payload_ignored() {
        assert!(responder().respond_to_callback(&callback("dance", Some(1))).is_empty());
    }
}

// =============================================================================
// DELIVERY TESTS
// =============================================================================

mod delivery {
    use super::*;

    #[tokio::test]
    async fn test_failure_does_not_stop_the_batch() {
        let delivery = MockDelivery { fail_stickers: true, ..Default::default() };
        let replies = vec![
            Reply::Sticker("sticker".to_string()),
            Reply::text("still here"),
        ];

        deliver(&delivery, GROUP_CHAT, replies).await;

        assert_eq!(
            delivery.sent(),
            vec![Sent::Text { chat_id: GROUP_CHAT, text: "still here".to_string(), parse_mode: None }]
        );
    }

    #[tokio::test]
    async fn test_every_asset_kind_reaches_the_adapter() {
        let delivery = MockDelivery::new();
        for index in [0, 13, 15, 30] {
            let mut session = Session::default();
            deliver(&delivery, 1, selector::play_asset(index, &mut session)).await;
        }

        let sent = delivery.sent();
        assert!(matches!(sent[0], Sent::Text { .. }));
        assert!(matches!(sent[1], Sent::Sticker { .. }));
        assert!(matches!(sent[2], Sent::Voice { caption: None, .. }));
        assert!(matches!(sent[3], Sent::Animation { .. }));
    }
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

mod properties {
    use super::*;

    #[test]
    fn test_ball_plus_nino_token_always_dances() {
        let prefixes = ["", "ehi ", "buongiorno ", "quanti anni ", "ciao nino "];
        let balls = ["ball", "ballare", "balletto"];
        let ninos = ["nino", "ni", "nì"];
        let mut rng = StdRng::seed_from_u64(10);

        for prefix in prefixes {
            for ball in balls {
                for nino in ninos {
                    let text = format!("{prefix}{ball} {nino}");
                    let mut session = Session::default();
                    let replies = responder().respond_to_message(&group_msg(&text), &mut session, &mut rng);
                    assert_eq!(replies, ASSETS[assets::DANCE].replies(), "{text}");
                }
            }
        }
    }
}
