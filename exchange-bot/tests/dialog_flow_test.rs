//! Integration tests for the dialog sequencer, driven through the handler
//! chain with a recording Bot fake and the fallback rate provider (fixed
//! rates: USDT→THB 31.89, RUB→USDT 79.50, commission 0.25%).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use handler_chain::HandlerChain;
use sheet_rates::RateProvider;

use exchange_bot::dialog::command::{
    BTN_MAIN_MENU, BTN_RECALC_RATE, BTN_RUBLES_TO_BAHT, BTN_SHOW_RATES,
};
use exchange_bot::{DialogHandler, DialogState, RatesHandler};
use fx_engine::{Calculation, Scenario};
use xbot_core::{Bot, Chat, HandlerResponse, Keyboard, Message, Result, User};

/// Bot fake that records every outbound message with its keyboard.
#[derive(Default)]
struct RecordingBot {
    sent: tokio::sync::Mutex<Vec<(String, Option<Keyboard>)>>,
}

impl RecordingBot {
    async fn sent(&self) -> Vec<(String, Option<Keyboard>)> {
        self.sent.lock().await.clone()
    }

    async fn last(&self) -> (String, Option<Keyboard>) {
        self.sent.lock().await.last().cloned().expect("nothing sent")
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().await.push((text.to_string(), None));
        Ok(())
    }

    async fn send_with_keyboard(&self, _chat: &Chat, text: &str, keyboard: &Keyboard) -> Result<()> {
        self.sent
            .lock()
            .await
            .push((text.to_string(), Some(keyboard.clone())));
        Ok(())
    }
}

fn message(user_id: i64, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        created_at: Utc::now(),
    }
}

struct Fixture {
    bot: Arc<RecordingBot>,
    handler: Arc<DialogHandler>,
    chain: HandlerChain,
}

fn fixture() -> Fixture {
    let bot = Arc::new(RecordingBot::default());
    let rates = RateProvider::fallback_only();
    let handler = Arc::new(DialogHandler::new(bot.clone(), rates.clone()));
    let chain = HandlerChain::new()
        .add_handler(handler.clone())
        .add_handler(Arc::new(RatesHandler::new(rates)));
    Fixture { bot, handler, chain }
}

#[tokio::test]
async fn full_scenario_one_flow() {
    let f = fixture();
    let user = 42;

    f.chain.handle(&message(user, "/start")).await.unwrap();
    let (greeting, keyboard) = f.bot.last().await;
    assert!(greeting.contains("Выберите нужный сценарий"));
    assert!(matches!(keyboard, Some(Keyboard::Reply(_))));

    f.chain
        .handle(&message(user, BTN_RUBLES_TO_BAHT))
        .await
        .unwrap();
    let (intro, keyboard) = f.bot.last().await;
    assert!(intro.contains("Введите сумму в рублях"));
    assert_eq!(keyboard, Some(Keyboard::Remove));
    assert_eq!(
        f.handler.sessions().state(user).await,
        DialogState::AwaitingFirst(Scenario::RublesToBaht)
    );

    f.chain.handle(&message(user, "50000")).await.unwrap();
    let (prompt, _) = f.bot.last().await;
    assert!(prompt.contains("Введите курс для клиента"));

    f.chain.handle(&message(user, "2,6")).await.unwrap();
    let (result, keyboard) = f.bot.last().await;
    assert!(result.contains("19,230.77"));
    assert!(result.contains("Реальный курс"));
    match keyboard {
        Some(Keyboard::Reply(rows)) => assert_eq!(rows.last().unwrap()[0], BTN_MAIN_MENU),
        other => panic!("expected recalc keyboard, got {:?}", other),
    }

    assert_eq!(f.handler.sessions().state(user).await, DialogState::Idle);
    match f.handler.sessions().last_calculation(user).await {
        Some(Calculation::RublesToBaht {
            rubles,
            client_rate,
            thb_client,
            ..
        }) => {
            assert_eq!(rubles, 50000.0);
            assert_eq!(client_rate, 2.6);
            assert_eq!(thb_client, 19230.77);
        }
        other => panic!("expected scenario 1 calculation, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_input_reprompts_and_keeps_state() {
    let f = fixture();
    let user = 7;

    f.chain
        .handle(&message(user, BTN_RUBLES_TO_BAHT))
        .await
        .unwrap();
    f.chain.handle(&message(user, "abc")).await.unwrap();

    let (error_text, _) = f.bot.last().await;
    assert!(error_text.contains("Ошибка"));
    assert_eq!(
        f.handler.sessions().state(user).await,
        DialogState::AwaitingFirst(Scenario::RublesToBaht)
    );
    assert!(f.handler.sessions().last_calculation(user).await.is_none());

    // Still accepts a valid value afterwards.
    f.chain.handle(&message(user, "50000")).await.unwrap();
    assert_eq!(
        f.handler.sessions().state(user).await,
        DialogState::AwaitingSecond(Scenario::RublesToBaht, 50000.0)
    );
}

#[tokio::test]
async fn recalculating_the_rate_reuses_stored_rubles() {
    let f = fixture();
    let user = 9;

    f.chain
        .handle(&message(user, BTN_RUBLES_TO_BAHT))
        .await
        .unwrap();
    f.chain.handle(&message(user, "50000")).await.unwrap();
    f.chain.handle(&message(user, "2.6")).await.unwrap();

    f.chain
        .handle(&message(user, BTN_RECALC_RATE))
        .await
        .unwrap();
    let (prompt, keyboard) = f.bot.last().await;
    assert!(prompt.contains("Введите новый курс"));
    assert_eq!(keyboard, Some(Keyboard::Remove));

    f.chain.handle(&message(user, "2.5")).await.unwrap();
    let (text, _) = f.bot.last().await;
    assert!(text.starts_with("✅ Пересчет:"));
    assert!(text.contains("20,000.00"));

    match f.handler.sessions().last_calculation(user).await {
        Some(Calculation::RublesToBaht {
            rubles,
            client_rate,
            ..
        }) => {
            assert_eq!(rubles, 50000.0, "stored rubles must be reused unchanged");
            assert_eq!(client_rate, 2.5);
        }
        other => panic!("expected scenario 1 calculation, got {:?}", other),
    }
    assert_eq!(f.handler.sessions().state(user).await, DialogState::Idle);
}

#[tokio::test]
async fn recalc_without_saved_calculation_is_reported() {
    let f = fixture();
    let user = 11;

    f.chain
        .handle(&message(user, BTN_RECALC_RATE))
        .await
        .unwrap();

    let (text, _) = f.bot.last().await;
    assert!(text.contains("Нет сохраненных расчетов"));
    assert_eq!(f.handler.sessions().state(user).await, DialogState::Idle);
}

#[tokio::test]
async fn main_menu_clears_state_mid_dialog() {
    let f = fixture();
    let user = 13;

    f.chain
        .handle(&message(user, BTN_RUBLES_TO_BAHT))
        .await
        .unwrap();
    f.chain.handle(&message(user, BTN_MAIN_MENU)).await.unwrap();

    let (text, keyboard) = f.bot.last().await;
    assert!(text.contains("Выберите сценарий"));
    assert!(matches!(keyboard, Some(Keyboard::Reply(_))));
    assert_eq!(f.handler.sessions().state(user).await, DialogState::Idle);

    // A number is now unclaimed text: nobody handles it.
    let sent_before = f.bot.sent().await.len();
    let response = f.chain.handle(&message(user, "50000")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(f.bot.sent().await.len(), sent_before);
}

#[tokio::test]
async fn rates_view_replies_and_preserves_dialog_state() {
    let f = fixture();
    let user = 17;

    let response = f.chain.handle(&message(user, BTN_SHOW_RATES)).await.unwrap();
    match response {
        HandlerResponse::Reply(text) => {
            assert!(text.contains("31.89"));
            assert!(text.contains("79.5"));
            assert!(text.contains("2.4929"));
        }
        other => panic!("expected rates reply, got {:?}", other),
    }

    // Pressing the rates button mid-dialog answers with rates and leaves the
    // awaited input in place.
    f.chain
        .handle(&message(user, BTN_RUBLES_TO_BAHT))
        .await
        .unwrap();
    let response = f.chain.handle(&message(user, BTN_SHOW_RATES)).await.unwrap();
    assert!(matches!(response, HandlerResponse::Reply(_)));
    assert_eq!(
        f.handler.sessions().state(user).await,
        DialogState::AwaitingFirst(Scenario::RublesToBaht)
    );
}

#[tokio::test]
async fn users_do_not_share_sessions() {
    let f = fixture();

    f.chain.handle(&message(1, BTN_RUBLES_TO_BAHT)).await.unwrap();
    f.chain.handle(&message(2, "50000")).await.unwrap();

    assert_eq!(
        f.handler.sessions().state(1).await,
        DialogState::AwaitingFirst(Scenario::RublesToBaht)
    );
    assert_eq!(f.handler.sessions().state(2).await, DialogState::Idle);
}
