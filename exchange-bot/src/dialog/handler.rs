//! The dialog sequencer: walks a user through a scenario's two inputs, runs
//! the conversion, and drives the recalculation shortcut.

use std::sync::Arc;

use async_trait::async_trait;
use fx_engine::{parse_decimal, Calculation};
use sheet_rates::RateProvider;
use tracing::{error, info};
use xbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};

use super::command::Command;
use super::render;
use super::session::{DialogState, SessionStore};

/// Per-user dialog state machine. Consumes commands and awaited value input;
/// everything else (rates view, unknown text while idle) falls through the
/// chain.
pub struct DialogHandler {
    bot: Arc<dyn Bot>,
    rates: RateProvider,
    sessions: SessionStore,
}

impl DialogHandler {
    pub fn new(bot: Arc<dyn Bot>, rates: RateProvider) -> Self {
        Self {
            bot,
            rates,
            sessions: SessionStore::new(),
        }
    }

    /// Session store, exposed for runner diagnostics and tests.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

#[async_trait]
impl Handler for DialogHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let chat = &message.chat;
        let user_id = message.user.id;

        // The whole store stays locked for this message, including the rate
        // fetch: read-modify-write of one user's session must not interleave.
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(user_id).or_default();

        match Command::parse(&message.content) {
            Command::Start => {
                session.state = DialogState::Idle;
                self.bot
                    .send_with_keyboard(chat, render::GREETING, &render::main_menu())
                    .await?;
                Ok(HandlerResponse::Stop)
            }
            Command::MainMenu => {
                session.state = DialogState::Idle;
                self.bot
                    .send_with_keyboard(chat, render::CHOOSE_SCENARIO, &render::main_menu())
                    .await?;
                Ok(HandlerResponse::Stop)
            }
            Command::StartScenario(scenario) => {
                session.state = DialogState::AwaitingFirst(scenario);
                self.bot
                    .send_with_keyboard(
                        chat,
                        &render::scenario_intro(scenario),
                        &xbot_core::Keyboard::Remove,
                    )
                    .await?;
                Ok(HandlerResponse::Stop)
            }
            Command::Recalc(field) => {
                match &session.last_calculation {
                    None => {
                        self.bot
                            .send_message(chat, render::NO_SAVED_CALCULATION)
                            .await?;
                    }
                    Some(calc) => {
                        session.state = DialogState::AwaitingRecalc(calc.scenario(), field);
                        self.bot
                            .send_with_keyboard(
                                chat,
                                render::recalc_prompt(field),
                                &xbot_core::Keyboard::Remove,
                            )
                            .await?;
                    }
                }
                Ok(HandlerResponse::Stop)
            }
            // Rates view is another handler's job; state stays as it is.
            Command::ShowRates => Ok(HandlerResponse::Continue),
            Command::Input(text) => match session.state.clone() {
                DialogState::Idle => Ok(HandlerResponse::Continue),
                DialogState::AwaitingFirst(scenario) => match parse_decimal(&text) {
                    None => {
                        self.bot.send_message(chat, render::INVALID_NUMBER).await?;
                        Ok(HandlerResponse::Stop)
                    }
                    Some(first) => {
                        session.state = DialogState::AwaitingSecond(scenario, first);
                        self.bot
                            .send_message(chat, render::second_prompt(scenario))
                            .await?;
                        Ok(HandlerResponse::Stop)
                    }
                },
                DialogState::AwaitingSecond(scenario, first) => match parse_decimal(&text) {
                    None => {
                        self.bot.send_message(chat, render::INVALID_NUMBER).await?;
                        Ok(HandlerResponse::Stop)
                    }
                    Some(second) => {
                        let rates = self.rates.current().await;
                        let calc = scenario.compute(&rates, first, second);
                        info!(user_id, scenario = ?scenario, "Calculation finished");
                        session.state = DialogState::Idle;
                        session.last_calculation = Some(calc.clone());
                        self.bot
                            .send_with_keyboard(
                                chat,
                                &render::result(&calc),
                                &render::recalc_keyboard(scenario),
                            )
                            .await?;
                        Ok(HandlerResponse::Stop)
                    }
                },
                DialogState::AwaitingRecalc(scenario, field) => match parse_decimal(&text) {
                    None => {
                        self.bot.send_message(chat, render::INVALID_NUMBER).await?;
                        Ok(HandlerResponse::Stop)
                    }
                    Some(new_value) => {
                        // State is cleared before the attempt and stays cleared
                        // if the recalculation fails.
                        session.state = DialogState::Idle;
                        let rates = self.rates.current().await;
                        let outcome: std::result::Result<Calculation, HandlerError> = session
                            .last_calculation
                            .as_ref()
                            .ok_or_else(|| {
                                HandlerError::State(format!(
                                    "no stored calculation for user {}",
                                    user_id
                                ))
                            })
                            .and_then(|old| {
                                old.recalculate(&rates, field, new_value).ok_or_else(|| {
                                    HandlerError::State(format!(
                                        "field {:?} does not apply to {:?}",
                                        field, scenario
                                    ))
                                })
                            });
                        match outcome {
                            Ok(calc) => {
                                info!(user_id, scenario = ?scenario, field = ?field, "Recalculation finished");
                                session.last_calculation = Some(calc.clone());
                                self.bot
                                    .send_with_keyboard(
                                        chat,
                                        &render::recalculated(&calc),
                                        &render::recalc_keyboard(scenario),
                                    )
                                    .await?;
                            }
                            Err(e) => {
                                error!(user_id, error = %e, "Recalculation failed");
                                self.bot.send_message(chat, render::RECALC_FAILED).await?;
                            }
                        }
                        Ok(HandlerResponse::Stop)
                    }
                },
            },
        }
    }
}
