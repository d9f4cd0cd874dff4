//! Handler for the "current rates" view.

use async_trait::async_trait;
use sheet_rates::RateProvider;
use xbot_core::{Handler, HandlerResponse, Message, Result};

use super::command::Command;
use super::render;

/// Answers the rates button with the current (or fallback) rates. Works from
/// any dialog state, so it sits after [`super::DialogHandler`] in the chain.
pub struct RatesHandler {
    rates: RateProvider,
}

impl RatesHandler {
    pub fn new(rates: RateProvider) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl Handler for RatesHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if Command::parse(&message.content) != Command::ShowRates {
            return Ok(HandlerResponse::Continue);
        }
        let rates = self.rates.current().await;
        Ok(HandlerResponse::Reply(render::rates_view(&rates)))
    }
}
