//! # sheet-rates
//!
//! Exchange-rate provider for the calculator bot. A [`RatesSource`] fetches
//! the two live rates; [`RateProvider`] wraps a source and degrades to the
//! hardcoded fallback rates on any failure, so callers always get usable
//! rates. No retry, no caching: every calculation fetches fresh.

mod client;
mod error;

use async_trait::async_trait;
use fx_engine::ExchangeRates;
use std::sync::Arc;
use tracing::{debug, warn};

pub use client::SheetsClient;
pub use error::{RatesError, Result};

/// Contract for fetching the two live rates. Failures are recovered by
/// [`RateProvider`], never surfaced to the user.
#[async_trait]
pub trait RatesSource: Send + Sync {
    async fn fetch(&self) -> Result<ExchangeRates>;
}

/// Rate provider used by the dialog layer: a live source when one is
/// configured, the fallback constants otherwise or on any fetch failure.
#[derive(Clone)]
pub struct RateProvider {
    source: Option<Arc<dyn RatesSource>>,
}

impl RateProvider {
    /// Provider backed by a live source.
    pub fn new(source: Arc<dyn RatesSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Provider that only ever returns the fallback rates. Used when the
    /// spreadsheet id or API key is not configured.
    pub fn fallback_only() -> Self {
        Self { source: None }
    }

    /// Current rates. Logs and falls back on any retrieval failure; this
    /// call cannot fail.
    pub async fn current(&self) -> ExchangeRates {
        match &self.source {
            None => {
                debug!("No spreadsheet configured, using fallback rates");
                ExchangeRates::fallback()
            }
            Some(source) => match source.fetch().await {
                Ok(rates) => rates,
                Err(e) => {
                    warn!(error = %e, "Rate fetch failed, using fallback rates");
                    ExchangeRates::fallback()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(ExchangeRates);

    #[async_trait]
    impl RatesSource for FixedSource {
        async fn fetch(&self) -> Result<ExchangeRates> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RatesSource for FailingSource {
        async fn fetch(&self) -> Result<ExchangeRates> {
            Err(RatesError::NotConfigured)
        }
    }

    #[tokio::test]
    async fn live_source_rates_pass_through() {
        let rates = ExchangeRates::new(32.10, 80.00);
        let provider = RateProvider::new(Arc::new(FixedSource(rates)));
        assert_eq!(provider.current().await, rates);
    }

    #[tokio::test]
    async fn failing_source_falls_back() {
        let provider = RateProvider::new(Arc::new(FailingSource));
        assert_eq!(provider.current().await, ExchangeRates::fallback());
    }

    #[tokio::test]
    async fn unconfigured_provider_falls_back() {
        let provider = RateProvider::fallback_only();
        assert_eq!(provider.current().await, ExchangeRates::fallback());
    }
}
