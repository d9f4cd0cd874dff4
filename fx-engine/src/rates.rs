//! Exchange rates used by every calculation.

use serde::{Deserialize, Serialize};

use crate::num::round4;

/// Fixed commission fraction applied on the USDT → THB leg (0.25%).
pub const COMMISSION: f64 = 0.0025;

/// The two market rates plus the fixed commission fraction.
///
/// Fetched fresh per calculation, never cached. Positivity is expected of the
/// rates but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// USDT → THB.
    pub usdt_to_thb: f64,
    /// RUB → USDT.
    pub rub_to_usdt: f64,
    /// Fraction deducted on the USDT → THB leg.
    pub commission: f64,
}

impl ExchangeRates {
    pub fn new(usdt_to_thb: f64, rub_to_usdt: f64) -> Self {
        Self {
            usdt_to_thb,
            rub_to_usdt,
            commission: COMMISSION,
        }
    }

    /// Hardcoded rates used whenever the live source is unavailable.
    pub fn fallback() -> Self {
        Self::new(31.89, 79.50)
    }

    /// Effective RUB/THB rate implied by the two legs, rounded to 4 places.
    /// Shown in the "current rates" view.
    pub fn effective_rub_thb(&self) -> f64 {
        round4(self.rub_to_usdt / self.usdt_to_thb)
    }
}
