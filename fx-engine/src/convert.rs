//! The four pure conversions and the tagged calculation result.
//!
//! Commission is applied as a multiplicative discount on the USDT → THB leg.
//! Monetary outputs are rounded to 2 decimal places, rates to 4. Non-positive
//! denominators degrade to a 0 result instead of panicking; callers rely on
//! that guard.

use serde::{Deserialize, Serialize};

use crate::num::{round2, round4};
use crate::rates::ExchangeRates;
use crate::scenario::{RecalcField, Scenario};

/// A finished calculation: one variant per scenario, carrying exactly the
/// inputs and outputs that scenario has. Input fields are stored as entered
/// (unrounded) so a recalculation can reuse them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Calculation {
    RublesToBaht {
        rubles: f64,
        client_rate: f64,
        thb_client: f64,
        profit: f64,
        real_rate: f64,
    },
    BahtToRubles {
        baht: f64,
        client_rate: f64,
        rubles_client: f64,
        profit: f64,
        rubles_real: f64,
    },
    RublesProfitToBaht {
        rubles: f64,
        desired_profit: f64,
        thb_client: f64,
        client_rate: f64,
        thb_real: f64,
    },
    BahtProfitToRubles {
        baht: f64,
        desired_profit: f64,
        rubles_client: f64,
        client_rate: f64,
        rubles_real: f64,
    },
}

/// Real THB yield of a ruble amount: RUB → USDT → THB with commission.
fn thb_yield(rates: &ExchangeRates, rubles: f64) -> f64 {
    let usdt = rubles / rates.rub_to_usdt;
    usdt * rates.usdt_to_thb * (1.0 - rates.commission)
}

/// Real ruble cost of a baht amount: THB → USDT → RUB, commission inverted.
fn rub_cost(rates: &ExchangeRates, baht: f64) -> f64 {
    let usdt = baht / (rates.usdt_to_thb * (1.0 - rates.commission));
    usdt * rates.rub_to_usdt
}

/// Scenario 1: rubles + client rate → baht for the client + operator profit.
pub fn rubles_to_baht(rates: &ExchangeRates, rubles: f64, client_rate: f64) -> Calculation {
    let thb_real = thb_yield(rates, rubles);
    let thb_client = rubles / client_rate;
    let profit = thb_real - thb_client;
    let real_rate = if thb_real > 0.0 {
        round4(rubles / thb_real)
    } else {
        0.0
    };
    Calculation::RublesToBaht {
        rubles,
        client_rate,
        thb_client: round2(thb_client),
        profit: round2(profit),
        real_rate,
    }
}

/// Scenario 2: baht + client rate → rubles from the client + profit.
///
/// Profit is computed in rubles, then divided by the client rate; downstream
/// it is labeled THB. The other scenarios derive profit in THB directly, so
/// the units are asymmetric across scenarios. Intentional; do not "fix".
pub fn baht_to_rubles(rates: &ExchangeRates, baht: f64, client_rate: f64) -> Calculation {
    let rubles_client = baht * client_rate;
    let rubles_real = rub_cost(rates, baht);
    let profit = (rubles_client - rubles_real) / client_rate;
    Calculation::BahtToRubles {
        baht,
        client_rate,
        rubles_client: round2(rubles_client),
        profit: round2(profit),
        rubles_real: round2(rubles_real),
    }
}

/// Scenario 3: rubles + desired profit → baht for the client + client rate.
pub fn rubles_profit_to_baht(rates: &ExchangeRates, rubles: f64, desired_profit: f64) -> Calculation {
    let thb_real = thb_yield(rates, rubles);
    let thb_client = thb_real - desired_profit;
    let client_rate = if thb_client > 0.0 {
        round4(rubles / thb_client)
    } else {
        0.0
    };
    Calculation::RublesProfitToBaht {
        rubles,
        desired_profit,
        thb_client: round2(thb_client),
        client_rate,
        thb_real: round2(thb_real),
    }
}

/// Scenario 4: baht + desired profit → rubles from the client + client rate.
pub fn baht_profit_to_rubles(rates: &ExchangeRates, baht: f64, desired_profit: f64) -> Calculation {
    let rubles_real = rub_cost(rates, baht);
    let profit_in_rubles = if baht > 0.0 {
        desired_profit * (rubles_real / baht)
    } else {
        0.0
    };
    let rubles_client = rubles_real + profit_in_rubles;
    let client_rate = if baht > 0.0 {
        round4(rubles_client / baht)
    } else {
        0.0
    };
    Calculation::BahtProfitToRubles {
        baht,
        desired_profit,
        rubles_client: round2(rubles_client),
        client_rate,
        rubles_real: round2(rubles_real),
    }
}

impl Scenario {
    /// Runs this scenario with its two gathered inputs.
    pub fn compute(&self, rates: &ExchangeRates, first: f64, second: f64) -> Calculation {
        match self {
            Scenario::RublesToBaht => rubles_to_baht(rates, first, second),
            Scenario::BahtToRubles => baht_to_rubles(rates, first, second),
            Scenario::RublesProfitToBaht => rubles_profit_to_baht(rates, first, second),
            Scenario::BahtProfitToRubles => baht_profit_to_rubles(rates, first, second),
        }
    }
}

impl Calculation {
    /// The scenario this calculation belongs to.
    pub fn scenario(&self) -> Scenario {
        match self {
            Calculation::RublesToBaht { .. } => Scenario::RublesToBaht,
            Calculation::BahtToRubles { .. } => Scenario::BahtToRubles,
            Calculation::RublesProfitToBaht { .. } => Scenario::RublesProfitToBaht,
            Calculation::BahtProfitToRubles { .. } => Scenario::BahtProfitToRubles,
        }
    }

    /// Re-runs this calculation with one input replaced, carrying the other
    /// input forward unchanged. Returns `None` when the field does not belong
    /// to this calculation's scenario.
    pub fn recalculate(
        &self,
        rates: &ExchangeRates,
        field: RecalcField,
        new_value: f64,
    ) -> Option<Calculation> {
        match (self, field) {
            (Calculation::RublesToBaht { client_rate, .. }, RecalcField::Rubles) => {
                Some(rubles_to_baht(rates, new_value, *client_rate))
            }
            (Calculation::RublesToBaht { rubles, .. }, RecalcField::Rate) => {
                Some(rubles_to_baht(rates, *rubles, new_value))
            }
            (Calculation::BahtToRubles { client_rate, .. }, RecalcField::Baht) => {
                Some(baht_to_rubles(rates, new_value, *client_rate))
            }
            (Calculation::BahtToRubles { baht, .. }, RecalcField::Rate) => {
                Some(baht_to_rubles(rates, *baht, new_value))
            }
            (Calculation::RublesProfitToBaht { desired_profit, .. }, RecalcField::Rubles) => {
                Some(rubles_profit_to_baht(rates, new_value, *desired_profit))
            }
            (Calculation::RublesProfitToBaht { rubles, .. }, RecalcField::Profit) => {
                Some(rubles_profit_to_baht(rates, *rubles, new_value))
            }
            (Calculation::BahtProfitToRubles { desired_profit, .. }, RecalcField::Baht) => {
                Some(baht_profit_to_rubles(rates, new_value, *desired_profit))
            }
            (Calculation::BahtProfitToRubles { baht, .. }, RecalcField::Profit) => {
                Some(baht_profit_to_rubles(rates, *baht, new_value))
            }
            _ => None,
        }
    }
}
