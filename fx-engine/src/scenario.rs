//! Calculation scenarios and the fields a finished calculation can re-run with.

use serde::{Deserialize, Serialize};

/// The four scripted calculation dialogs.
///
/// Each gathers two values (an amount plus either a client rate or a desired
/// profit) and produces the matching [`crate::Calculation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// Rubles + client rate → baht + profit.
    RublesToBaht,
    /// Baht + client rate → rubles + profit.
    BahtToRubles,
    /// Rubles + desired profit → baht + client rate.
    RublesProfitToBaht,
    /// Baht + desired profit → rubles + client rate.
    BahtProfitToRubles,
}

/// A single input field of a stored calculation that can be edited and re-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecalcField {
    Rubles,
    Baht,
    Rate,
    Profit,
}

impl Scenario {
    /// The two input fields this scenario's recalculation keyboard offers.
    pub fn recalc_fields(&self) -> [RecalcField; 2] {
        match self {
            Scenario::RublesToBaht => [RecalcField::Rubles, RecalcField::Rate],
            Scenario::BahtToRubles => [RecalcField::Baht, RecalcField::Rate],
            Scenario::RublesProfitToBaht => [RecalcField::Rubles, RecalcField::Profit],
            Scenario::BahtProfitToRubles => [RecalcField::Baht, RecalcField::Profit],
        }
    }
}
