//! # fx-engine
//!
//! Pure conversion engine for the RUB → USDT → THB exchange calculator.
//! No I/O: rates come in, a tagged [`Calculation`] comes out.
//!
//! ## Modules
//!
//! - [`rates`] – [`ExchangeRates`] and the fallback constants
//! - [`scenario`] – [`Scenario`] and [`RecalcField`]
//! - [`convert`] – the four conversions and [`Calculation`]
//! - [`num`] – rounding and decimal parsing helpers

pub mod convert;
pub mod num;
pub mod rates;
pub mod scenario;

pub use convert::{
    baht_profit_to_rubles, baht_to_rubles, rubles_profit_to_baht, rubles_to_baht, Calculation,
};
pub use num::{parse_decimal, round2, round4};
pub use rates::{ExchangeRates, COMMISSION};
pub use scenario::{RecalcField, Scenario};
