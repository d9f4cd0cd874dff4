//! Numeric helpers shared by the engine and its callers.

/// Rounds a monetary amount to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds a rate to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Parses a decimal number accepting both '.' and ',' as the separator.
///
/// Users (and spreadsheet cells) routinely use the comma form, e.g. "50000,5".
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}
