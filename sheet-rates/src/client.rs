//! Google Sheets values API client.
//!
//! Reads cells B2 (USDT → THB) and B3 (RUB → USDT) from the first sheet of the
//! configured spreadsheet via a single GET against the values endpoint.

use async_trait::async_trait;
use fx_engine::{parse_decimal, ExchangeRates};

use crate::error::{RatesError, Result};
use crate::RatesSource;

/// Cell range holding the two rates, top to bottom.
const RATES_RANGE: &str = "B2:B3";

/// Rate source backed by the Google Sheets v4 values endpoint.
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            spreadsheet_id,
            api_key,
        }
    }

    fn values_url(&self) -> String {
        format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}?key={}",
            self.spreadsheet_id, RATES_RANGE, self.api_key
        )
    }
}

#[async_trait]
impl RatesSource for SheetsClient {
    async fn fetch(&self) -> Result<ExchangeRates> {
        let range: api::ValueRange = self
            .http
            .get(self.values_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let usdt_to_thb = numeric_cell(&range, 0, "B2")?;
        let rub_to_usdt = numeric_cell(&range, 1, "B3")?;
        Ok(ExchangeRates::new(usdt_to_thb, rub_to_usdt))
    }
}

/// Extracts the first column of `row` and parses it, accepting both '.' and
/// ',' decimal separators (the sheet is edited by hand in either convention).
fn numeric_cell(range: &api::ValueRange, row: usize, cell: &str) -> Result<f64> {
    let value = range
        .values
        .get(row)
        .and_then(|r| r.first())
        .ok_or_else(|| RatesError::MissingCell(cell.to_string()))?;
    parse_decimal(value).ok_or_else(|| RatesError::Parse {
        cell: cell.to_string(),
        value: value.clone(),
    })
}

mod api {
    use serde::Deserialize;

    /// Subset of the values endpoint response: rows of cell strings.
    #[derive(Deserialize, Debug)]
    pub struct ValueRange {
        #[serde(default)]
        pub values: Vec<Vec<String>>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_from(json: &str) -> api::ValueRange {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_values_response() {
        let range = range_from(
            r#"{"range":"Sheet1!B2:B3","majorDimension":"ROWS","values":[["31,89"],["79.50"]]}"#,
        );
        assert_eq!(numeric_cell(&range, 0, "B2").unwrap(), 31.89);
        assert_eq!(numeric_cell(&range, 1, "B3").unwrap(), 79.50);
    }

    #[test]
    fn missing_row_is_missing_cell() {
        let range = range_from(r#"{"values":[["31.89"]]}"#);
        assert!(matches!(
            numeric_cell(&range, 1, "B3"),
            Err(RatesError::MissingCell(_))
        ));
    }

    #[test]
    fn empty_response_has_no_cells() {
        let range = range_from(r#"{}"#);
        assert!(matches!(
            numeric_cell(&range, 0, "B2"),
            Err(RatesError::MissingCell(_))
        ));
    }

    #[test]
    fn non_numeric_cell_is_parse_error() {
        let range = range_from(r#"{"values":[["n/a"],["79.50"]]}"#);
        assert!(matches!(
            numeric_cell(&range, 0, "B2"),
            Err(RatesError::Parse { .. })
        ));
    }

    #[test]
    fn values_url_contains_range_and_key() {
        let client = SheetsClient::new("sheet123".into(), "key456".into());
        let url = client.values_url();
        assert!(url.contains("/spreadsheets/sheet123/values/B2:B3"));
        assert!(url.ends_with("key=key456"));
    }
}
