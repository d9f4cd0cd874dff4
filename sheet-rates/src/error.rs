use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing cell {0} in sheet response")]
    MissingCell(String),

    #[error("Cell {cell} is not a number: {value:?}")]
    Parse { cell: String, value: String },

    #[error("No spreadsheet configured")]
    NotConfigured,
}

pub type Result<T> = std::result::Result<T, RatesError>;
