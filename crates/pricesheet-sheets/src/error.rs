use pricesheet_core::{ConfigError, CoreError};
use thiserror::Error;

/// Failures talking to the Google Sheets API.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned {status} for {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Sheets API base URL \"{0}\"")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Fatal failure of a whole fill run. Row-level extraction problems never
/// surface here.
#[derive(Debug, Error)]
pub enum FillError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sheets(#[from] SheetsError),
}
