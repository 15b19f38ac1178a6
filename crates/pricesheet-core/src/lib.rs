//! Shared domain types, spreadsheet addressing helpers and configuration for
//! the pricesheet workspace.

pub mod a1;
pub mod app_config;
pub mod batch;
pub mod config;
pub mod sheet_url;
pub mod types;

use thiserror::Error;

pub use a1::{column_range, row_update_range, validate_sheet_name};
pub use app_config::{AppConfig, Environment};
pub use batch::accumulate;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_SCRAPER_USER_AGENT};
pub use sheet_url::{extract_spreadsheet_id, is_valid_url, source_rows_from_column};
pub use types::{
    BatchPayload, ProductRecord, RetailerTag, SourceRow, UpdateFragment, ValueInputOption,
    PLACEHOLDER,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "could not extract a spreadsheet id from \"{0}\"; expected something like \
         https://docs.google.com/spreadsheets/d/SPREADSHEET_ID/edit#gid=0"
    )]
    InvalidSpreadsheetUrl(String),

    #[error("invalid column \"{0}\": expected one or more letters, e.g. \"H\"")]
    InvalidColumn(String),

    #[error("sheet name must not be empty")]
    EmptySheetName,

    #[error("unknown retailer \"{0}\": expected one of ikea, homedepot, amazon")]
    UnknownRetailer(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
