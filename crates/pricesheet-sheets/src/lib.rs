//! Google Sheets access and the end-to-end fill run.

pub mod client;
pub mod error;
pub mod fill;
pub mod types;

pub use client::SheetsClient;
pub use error::{FillError, SheetsError};
pub use fill::{fill_sheet, FillOptions, FillRequest, FillSummary};
pub use types::BatchUpdateResponse;
