//! Spreadsheet URL parsing and input-row filtering.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SourceRow;
use crate::CoreError;

static SPREADSHEET_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)/").expect("valid spreadsheet id regex")
});

// Optional scheme, dotted host, optional port, then an optional path/query
// and fragment. `\w` is restricted to ASCII to keep host matching strict.
static PRODUCT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:[A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(?::\d{1,5})?(?:/[A-Za-z0-9_ ./?%&=-]*)?(?:#.*)?$")
        .expect("valid product url regex")
});

/// Extracts the spreadsheet id from a Google Sheets URL such as
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSpreadsheetUrl`] when the URL does not contain
/// a `/spreadsheets/d/<id>/` segment.
pub fn extract_spreadsheet_id(spreadsheet_url: &str) -> Result<String, CoreError> {
    SPREADSHEET_ID_RE
        .captures(spreadsheet_url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::InvalidSpreadsheetUrl(spreadsheet_url.to_string()))
}

/// Returns `true` when `candidate` looks like a product page URL.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    !candidate.is_empty() && PRODUCT_URL_RE.is_match(candidate)
}

/// Turns the raw rows of a single-column read into [`SourceRow`]s.
///
/// Row numbers are 1-based sheet rows (`index + 1`). Rows whose first cell is
/// empty or not a URL are dropped without error.
#[must_use]
pub fn source_rows_from_column(rows: &[Vec<String>]) -> Vec<SourceRow> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let cell = row.first()?;
            if !is_valid_url(cell) {
                return None;
            }
            let row_number = u32::try_from(index + 1).ok()?;
            Some(SourceRow::new(row_number, cell.clone()))
        })
        .collect()
}
