//! One end-to-end fill run: read the URL column, extract every product, write
//! the results back in a single batch.

use pricesheet_core::{
    accumulate, column_range, extract_spreadsheet_id, source_rows_from_column, BatchPayload,
    ValueInputOption,
};
use pricesheet_scraper::RowPipeline;
use serde::Serialize;

use crate::client::SheetsClient;
use crate::error::FillError;

/// What to fill: the sheet's URL, the column holding product links, and the
/// sheet (tab) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRequest {
    pub spreadsheet_url: String,
    pub column: String,
    pub sheet_name: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillOptions {
    pub value_input_option: ValueInputOption,
    /// Build the payload but do not write it.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillSummary {
    pub spreadsheet_id: String,
    /// Rows returned by the column read, including blanks and non-URLs.
    pub rows_read: usize,
    /// Rows whose cell passed URL validation.
    pub rows_valid: usize,
    /// Fragments actually sent to the sheet (zero on a dry run).
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub payload: BatchPayload,
}

/// Runs a full fill.
///
/// The spreadsheet URL, column and sheet name are validated before any
/// network call. Per-row extraction failures are logged and counted; only
/// precondition and Sheets API failures abort.
///
/// # Errors
///
/// - [`FillError::Core`]: the URL has no spreadsheet id, or the column or
///   sheet name is invalid.
/// - [`FillError::Sheets`]: the column read or the batch write failed.
pub async fn fill_sheet(
    sheets: &SheetsClient,
    pipeline: &RowPipeline,
    request: &FillRequest,
    options: FillOptions,
) -> Result<FillSummary, FillError> {
    let spreadsheet_id = extract_spreadsheet_id(&request.spreadsheet_url)?;
    let range = column_range(&request.sheet_name, &request.column)?;

    let raw_rows = sheets.read_column(&spreadsheet_id, &range).await?;
    let rows = source_rows_from_column(&raw_rows);
    tracing::info!(
        spreadsheet_id = %spreadsheet_id,
        range = %range,
        rows_read = raw_rows.len(),
        rows_valid = rows.len(),
        "read source column"
    );

    let outcome = pipeline
        .process_detailed(&rows, &request.sheet_name)
        .await?;
    let payload = accumulate(outcome.fragments);

    let written = if payload.is_empty() {
        tracing::info!(spreadsheet_id = %spreadsheet_id, "nothing to write");
        0
    } else if options.dry_run {
        tracing::info!(
            spreadsheet_id = %spreadsheet_id,
            fragments = payload.len(),
            "dry run; batch not written"
        );
        0
    } else {
        let response = sheets
            .batch_write(&spreadsheet_id, &payload, options.value_input_option)
            .await?;
        tracing::debug!(
            updated_cells = response.total_updated_cells,
            updated_rows = response.total_updated_rows,
            "batch update applied"
        );
        payload.len()
    };

    tracing::info!(
        spreadsheet_id = %spreadsheet_id,
        written,
        skipped = outcome.skipped,
        failed = outcome.failed,
        "fill complete"
    );

    Ok(FillSummary {
        spreadsheet_id,
        rows_read: raw_rows.len(),
        rows_valid: rows.len(),
        written,
        skipped: outcome.skipped,
        failed: outcome.failed,
        payload,
    })
}
