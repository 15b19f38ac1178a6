//! Command handlers. Results go to stdout; logs go to stderr.

use pricesheet_core::AppConfig;
use pricesheet_scraper::RowPipeline;
use pricesheet_sheets::{fill_sheet, FillOptions, FillRequest, SheetsClient};

/// Runs a fill and prints its summary. On `dry_run` the batch payload is
/// printed as JSON instead of being written.
///
/// # Errors
///
/// Returns an error if a client cannot be built, the request is invalid, or
/// the Sheets API read or write fails. Individual row failures only show up
/// in the summary counts.
pub(crate) async fn run_fill(
    config: &AppConfig,
    request: &FillRequest,
    dry_run: bool,
) -> anyhow::Result<()> {
    let sheets = SheetsClient::from_config(config)?;
    let pipeline = RowPipeline::from_config(config)?;
    let options = FillOptions {
        value_input_option: config.value_input_option,
        dry_run,
    };

    let summary = fill_sheet(&sheets, &pipeline, request, options).await?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&summary.payload)?);
    } else {
        println!(
            "filled {} of {} rows in spreadsheet {} ({} skipped, {} failed)",
            summary.written,
            summary.rows_valid,
            summary.spreadsheet_id,
            summary.skipped,
            summary.failed
        );
    }
    Ok(())
}

/// Extracts one product URL and prints the record as JSON.
///
/// # Errors
///
/// Returns an error if the URL belongs to no known retailer or extraction
/// fails.
pub(crate) async fn run_extract(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let pipeline = RowPipeline::from_config(config)?;
    let record = pipeline
        .extract(url)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no retailer adapter matches {url}"))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
