//! Per-row extraction: classify, dispatch, normalize.
//!
//! Rows are isolated from one another. A row that cannot be extracted is
//! logged and left out of the output; it never aborts the run.

use futures::stream::{self, StreamExt};
use pricesheet_core::{
    validate_sheet_name, AppConfig, CoreError, ProductRecord, SourceRow, UpdateFragment,
};

use crate::adapter::AdapterSet;
use crate::classify::classify;
use crate::error::ScraperError;
use crate::normalize::to_fragment;

/// Result of running a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// One fragment per successfully extracted row, in input order.
    pub fragments: Vec<UpdateFragment>,
    /// Rows whose URL matched no known retailer.
    pub skipped: usize,
    /// Rows whose extraction failed.
    pub failed: usize,
}

enum RowResult {
    Extracted(UpdateFragment),
    Skipped,
    Failed,
}

#[derive(Debug, Clone)]
pub struct RowPipeline {
    adapters: AdapterSet,
    max_concurrent: usize,
}

impl RowPipeline {
    /// `max_concurrent` bounds in-flight rows; values below 1 are treated
    /// as 1.
    #[must_use]
    pub fn new(adapters: AdapterSet, max_concurrent: usize) -> Self {
        Self {
            adapters,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(
            AdapterSet::from_config(config)?,
            config.scraper_max_concurrent_rows,
        ))
    }

    /// Classifies `url` and extracts it with the matching adapter.
    /// `Ok(None)` means the URL belongs to no known retailer.
    ///
    /// # Errors
    ///
    /// Returns the adapter's [`ScraperError`].
    pub async fn extract(&self, url: &str) -> Result<Option<ProductRecord>, ScraperError> {
        let tag = classify(url);
        match self.adapters.for_tag(tag) {
            Some(adapter) => adapter.extract(url).await.map(Some),
            None => Ok(None),
        }
    }

    /// Runs every row and returns the fragments of the ones that succeeded,
    /// in input order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySheetName`] before any row is fetched if
    /// `sheet_name` is blank.
    pub async fn process(
        &self,
        rows: &[SourceRow],
        sheet_name: &str,
    ) -> Result<Vec<UpdateFragment>, CoreError> {
        Ok(self.process_detailed(rows, sheet_name).await?.fragments)
    }

    /// Like [`RowPipeline::process`], also counting skipped and failed rows.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySheetName`] before any row is fetched if
    /// `sheet_name` is blank.
    pub async fn process_detailed(
        &self,
        rows: &[SourceRow],
        sheet_name: &str,
    ) -> Result<PipelineOutcome, CoreError> {
        validate_sheet_name(sheet_name)?;

        let results: Vec<RowResult> = stream::iter(rows.iter().cloned())
            .map(|row| async move { self.process_row(&row, sheet_name).await })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let mut outcome = PipelineOutcome::default();
        for result in results {
            match result {
                RowResult::Extracted(fragment) => outcome.fragments.push(fragment),
                RowResult::Skipped => outcome.skipped += 1,
                RowResult::Failed => outcome.failed += 1,
            }
        }

        if outcome.failed > 0 {
            tracing::warn!(
                failed = outcome.failed,
                total = rows.len(),
                "some rows failed extraction"
            );
        }
        Ok(outcome)
    }

    async fn process_row(&self, row: &SourceRow, sheet_name: &str) -> RowResult {
        let tag = classify(&row.url);
        tracing::info!(row = row.row_number, url = %row.url, retailer = %tag, "processing row");

        let Some(adapter) = self.adapters.for_tag(tag) else {
            tracing::debug!(row = row.row_number, url = %row.url, "no adapter for URL; skipping");
            return RowResult::Skipped;
        };

        let record = match adapter.extract(&row.url).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    row = row.row_number,
                    url = %row.url,
                    error = %e,
                    "extraction failed; row left unchanged"
                );
                return RowResult::Failed;
            }
        };

        match to_fragment(&record, sheet_name, row.row_number) {
            Ok(fragment) => RowResult::Extracted(fragment),
            Err(e) => {
                tracing::warn!(row = row.row_number, error = %e, "could not build update range");
                RowResult::Failed
            }
        }
    }
}
