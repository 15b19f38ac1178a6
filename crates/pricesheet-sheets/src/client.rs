//! Google Sheets v4 REST client.

use std::time::Duration;

use pricesheet_core::{AppConfig, BatchPayload, ValueInputOption};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::SheetsError;
use crate::types::{BatchUpdateRequest, BatchUpdateResponse, ValueRangeResponse};

/// Reads a column and writes batched row updates on behalf of one access
/// token. No retries: a failed call fails the run.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    /// # Errors
    ///
    /// - [`SheetsError::InvalidBaseUrl`]: `base_url` is not an absolute
    ///   http(s) URL.
    /// - [`SheetsError::Http`]: the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        access_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, SheetsError> {
        let parsed =
            Url::parse(base_url).map_err(|_| SheetsError::InvalidBaseUrl(base_url.to_owned()))?;
        if parsed.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl(base_url.to_owned()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            access_token: access_token.to_owned(),
        })
    }

    /// # Errors
    ///
    /// - [`SheetsError::Config`]: no access token is configured.
    /// - Otherwise see [`SheetsClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SheetsError> {
        Self::new(
            &config.sheets_api_base_url,
            config.require_sheets_access_token()?,
            config.scraper_request_timeout_secs,
        )
    }

    /// Reads `range` (e.g. `Sheet1!H:H`) and returns its rows as text.
    /// An empty range yields an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] on transport failure, a non-2xx status, or an
    /// unreadable body.
    pub async fn read_column(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.endpoint(&["v4", "spreadsheets", spreadsheet_id, "values", range])?;
        tracing::debug!(spreadsheet_id, range, "reading column");

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let parsed: ValueRangeResponse =
            decode(response, &url, &format!("values of {range}")).await?;
        Ok(parsed.into_string_rows())
    }

    /// Applies every fragment in `payload` with one `values:batchUpdate` call.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] on transport failure, a non-2xx status, or an
    /// unreadable body.
    pub async fn batch_write(
        &self,
        spreadsheet_id: &str,
        payload: &BatchPayload,
        value_input_option: ValueInputOption,
    ) -> Result<BatchUpdateResponse, SheetsError> {
        let url = self.endpoint(&["v4", "spreadsheets", spreadsheet_id, "values:batchUpdate"])?;
        let body = BatchUpdateRequest {
            value_input_option,
            data: &payload.data,
        };
        tracing::debug!(spreadsheet_id, fragments = payload.len(), "writing batch update");

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        decode(response, &url, "batchUpdate response").await
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    url: &Url,
    context: &str,
) -> Result<T, SheetsError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(SheetsError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }
    serde_json::from_str::<T>(&body).map_err(|source| SheetsError::Deserialize {
        context: context.to_owned(),
        source,
    })
}
