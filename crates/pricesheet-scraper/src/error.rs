use thiserror::Error;

/// Row-local failures raised while extracting a product.
///
/// None of these abort a run: the row pipeline logs them and moves on.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no Home Depot product number at the end of {url}")]
    ProductNumber { url: String },

    #[error("browser automation failed for {url}: {reason}")]
    Browser { url: String, reason: String },
}

impl ScraperError {
    /// `true` when the failure came from talking to the remote source
    /// (network, status, payload or browser), as opposed to a URL that could
    /// not be interpreted.
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        !matches!(self, ScraperError::ProductNumber { .. })
    }
}
