use std::net::SocketAddr;

use crate::types::{RetailerTag, ValueInputOption};
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sheets_api_base_url: String,
    /// Only the Sheets gateway needs it; single-URL extraction runs without.
    pub sheets_access_token: Option<String>,
    pub default_sheet_name: String,
    pub value_input_option: ValueInputOption,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub scraper_max_concurrent_rows: usize,
    pub homedepot_api_base_url: String,
    /// Store id used by both Home Depot product calls.
    pub homedepot_store_id: String,
    /// Retailers whose pages are rendered through browser automation instead
    /// of a plain HTTP fetch.
    pub browser_retailers: Vec<RetailerTag>,
    pub browser_timeout_secs: u64,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when no token was configured.
    pub fn require_sheets_access_token(&self) -> Result<&str, ConfigError> {
        self.sheets_access_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GOOGLE_SHEETS_ACCESS_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sheets_api_base_url", &self.sheets_api_base_url)
            .field(
                "sheets_access_token",
                &self.sheets_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("default_sheet_name", &self.default_sheet_name)
            .field("value_input_option", &self.value_input_option)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field(
                "scraper_max_concurrent_rows",
                &self.scraper_max_concurrent_rows,
            )
            .field("homedepot_api_base_url", &self.homedepot_api_base_url)
            .field("homedepot_store_id", &self.homedepot_store_id)
            .field("browser_retailers", &self.browser_retailers)
            .field("browser_timeout_secs", &self.browser_timeout_secs)
            .finish()
    }
}
