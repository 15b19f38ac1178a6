use crate::app_config::{AppConfig, Environment};
use crate::types::{RetailerTag, ValueInputOption};
use crate::ConfigError;

/// Desktop browser user agent sent with page fetches unless overridden.
pub const DEFAULT_SCRAPER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let sheets_access_token = optional("GOOGLE_SHEETS_ACCESS_TOKEN");

    let env = parse_environment(&or_default("PRICESHEET_ENV", "development"));

    let bind_addr = or_default("PRICESHEET_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PRICESHEET_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PRICESHEET_LOG_LEVEL", "info");

    let sheets_api_base_url = or_default(
        "PRICESHEET_SHEETS_API_BASE_URL",
        "https://sheets.googleapis.com",
    );
    let default_sheet_name = or_default("PRICESHEET_DEFAULT_SHEET_NAME", "Sheet1");
    if default_sheet_name.trim().is_empty() {
        return Err(invalid(
            "PRICESHEET_DEFAULT_SHEET_NAME",
            "must not be empty".to_string(),
        ));
    }
    let value_input_option = or_default("PRICESHEET_VALUE_INPUT_OPTION", "USER_ENTERED")
        .parse::<ValueInputOption>()
        .map_err(|reason| invalid("PRICESHEET_VALUE_INPUT_OPTION", reason))?;

    let scraper_request_timeout_secs = parse_u64("PRICESHEET_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("PRICESHEET_SCRAPER_USER_AGENT", DEFAULT_SCRAPER_USER_AGENT);
    let scraper_max_concurrent_rows = parse_usize("PRICESHEET_SCRAPER_MAX_CONCURRENT_ROWS", "1")?;
    if scraper_max_concurrent_rows == 0 {
        return Err(invalid(
            "PRICESHEET_SCRAPER_MAX_CONCURRENT_ROWS",
            "must be at least 1".to_string(),
        ));
    }

    let homedepot_api_base_url = or_default(
        "PRICESHEET_HOMEDEPOT_API_BASE_URL",
        "https://www.homedepot.ca",
    );
    let homedepot_store_id = or_default("PRICESHEET_HOMEDEPOT_STORE_ID", "7142");

    let browser_retailers = parse_retailer_list(&or_default("PRICESHEET_BROWSER_RETAILERS", ""))
        .map_err(|reason| invalid("PRICESHEET_BROWSER_RETAILERS", reason))?;
    let browser_timeout_secs = parse_u64("PRICESHEET_BROWSER_TIMEOUT_SECS", "180")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheets_api_base_url,
        sheets_access_token,
        default_sheet_name,
        value_input_option,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_max_concurrent_rows,
        homedepot_api_base_url,
        homedepot_store_id,
        browser_retailers,
        browser_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a comma-separated retailer list such as `"ikea, amazon"`.
fn parse_retailer_list(raw: &str) -> Result<Vec<RetailerTag>, String> {
    let mut tags = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let tag = part.parse::<RetailerTag>().map_err(|e| e.to_string())?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
