mod form;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use pricesheet_core::AppConfig;
use pricesheet_scraper::RowPipeline;
use pricesheet_sheets::SheetsClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sheets: SheetsClient,
    pub pipeline: RowPipeline,
}

impl AppState {
    /// Builds the Sheets client and row pipeline from config.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let sheets = SheetsClient::from_config(&config)?;
        let pipeline = RowPipeline::from_config(&config)?;
        Ok(Self {
            config,
            sheets,
            pipeline,
        })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    env: String,
    request_id: String,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::index))
        .route("/submit", post(form::submit))
        .route("/api/v1/health", get(health))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        env: state.config.env.to_string(),
        request_id: req_id.0,
    })
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404!")
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use pricesheet_core::{AppConfig, Environment, ValueInputOption};

    use super::AppState;

    /// Config pointing both the Sheets API and the Home Depot API at `base`.
    pub fn test_config(base: &str) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            log_level: "debug".to_string(),
            sheets_api_base_url: base.to_string(),
            sheets_access_token: Some("test-token".to_string()),
            default_sheet_name: "Sheet1".to_string(),
            value_input_option: ValueInputOption::UserEntered,
            scraper_request_timeout_secs: 5,
            scraper_user_agent: "pricesheet-test/0.1".to_string(),
            scraper_max_concurrent_rows: 1,
            homedepot_api_base_url: base.to_string(),
            homedepot_store_id: "7142".to_string(),
            browser_retailers: Vec::new(),
            browser_timeout_secs: 5,
        }
    }

    pub fn test_state(base: &str) -> AppState {
        AppState::from_config(Arc::new(test_config(base))).expect("test state")
    }
}
