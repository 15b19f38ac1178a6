//! The fill form: `GET /` serves it, `POST /submit` runs a fill.
//!
//! Answers are plain text with status 200, including failures, since a
//! browser user reads them directly.

use std::sync::LazyLock;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use pricesheet_sheets::{fill_sheet, FillOptions, FillRequest};
use regex::Regex;
use serde::Deserialize;

use super::AppState;

const FORM_PAGE: &str = include_str!("../../static/index.html");
const MISSING_VALUES: &str = "All values must be added. Please go back and try again.";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct SubmitForm {
    spreadsheet_url: String,
    column: String,
    sheet_name: String,
}

pub(super) async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

pub(super) async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> impl IntoResponse {
    let spreadsheet_url = strip_tags(&form.spreadsheet_url);
    let column = strip_tags(&form.column);
    let mut sheet_name = strip_tags(&form.sheet_name);
    if sheet_name.is_empty() {
        sheet_name.clone_from(&state.config.default_sheet_name);
    }

    if spreadsheet_url.is_empty() || column.is_empty() {
        return MISSING_VALUES.to_string();
    }

    let request = FillRequest {
        spreadsheet_url,
        column,
        sheet_name,
    };
    let options = FillOptions {
        value_input_option: state.config.value_input_option,
        dry_run: false,
    };

    match fill_sheet(&state.sheets, &state.pipeline, &request, options).await {
        Ok(summary) => {
            tracing::info!(
                spreadsheet_id = %summary.spreadsheet_id,
                written = summary.written,
                failed = summary.failed,
                "form fill finished"
            );
            format!(
                "Spreadsheet should be filled now. Check in {} if all worked",
                request.spreadsheet_url
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "form fill failed");
            format!("Script failed with the following error: {e}")
        }
    }
}

/// Removes HTML tags and surrounding whitespace from a form value.
fn strip_tags(value: &str) -> String {
    TAG_RE.replace_all(value, "").trim().to_string()
}
