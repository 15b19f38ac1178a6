//! Google Sheets v4 `values` wire types.

use pricesheet_core::{UpdateFragment, ValueInputOption};
use serde::{Deserialize, Serialize};

/// Response of `GET .../values/{range}`. The API omits `values` entirely
/// when the range holds no data.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRangeResponse {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRangeResponse {
    /// Cell values as text. Numbers and booleans keep their JSON rendering;
    /// nulls become empty strings.
    #[must_use]
    pub fn into_string_rows(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Body of `POST .../values:batchUpdate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest<'a> {
    pub value_input_option: ValueInputOption,
    pub data: &'a [UpdateFragment],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub total_updated_rows: u64,
    #[serde(default)]
    pub total_updated_columns: u64,
    #[serde(default)]
    pub total_updated_cells: u64,
    #[serde(default)]
    pub total_updated_sheets: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_values_reads_as_empty_sheet() {
        let parsed: ValueRangeResponse =
            serde_json::from_value(json!({ "range": "Sheet1!H1:H1000", "majorDimension": "ROWS" }))
                .unwrap();
        assert!(parsed.into_string_rows().is_empty());
    }

    #[test]
    fn non_string_cells_are_coerced() {
        let parsed: ValueRangeResponse = serde_json::from_value(json!({
            "values": [["https://a"], [], [42], [true], [null]]
        }))
        .unwrap();
        assert_eq!(
            parsed.into_string_rows(),
            vec![
                vec!["https://a".to_string()],
                vec![],
                vec!["42".to_string()],
                vec!["true".to_string()],
                vec![String::new()],
            ]
        );
    }

    #[test]
    fn batch_request_uses_api_field_names() {
        let data = [UpdateFragment::new(
            "Sheet1!B3:F3",
            [
                "t".to_string(),
                "=IMAGE(\"i\")".to_string(),
                "d".to_string(),
                "IKEA".to_string(),
                "1.0".to_string(),
            ],
        )];
        let body = serde_json::to_value(BatchUpdateRequest {
            value_input_option: ValueInputOption::UserEntered,
            data: &data,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "valueInputOption": "USER_ENTERED",
                "data": [{
                    "range": "Sheet1!B3:F3",
                    "values": [["t", "=IMAGE(\"i\")", "d", "IKEA", "1.0"]]
                }]
            })
        );
    }
}
