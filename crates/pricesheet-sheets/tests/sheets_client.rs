//! Integration tests for `SheetsClient` against a mock Sheets API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pricesheet_core::{accumulate, UpdateFragment, ValueInputOption};
use pricesheet_sheets::{SheetsClient, SheetsError};

fn test_client(server: &MockServer) -> SheetsClient {
    SheetsClient::new(&server.uri(), "test-token", 5).expect("failed to build SheetsClient")
}

#[tokio::test]
async fn read_column_sends_bearer_token_and_returns_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc123/values/Sheet1!H:H"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!H1:H1000",
            "majorDimension": "ROWS",
            "values": [["Links"], [], ["https://www.ikea.com/p/1"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rows = test_client(&server)
        .read_column("abc123", "Sheet1!H:H")
        .await
        .expect("read should succeed");

    assert_eq!(
        rows,
        vec![
            vec!["Links".to_string()],
            Vec::new(),
            vec!["https://www.ikea.com/p/1".to_string()],
        ]
    );
}

#[tokio::test]
async fn read_column_of_empty_sheet_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/abc123/values/Sheet1!H:H"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "range": "Sheet1!H1:H1000", "majorDimension": "ROWS" })),
        )
        .mount(&server)
        .await;

    let rows = test_client(&server)
        .read_column("abc123", "Sheet1!H:H")
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn read_column_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "The caller does not have permission" }
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .read_column("abc123", "Sheet1!H:H")
        .await
        .unwrap_err();

    match err {
        SheetsError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 403);
            assert!(body.contains("does not have permission"));
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn batch_write_posts_all_fragments_in_one_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc123/values:batchUpdate"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "valueInputOption": "USER_ENTERED",
            "data": [
                { "range": "Sheet1!B3:F3", "values": [["A", "=IMAGE(\"a\")", "", "IKEA", "1.#"]] },
                { "range": "Sheet1!B8:F8", "values": [["B", "=IMAGE(\"b\")", "", "AMAZON", "$2"]] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "abc123",
            "totalUpdatedRows": 2,
            "totalUpdatedColumns": 5,
            "totalUpdatedCells": 10,
            "totalUpdatedSheets": 1,
            "responses": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cells = |title: &str, image: &str, label: &str, price: &str| {
        [
            title.to_string(),
            format!("=IMAGE(\"{image}\")"),
            String::new(),
            label.to_string(),
            price.to_string(),
        ]
    };
    let payload = accumulate([
        UpdateFragment::new("Sheet1!B3:F3", cells("A", "a", "IKEA", "1.#")),
        UpdateFragment::new("Sheet1!B8:F8", cells("B", "b", "AMAZON", "$2")),
    ]);

    let response = test_client(&server)
        .batch_write("abc123", &payload, ValueInputOption::UserEntered)
        .await
        .expect("write should succeed");

    assert_eq!(response.spreadsheet_id, "abc123");
    assert_eq!(response.total_updated_cells, 10);
}

#[tokio::test]
async fn batch_write_honours_raw_input_option() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/abc123/values:batchUpdate"))
        .and(body_json(json!({ "valueInputOption": "RAW", "data": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "spreadsheetId": "abc123" })))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server)
        .batch_write("abc123", &accumulate([]), ValueInputOption::Raw)
        .await
        .expect("write should succeed");
}
