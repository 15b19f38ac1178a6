//! Integration tests for `RowPipeline` against a local mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pricesheet_core::{CoreError, SourceRow};
use pricesheet_scraper::{AdapterSet, ProductClient, RowPipeline};

const IKEA_PAGE: &str = r#"<html><body>
  <span class="pip-header-section__title--big notranslate">KALLAX</span>
  <span class="pip-header-section__description-text">Shelving unit</span>
  <span class="pip-temp-price__integer">89</span><span class="pip-temp-price__decimal"><span>.</span>99</span>
  <img class="pip-image" src="https://img/kallax.jpg">
</body></html>"#;

const AMAZON_PAGE: &str = r#"<html><body>
  <span id="productTitle">Kindle</span>
  <span class="a-offscreen">$139.99</span>
  <div id="imgTagWrapperId"><img src="https://img/kindle.jpg"></div>
</body></html>"#;

fn pipeline(server: &MockServer, max_concurrent: usize) -> RowPipeline {
    let client = ProductClient::new(5, "pricesheet-test/0.1").expect("failed to build client");
    RowPipeline::new(AdapterSet::new(client, &server.uri(), "7142"), max_concurrent)
}

async fn mount_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ikea/p/kallax"))
        .respond_with(ResponseTemplate::new(200).set_body_string(IKEA_PAGE))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ikea/p/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/amazon/dp/B01"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AMAZON_PAGE))
        .mount(server)
        .await;
}

fn mixed_rows(server: &MockServer) -> Vec<SourceRow> {
    let uri = server.uri();
    vec![
        SourceRow::new(3, format!("{uri}/ikea/p/kallax")),
        SourceRow::new(5, format!("{uri}/ikea/p/broken")),
        SourceRow::new(6, "https://example.com/foo"),
        SourceRow::new(8, format!("{uri}/amazon/dp/B01")),
    ]
}

#[tokio::test]
async fn failed_and_unknown_rows_do_not_affect_the_others() {
    let server = MockServer::start().await;
    mount_pages(&server).await;

    let outcome = pipeline(&server, 1)
        .process_detailed(&mixed_rows(&server), "Sheet1")
        .await
        .expect("valid sheet name");

    let ranges: Vec<&str> = outcome.fragments.iter().map(|f| f.range.as_str()).collect();
    assert_eq!(ranges, ["Sheet1!B3:F3", "Sheet1!B8:F8"]);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.skipped, 1);

    assert_eq!(
        outcome.fragments[0].values[0],
        [
            "KALLAX",
            "=IMAGE(\"https://img/kallax.jpg\")",
            "Shelving unit",
            "IKEA",
            "89.99",
        ]
    );
    assert_eq!(
        outcome.fragments[1].values[0],
        ["Kindle", "=IMAGE(\"https://img/kindle.jpg\")", "", "AMAZON", "$139.99"]
    );
}

#[tokio::test]
async fn concurrent_runs_keep_input_order() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let rows = mixed_rows(&server);

    let sequential = pipeline(&server, 1).process(&rows, "Sheet1").await.unwrap();
    let concurrent = pipeline(&server, 4).process(&rows, "Sheet1").await.unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn rerunning_unchanged_input_yields_identical_fragments() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let rows = mixed_rows(&server);
    let pipeline = pipeline(&server, 1);

    let first = pipeline.process(&rows, "Sheet1").await.unwrap();
    let second = pipeline.process(&rows, "Sheet1").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_input_produces_nothing() {
    let server = MockServer::start().await;
    let outcome = pipeline(&server, 1)
        .process_detailed(&[], "Sheet1")
        .await
        .unwrap();
    assert!(outcome.fragments.is_empty());
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.skipped, 0);
}

#[tokio::test]
async fn blank_sheet_name_fails_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = pipeline(&server, 1)
        .process(&mixed_rows(&server), " ")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::EmptySheetName));
}

#[tokio::test]
async fn extract_returns_none_for_unknown_retailer() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let pipeline = pipeline(&server, 1);

    assert!(pipeline
        .extract("https://example.com/foo")
        .await
        .unwrap()
        .is_none());
    let record = pipeline
        .extract(&format!("{}/amazon/dp/B01", server.uri()))
        .await
        .unwrap()
        .expect("amazon URL is known");
    assert_eq!(record.title, "Kindle");
}

#[tokio::test]
async fn pipeline_runs_on_a_spawned_task() {
    let server = MockServer::start().await;
    mount_pages(&server).await;

    let pipeline = pipeline(&server, 2);
    let rows = mixed_rows(&server);
    let handle = tokio::spawn(async move { pipeline.process(&rows, "Sheet1").await });

    let fragments = handle
        .await
        .expect("task panicked")
        .expect("valid sheet name");
    let ranges: Vec<&str> = fragments.iter().map(|f| f.range.as_str()).collect();
    assert_eq!(ranges, ["Sheet1!B3:F3", "Sheet1!B8:F8"]);
}
