//! Home Depot Canada adapter: two JSON API calls per product.

pub mod response;

use std::sync::LazyLock;

use pricesheet_core::{ProductRecord, RetailerTag, DEFAULT_SCRAPER_USER_AGENT};
use regex::Regex;

use crate::client::ProductClient;
use crate::error::ScraperError;
use response::{BasicProductResponse, FbtResponse};

/// The API rejects non-browser clients, so both calls present as desktop
/// Chrome regardless of the configured page-fetch user agent.
const API_USER_AGENT: &str = DEFAULT_SCRAPER_USER_AGENT;
const API_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

static PRODUCT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)(?:#reviews)?$").expect("valid product number regex"));

/// Extracts the trailing numeric product id from a Home Depot product URL,
/// e.g. `.../p/name/987654321` or `.../987654321#reviews`.
///
/// # Errors
///
/// Returns [`ScraperError::ProductNumber`] when the last path segment is not
/// all digits.
pub fn parse_product_number(url: &str) -> Result<String, ScraperError> {
    PRODUCT_NUMBER_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| ScraperError::ProductNumber {
            url: url.to_owned(),
        })
}

/// Fetches a product through the basic product and frequently-bought-together
/// endpoints of one fixed store.
#[derive(Debug, Clone)]
pub struct HomeDepotAdapter {
    client: ProductClient,
    api_base_url: String,
    store_id: String,
}

impl HomeDepotAdapter {
    #[must_use]
    pub fn new(client: ProductClient, api_base_url: &str, store_id: &str) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            store_id: store_id.to_owned(),
        }
    }

    /// Extracts a product record for a Home Depot product URL.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::ProductNumber`]: no trailing numeric id in `url`.
    /// - Any fetch error from either API call (network, non-2xx, bad JSON).
    pub async fn extract(&self, url: &str) -> Result<ProductRecord, ScraperError> {
        let product_number = parse_product_number(url)?;
        let headers = [
            (reqwest::header::USER_AGENT, API_USER_AGENT),
            (reqwest::header::ACCEPT, API_ACCEPT),
        ];

        let basic: BasicProductResponse = self
            .client
            .fetch_json(
                &self.basic_product_url(&product_number),
                &headers,
                &format!("Home Depot product {product_number}"),
            )
            .await?;
        let fbt: FbtResponse = self
            .client
            .fetch_json(
                &self.fbt_url(&product_number),
                &headers,
                &format!("Home Depot FBT for {product_number}"),
            )
            .await?;

        Ok(ProductRecord {
            title: fbt.title(),
            image_url: fbt.image_url(),
            description: basic.description(),
            retailer_label: RetailerTag::HomeDepot.label().to_string(),
            price: basic.display_price(),
        })
    }

    fn basic_product_url(&self, product_number: &str) -> String {
        format!(
            "{}/api/productsvc/v1/products/{product_number}/store/{}?fields=BASIC_SPA&lang=en",
            self.api_base_url, self.store_id
        )
    }

    fn fbt_url(&self, product_number: &str) -> String {
        format!(
            "{}/api/fbtsvc/v1/fbt/products/{product_number}/store/{}?checkStockAndPrice=true&lang=en",
            self.api_base_url, self.store_id
        )
    }
}
