//! Retailer adapter registry.
//!
//! Each known retailer maps to exactly one way of turning a product URL into
//! a [`ProductRecord`]. Adding a retailer means a new `RetailerTag` variant,
//! a marker, and an entry here.

use std::collections::HashMap;

use pricesheet_core::{AppConfig, ProductRecord, RetailerTag};

#[cfg(feature = "browser")]
use crate::browser::BrowserFetcher;
use crate::client::ProductClient;
use crate::error::ScraperError;
use crate::retailers::{HomeDepotAdapter, HtmlRetailer};

/// How one retailer's product data is obtained.
#[derive(Debug, Clone)]
pub enum RetailerAdapter {
    /// Plain HTTP GET of the product page, parsed without script execution.
    StaticHtml {
        client: ProductClient,
        retailer: HtmlRetailer,
    },
    /// JSON product API calls.
    HomeDepotApi(HomeDepotAdapter),
    /// Page rendered in headless Chrome, then parsed like a static page.
    #[cfg(feature = "browser")]
    Browser {
        fetcher: BrowserFetcher,
        retailer: HtmlRetailer,
    },
}

impl RetailerAdapter {
    /// Extracts the product behind `url`.
    ///
    /// # Errors
    ///
    /// Returns the adapter's [`ScraperError`]; page parsing itself never
    /// fails, so errors come from fetching or from an uninterpretable URL.
    pub async fn extract(&self, url: &str) -> Result<ProductRecord, ScraperError> {
        match self {
            RetailerAdapter::StaticHtml { client, retailer } => {
                let html = client.fetch_html(url).await?;
                Ok(retailer.parse(&html))
            }
            RetailerAdapter::HomeDepotApi(adapter) => adapter.extract(url).await,
            #[cfg(feature = "browser")]
            RetailerAdapter::Browser { fetcher, retailer } => {
                let html = fetcher
                    .fetch_rendered(url, retailer.ready_selector())
                    .await?;
                Ok(retailer.parse(&html))
            }
        }
    }
}

/// Adapters keyed by retailer. [`RetailerTag::Unknown`] never has one.
#[derive(Debug, Clone)]
pub struct AdapterSet {
    adapters: HashMap<RetailerTag, RetailerAdapter>,
}

impl AdapterSet {
    /// Default registry: IKEA and Amazon over static HTML, Home Depot over
    /// its product API.
    #[must_use]
    pub fn new(
        client: ProductClient,
        homedepot_api_base_url: &str,
        homedepot_store_id: &str,
    ) -> Self {
        let mut adapters = HashMap::new();
        for retailer in [HtmlRetailer::Ikea, HtmlRetailer::Amazon] {
            adapters.insert(
                retailer.tag(),
                RetailerAdapter::StaticHtml {
                    client: client.clone(),
                    retailer,
                },
            );
        }
        adapters.insert(
            RetailerTag::HomeDepot,
            RetailerAdapter::HomeDepotApi(HomeDepotAdapter::new(
                client,
                homedepot_api_base_url,
                homedepot_store_id,
            )),
        );
        Self { adapters }
    }

    /// Builds the registry from application config, switching the configured
    /// retailers to browser rendering when that support is compiled in.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = ProductClient::new(
            config.scraper_request_timeout_secs,
            &config.scraper_user_agent,
        )?;
        let set = Self::new(
            client,
            &config.homedepot_api_base_url,
            &config.homedepot_store_id,
        );
        Ok(set.with_browser_retailers(config))
    }

    #[cfg(feature = "browser")]
    fn with_browser_retailers(mut self, config: &AppConfig) -> Self {
        let fetcher =
            BrowserFetcher::new(&config.scraper_user_agent, config.browser_timeout_secs);
        for &tag in &config.browser_retailers {
            match HtmlRetailer::from_tag(tag) {
                Some(retailer) => {
                    tracing::info!(retailer = %tag, "using browser rendering");
                    self = self.with_adapter(
                        tag,
                        RetailerAdapter::Browser {
                            fetcher: fetcher.clone(),
                            retailer,
                        },
                    );
                }
                None => {
                    tracing::warn!(retailer = %tag, "retailer has no page parser; keeping its default adapter");
                }
            }
        }
        self
    }

    #[cfg(not(feature = "browser"))]
    fn with_browser_retailers(self, config: &AppConfig) -> Self {
        if !config.browser_retailers.is_empty() {
            tracing::warn!(
                retailers = ?config.browser_retailers,
                "browser rendering requested but this build lacks the `browser` feature; using static fetches"
            );
        }
        self
    }

    /// Replaces the adapter for `tag`. Registering for
    /// [`RetailerTag::Unknown`] is ignored.
    #[must_use]
    pub fn with_adapter(mut self, tag: RetailerTag, adapter: RetailerAdapter) -> Self {
        if tag != RetailerTag::Unknown {
            self.adapters.insert(tag, adapter);
        }
        self
    }

    #[must_use]
    pub fn for_tag(&self, tag: RetailerTag) -> Option<&RetailerAdapter> {
        self.adapters.get(&tag)
    }
}
