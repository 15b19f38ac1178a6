//! Product extraction for the pricesheet workspace.
//!
//! Classifies product URLs by retailer, fetches each one with that
//! retailer's adapter, and normalizes the result into sheet row updates.

pub mod adapter;
#[cfg(feature = "browser")]
pub mod browser;
pub mod classify;
pub mod client;
pub mod error;
pub(crate) mod html;
pub mod normalize;
pub mod pipeline;
pub mod retailers;

pub use adapter::{AdapterSet, RetailerAdapter};
#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;
pub use classify::classify;
pub use client::ProductClient;
pub use error::ScraperError;
pub use normalize::{image_formula, to_fragment};
pub use pipeline::{PipelineOutcome, RowPipeline};
pub use retailers::{parse_product_number, HomeDepotAdapter, HtmlRetailer};
