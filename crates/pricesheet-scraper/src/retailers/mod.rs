//! Per-retailer extraction.
//!
//! IKEA and Amazon expose everything on the product page, so they share an
//! HTML parse step regardless of how the page was fetched. Home Depot is read
//! from its JSON product API.

pub(crate) mod amazon;
pub mod homedepot;
pub(crate) mod ikea;

use pricesheet_core::{ProductRecord, RetailerTag};

pub use homedepot::{parse_product_number, HomeDepotAdapter};

/// Retailers whose product data is scraped from rendered page HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlRetailer {
    Ikea,
    Amazon,
}

impl HtmlRetailer {
    /// Maps a retailer tag to its page parser, if it has one.
    #[must_use]
    pub fn from_tag(tag: RetailerTag) -> Option<Self> {
        match tag {
            RetailerTag::Ikea => Some(HtmlRetailer::Ikea),
            RetailerTag::Amazon => Some(HtmlRetailer::Amazon),
            RetailerTag::HomeDepot | RetailerTag::Unknown => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> RetailerTag {
        match self {
            HtmlRetailer::Ikea => RetailerTag::Ikea,
            HtmlRetailer::Amazon => RetailerTag::Amazon,
        }
    }

    /// Extracts a product record from page HTML. Never fails: absent fields
    /// become placeholders.
    #[must_use]
    pub fn parse(self, html: &str) -> ProductRecord {
        match self {
            HtmlRetailer::Ikea => ikea::parse(html),
            HtmlRetailer::Amazon => amazon::parse(html),
        }
    }

    /// CSS selector whose presence means the product content has rendered.
    #[must_use]
    pub fn ready_selector(self) -> &'static str {
        match self {
            HtmlRetailer::Ikea => ikea::READY_SELECTOR,
            HtmlRetailer::Amazon => amazon::READY_SELECTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_page_retailers_have_html_parsers() {
        assert_eq!(
            HtmlRetailer::from_tag(RetailerTag::Ikea),
            Some(HtmlRetailer::Ikea)
        );
        assert_eq!(
            HtmlRetailer::from_tag(RetailerTag::Amazon),
            Some(HtmlRetailer::Amazon)
        );
        assert_eq!(HtmlRetailer::from_tag(RetailerTag::HomeDepot), None);
        assert_eq!(HtmlRetailer::from_tag(RetailerTag::Unknown), None);
    }

    #[test]
    fn parse_labels_records_with_the_retailer() {
        for retailer in [HtmlRetailer::Ikea, HtmlRetailer::Amazon] {
            assert_eq!(
                retailer.parse("<html></html>").retailer_label,
                retailer.tag().label()
            );
        }
    }
}
