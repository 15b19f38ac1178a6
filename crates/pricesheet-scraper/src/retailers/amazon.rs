//! Amazon product page parsing.

use std::sync::LazyLock;

use pricesheet_core::{ProductRecord, RetailerTag, PLACEHOLDER};
use scraper::{Html, Selector};

use crate::html::{attr, child_text};

static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".a-offscreen").expect("valid price selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#productTitle").expect("valid title selector"));
static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#imgTagWrapperId img").expect("valid image selector"));

pub(crate) const READY_SELECTOR: &str = "#productTitle";

/// Extracts an Amazon product from page HTML. Amazon pages carry no usable
/// description, so that field is always empty.
pub(crate) fn parse(html: &str) -> ProductRecord {
    let document = Html::parse_document(html);

    let title = child_text(&document, &TITLE, 0)
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let price = child_text(&document, &PRICE, 0).unwrap_or_else(|| PLACEHOLDER.to_string());

    ProductRecord {
        title,
        image_url: attr(&document, &IMAGE, "src").unwrap_or_default(),
        description: String::new(),
        retailer_label: RetailerTag::Amazon.label().to_string(),
        price,
    }
}
