//! IKEA product page parsing.

use std::sync::LazyLock;

use pricesheet_core::{ProductRecord, RetailerTag, PLACEHOLDER};
use scraper::{Html, Selector};

use crate::html::{attr, child_text};

static PRICE_INTEGER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pip-temp-price__integer").expect("valid price integer selector")
});
static PRICE_DECIMAL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pip-temp-price__decimal").expect("valid price decimal selector")
});
static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pip-header-section__title--big.notranslate").expect("valid title selector")
});
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pip-header-section__description-text").expect("valid description selector")
});
static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pip-image").expect("valid image selector"));

/// Selector that marks a rendered IKEA product page.
pub(crate) const READY_SELECTOR: &str = ".pip-header-section__title--big";

/// Extracts an IKEA product from page HTML.
///
/// The price is `"{integer}.{decimal}"`. The decimal element's first child
/// is the separator span, so its digits are the second child.
pub(crate) fn parse(html: &str) -> ProductRecord {
    let document = Html::parse_document(html);

    let integer = child_text(&document, &PRICE_INTEGER, 0).unwrap_or_else(placeholder);
    let decimal = child_text(&document, &PRICE_DECIMAL, 1).unwrap_or_else(placeholder);

    ProductRecord {
        title: child_text(&document, &TITLE, 0).unwrap_or_else(placeholder),
        image_url: attr(&document, &IMAGE, "src").unwrap_or_default(),
        description: child_text(&document, &DESCRIPTION, 0).unwrap_or_else(placeholder),
        retailer_label: RetailerTag::Ikea.label().to_string(),
        price: format!("{integer}.{decimal}"),
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="pip-header-section">
            <h1><span class="pip-header-section__title--big notranslate">POÄNG</span></h1>
            <span class="pip-header-section__description-text">Armchair, birch veneer</span>
          </div>
          <span class="pip-temp-price__integer">129</span><span class="pip-temp-price__decimal"><span class="pip-temp-price__separator">.</span>99</span>
          <img class="pip-image" src="https://www.ikea.com/us/en/images/products/poang.jpg" alt="">
        </body></html>
    "#;

    #[test]
    fn parses_full_product_page() {
        let record = parse(PAGE);
        assert_eq!(record.title, "POÄNG");
        assert_eq!(record.description, "Armchair, birch veneer");
        assert_eq!(record.price, "129.99");
        assert_eq!(
            record.image_url,
            "https://www.ikea.com/us/en/images/products/poang.jpg"
        );
        assert_eq!(record.retailer_label, "IKEA");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let record = parse("<html><body><p>Page moved</p></body></html>");
        assert_eq!(record.title, "#");
        assert_eq!(record.description, "#");
        assert_eq!(record.price, "#.#");
        assert_eq!(record.image_url, "");
        assert_eq!(record.retailer_label, "IKEA");
    }

    #[test]
    fn price_sides_default_independently() {
        let record = parse(r#"<span class="pip-temp-price__integer">45</span>"#);
        assert_eq!(record.price, "45.#");
    }
}
