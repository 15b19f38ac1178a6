//! Selector-based lookups over a parsed product page.
//!
//! A selector that matches nothing is an extraction gap, not an error: the
//! helpers return `None` and the caller substitutes a placeholder.

use scraper::{ElementRef, Html, Selector};

/// Text of the `index`-th child node of the first element matching
/// `selector`, the way a DOM `childNodes[index].innerText` read works.
///
/// Text children yield their text; element children yield their
/// concatenated descendant text.
pub(crate) fn child_text(document: &Html, selector: &Selector, index: usize) -> Option<String> {
    let element = first_match(document, selector)?;
    let child = element.children().nth(index)?;
    if let Some(text) = child.value().as_text() {
        return Some(text.to_string());
    }
    ElementRef::wrap(child).map(|el| el.text().collect::<String>())
}

/// Value of `attr` on the first element matching `selector`.
pub(crate) fn attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    first_match(document, selector)?
        .value()
        .attr(attr)
        .map(str::to_owned)
}

fn first_match<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    let found = document.select(selector).next();
    if found.is_none() {
        tracing::debug!(selector = ?selector, "selector matched nothing");
    }
    found
}
