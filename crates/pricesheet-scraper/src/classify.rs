//! Retailer classification by URL substring.

use pricesheet_core::RetailerTag;

/// Maps a product URL to the retailer it belongs to.
///
/// The URL is lower-cased and checked for each retailer marker in priority
/// order (IKEA, Home Depot, Amazon); the first match wins. Total and pure.
#[must_use]
pub fn classify(url: &str) -> RetailerTag {
    let lowered = url.to_lowercase();
    RetailerTag::KNOWN
        .into_iter()
        .find(|tag| tag.marker().is_some_and(|marker| lowered.contains(marker)))
        .unwrap_or(RetailerTag::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_retailers() {
        assert_eq!(
            classify("https://www.ikea.com/us/en/p/abc-12345678/"),
            RetailerTag::Ikea
        );
        assert_eq!(
            classify("https://www.amazon.com/dp/B000X"),
            RetailerTag::Amazon
        );
        assert_eq!(
            classify("https://www.homedepot.ca/product/987654321"),
            RetailerTag::HomeDepot
        );
    }

    #[test]
    fn unknown_hosts_are_unknown() {
        assert_eq!(classify("https://example.com/foo"), RetailerTag::Unknown);
        assert_eq!(classify(""), RetailerTag::Unknown);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("HTTPS://WWW.IKEA.COM/P/X"), RetailerTag::Ikea);
        assert_eq!(classify("https://www.HomeDepot.ca/p/1"), RetailerTag::HomeDepot);
    }

    #[test]
    fn priority_order_breaks_ties() {
        // Marker anywhere in the URL counts, so the earlier retailer wins.
        assert_eq!(
            classify("https://www.amazon.com/s?k=ikea+chair"),
            RetailerTag::Ikea
        );
        assert_eq!(
            classify("https://www.amazon.ca/homedepot-gift-card/dp/B01"),
            RetailerTag::HomeDepot
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let url = "https://www.amazon.com/dp/B000X";
        assert_eq!(classify(url), classify(url));
    }
}
