//! Home Depot Canada API response types.
//!
//! Only the fields the sheet needs are modeled. Every level is optional:
//! the API omits blocks freely (no install services, no images, price held
//! back for out-of-market stores), and an absent field becomes an empty cell
//! rather than a failed row.

use serde::Deserialize;

/// `GET /api/productsvc/v1/products/{id}/store/{store}?fields=BASIC_SPA`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicProductResponse {
    #[serde(default)]
    pub optimized_price: Option<OptimizedPrice>,
    /// Install services offered with the product. The first service's
    /// description doubles as the product description.
    #[serde(default, rename = "installServiceCTI")]
    pub install_service_cti: Option<InstallServiceCti>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedPrice {
    #[serde(default)]
    pub display_price: Option<DisplayPrice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayPrice {
    /// Observed as a JSON number (`129.98`); strings are tolerated.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstallServiceCti {
    /// `null` when the product has no services.
    #[serde(default)]
    pub services: Option<Vec<InstallService>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstallService {
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /api/fbtsvc/v1/fbt/products/{id}/store/{store}` ("frequently bought
/// together"). The anchor article carries the canonical name and images.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbtResponse {
    #[serde(default)]
    pub anchor_article: Option<AnchorArticle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnchorArticle {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ArticleImage>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleImage {
    #[serde(default)]
    pub url: Option<String>,
}

impl BasicProductResponse {
    /// Display price rendered as text; empty when the API withheld it.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.optimized_price
            .as_ref()
            .and_then(|p| p.display_price.as_ref())
            .and_then(|d| d.value.as_ref())
            .map(price_to_string)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.install_service_cti
            .as_ref()
            .and_then(|cti| cti.services.as_deref())
            .and_then(<[InstallService]>::first)
            .and_then(|s| s.description.clone())
            .unwrap_or_default()
    }
}

impl FbtResponse {
    #[must_use]
    pub fn title(&self) -> String {
        self.anchor_article
            .as_ref()
            .and_then(|a| a.name.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn image_url(&self) -> String {
        self.anchor_article
            .as_ref()
            .and_then(|a| a.images.as_deref())
            .and_then(<[ArticleImage]>::first)
            .and_then(|img| img.url.clone())
            .unwrap_or_default()
    }
}

/// Numbers keep their shortest form (`129.98`, `45`); whole floats drop the
/// trailing `.0` so `45.0` reads as `45`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn price_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i.to_string();
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                Some(f) => f.to_string(),
                None => n.to_string(),
            }
        }
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
