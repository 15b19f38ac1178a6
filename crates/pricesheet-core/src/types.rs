//! Records that flow from the sheet, through extraction, and back to the
//! sheet as a single batch update.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Marker written in place of a scraped value the page did not contain.
pub const PLACEHOLDER: &str = "#";

/// A product URL read from the input column, with the 1-based sheet row it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub row_number: u32,
    pub url: String,
}

impl SourceRow {
    #[must_use]
    pub fn new(row_number: u32, url: impl Into<String>) -> Self {
        Self {
            row_number,
            url: url.into(),
        }
    }
}

/// Retailer a product URL belongs to.
///
/// Derived from the URL text alone (see `pricesheet_scraper::classify`);
/// no DNS lookups are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetailerTag {
    Ikea,
    HomeDepot,
    Amazon,
    Unknown,
}

impl RetailerTag {
    /// Known retailers in classification priority order.
    pub const KNOWN: [RetailerTag; 3] = [
        RetailerTag::Ikea,
        RetailerTag::HomeDepot,
        RetailerTag::Amazon,
    ];

    /// Lower-case substring that identifies this retailer in a URL.
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            RetailerTag::Ikea => Some("ikea"),
            RetailerTag::HomeDepot => Some("homedepot"),
            RetailerTag::Amazon => Some("amazon"),
            RetailerTag::Unknown => None,
        }
    }

    /// Label written to the retailer column of the sheet.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RetailerTag::Ikea => "IKEA",
            RetailerTag::HomeDepot => "HOME DEPOT",
            RetailerTag::Amazon => "AMAZON",
            RetailerTag::Unknown => "",
        }
    }
}

impl fmt::Display for RetailerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetailerTag::Ikea => write!(f, "ikea"),
            RetailerTag::HomeDepot => write!(f, "homedepot"),
            RetailerTag::Amazon => write!(f, "amazon"),
            RetailerTag::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for RetailerTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RetailerTag::KNOWN
            .into_iter()
            .find(|tag| tag.marker() == Some(lowered.as_str()))
            .ok_or_else(|| CoreError::UnknownRetailer(s.to_string()))
    }
}

/// Product fields extracted from a retailer, in the common shape written back
/// to the sheet.
///
/// Fields the source did not expose hold an empty string or [`PLACEHOLDER`];
/// a missing field is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub retailer_label: String,
    pub price: String,
}

/// One row of cell values destined for `range`, in the Sheets API
/// `ValueRange` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFragment {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

impl UpdateFragment {
    /// Number of cells written per product row (columns B through F).
    pub const CELLS: usize = 5;

    #[must_use]
    pub fn new(range: impl Into<String>, cells: [String; Self::CELLS]) -> Self {
        Self {
            range: range.into(),
            values: vec![cells.to_vec()],
        }
    }
}

/// Ordered fragments submitted in a single batch write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPayload {
    pub data: Vec<UpdateFragment>,
}

impl BatchPayload {
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UpdateFragment> {
        self.data.iter()
    }
}

/// How the Sheets API interprets written values. `UserEntered` is required
/// for `=IMAGE(...)` formulas to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    Raw,
    #[default]
    UserEntered,
}

impl fmt::Display for ValueInputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueInputOption::Raw => write!(f, "RAW"),
            ValueInputOption::UserEntered => write!(f, "USER_ENTERED"),
        }
    }
}

impl FromStr for ValueInputOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RAW" => Ok(ValueInputOption::Raw),
            "USER_ENTERED" => Ok(ValueInputOption::UserEntered),
            other => Err(format!("expected RAW or USER_ENTERED, got \"{other}\"")),
        }
    }
}
