//! Data models for the first search result.

use serde::{Deserialize, Serialize};

/// Raw strings lifted from the first search result card, before any typing.
///
/// Absent sub-elements are `None`, except price and rating which fall back
/// to `"0"` so the normalizer always has text to work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    /// Absolute URL of the product detail page
    pub product_link: Option<String>,
    /// Trimmed title text
    pub title: Option<String>,
    /// Trimmed whole-unit price text, e.g. "1,234."
    pub price_text: String,
    /// Trimmed rating text, e.g. "4.3 out of 5 stars"
    pub rating_text: String,
    /// Thumbnail `src`
    pub image_url: Option<String>,
}

/// The product record written to stdout.
///
/// Field order is the key order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product title
    pub title: Option<String>,
    /// Display price, e.g. "₹1,234"
    pub price: String,
    /// Whole currency units, digits only
    pub raw_price: u64,
    /// Display rating, e.g. "4.3 out of 5 stars"
    pub rating: String,
    /// Star rating, 0.0 when it could not be read
    pub raw_rating: f64,
    /// Product image URL
    pub image_url: Option<String>,
    /// Full product URL
    pub product_link: Option<String>,
}
