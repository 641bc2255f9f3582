//! Product records as served by the external catalog.
//!
//! These pass through to clients unchanged apart from envelope wrapping,
//! so the field names mirror the upstream JSON exactly.

use serde::{Deserialize, Serialize};

/// One product as the upstream catalog describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<ProductRating>,
}

/// Upstream aggregate rating; passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    pub rate: f64,
    pub count: u64,
}
