//! Domain types for the product catalog API.
//!
//! These mirror the JSON the products endpoint returns. Fields that some
//! products omit (brand, warranty text, reviews) default to empty values;
//! unknown fields are ignored.

use serde::{Deserialize, Serialize};

use viorra_core::{Price, ProductId, Rating};

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog ID, unique within one fetch.
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// Discount advertised by the catalog, in percent.
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub warranty_information: String,
    #[serde(default)]
    pub shipping_information: String,
    /// Reviews in the order the catalog returned them.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Case-insensitive substring match against the title only.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }

    /// Brand name, or an empty string for unbranded products.
    #[must_use]
    pub fn brand_name(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }
}

/// Physical dimensions of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub depth: f64,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: Option<u8>,
    /// ISO-8601 timestamp as sent by the API.
    #[serde(default)]
    pub date: Option<String>,
}

// =============================================================================
// Response envelope
// =============================================================================

/// Body of a successful products request.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    /// Total reported by the API (not used for paging).
    #[serde(default)]
    pub total: Option<u64>,
}
