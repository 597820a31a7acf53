//! Product catalog: HTTP client, in-memory index and wishlist.
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs the single unauthenticated `GET` against the
//!   products endpoint and caches successful lists via `moka`
//! - [`CatalogIndex`] owns the fetched list, the search term, the derived
//!   filtered view and the wishlist
//! - [`ProductSource`] is the seam between the two so the index can be
//!   driven by fixtures in tests
//!
//! # Example
//!
//! ```rust,ignore
//! use viorra_storefront::catalog::{CatalogClient, CatalogIndex};
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let mut index = CatalogIndex::new();
//! index.load(&client).await?;
//!
//! index.set_search_term("phone");
//! for product in index.filtered() {
//!     println!("{} {}", product.title, product.price);
//! }
//! ```

mod cache;
mod client;
mod index;
pub mod types;
mod wishlist;

pub use client::CatalogClient;
pub use index::{CatalogIndex, LoadTicket};
pub use types::*;
pub use wishlist::{Wishlist, WishlistSnapshot};

use std::future::Future;

use thiserror::Error;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Start of the response body, for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Something that can produce the full product collection in one call.
pub trait ProductSource {
    /// Fetch every product.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
    }
}
