//! Cache types for catalog responses.

use std::sync::Arc;

use super::types::Product;

/// Cache key for catalog responses.
///
/// The endpoint takes no parameters, so there is only one entry today.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    AllProducts,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
}
