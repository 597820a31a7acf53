//! Catalog API client implementation.
//!
//! One `GET` against the configured products endpoint, no query parameters,
//! no auth header. Successful product lists are cached with `moka` for the
//! configured TTL; failures are never cached.

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, instrument};
use url::Url;

use super::cache::{CacheKey, CacheValue};
use super::types::{Product, ProductsResponse};
use super::{FetchError, ProductSource};
use crate::config::CatalogConfig;

/// Maximum number of body characters kept for error diagnostics.
const ERROR_BODY_PREVIEW: usize = 200;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the products endpoint.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
    cache: Option<Cache<CacheKey, CacheValue>>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("cached", &self.inner.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("viorra/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache = (!config.cache_ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(1)
                .time_to_live(config.cache_ttl)
                .build()
        });

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.url.clone(),
                cache,
            }),
        })
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` on transport failure, `FetchError::Status`
    /// on a non-success response and `FetchError::Parse` on a malformed body.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn get_products(&self) -> Result<Arc<Vec<Product>>, FetchError> {
        if let Some(cache) = &self.inner.cache
            && let Some(CacheValue::Products(products)) = cache.get(&CacheKey::AllProducts).await
        {
            debug!(count = products.len(), "Cache hit for products");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %preview(&body, 500),
                "Catalog API returned non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: preview(&body, ERROR_BODY_PREVIEW),
            });
        }

        let products = Arc::new(parse_products(&body)?);
        debug!(count = products.len(), "Fetched products");

        if let Some(cache) = &self.inner.cache {
            cache
                .insert(CacheKey::AllProducts, CacheValue::Products(Arc::clone(&products)))
                .await;
        }

        Ok(products)
    }
}

impl ProductSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let products = self.get_products().await?;
        Ok(Arc::unwrap_or_clone(products))
    }
}

/// Parse a products response body.
///
/// # Errors
///
/// Returns `FetchError::Parse` if the body is not a products envelope.
pub(crate) fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    match serde_json::from_str::<ProductsResponse>(body) {
        Ok(response) => Ok(response.products),
        Err(e) => {
            tracing::error!(
                error = %e,
                body = %preview(body, 500),
                "Failed to parse catalog response"
            );
            Err(FetchError::Parse(e))
        }
    }
}

fn preview(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_parse_products() {
        let body = r#"{"products": [
            {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99},
            {"id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99}
        ], "total": 2}"#;
        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].title, "Eyeshadow Palette with Mirror");
    }

    #[test]
    fn test_parse_products_rejects_missing_envelope() {
        let err = parse_products(r#"[{"id": 1, "title": "x", "price": 1}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_parse_products_rejects_html() {
        assert!(matches!(
            parse_products("<html>bad gateway</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo", 2), "hé");
    }

    #[tokio::test]
    async fn test_cache_disabled_for_zero_ttl() {
        let config = CatalogConfig {
            cache_ttl: Duration::ZERO,
            ..CatalogConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert!(client.inner.cache.is_none());
        assert_eq!(client.endpoint().as_str(), "https://dummyjson.com/products");
    }
}
