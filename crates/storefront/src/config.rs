//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `VIORRA_CATALOG_URL` - Products endpoint (default: <https://dummyjson.com/products>)
//! - `VIORRA_DATA_DIR` - Directory holding the local key-value file (default: `.viorra`)
//! - `VIORRA_HTTP_TIMEOUT_SECS` - Catalog request timeout (default: 10)
//! - `VIORRA_CATALOG_CACHE_TTL_SECS` - In-memory catalog cache TTL, 0 disables (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default products endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

const DEFAULT_DATA_DIR: &str = ".viorra";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration
    pub catalog: CatalogConfig,
    /// Directory for the persistent key-value file
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production", "staging")
    pub sentry_environment: Option<String>,
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Products endpoint
    pub url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// How long a fetched product list is reused; zero disables caching
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            catalog: CatalogConfig::from_env()?,
            data_dir: PathBuf::from(get_env_or_default("VIORRA_DATA_DIR", DEFAULT_DATA_DIR)),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration rooted at `data_dir` with every other value defaulted.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: CatalogConfig::default(),
            data_dir: data_dir.into(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = get_env_or_default("VIORRA_CATALOG_URL", DEFAULT_CATALOG_URL);
        Ok(Self {
            url: parse_catalog_url("VIORRA_CATALOG_URL", &url)?,
            timeout: Duration::from_secs(get_secs(
                "VIORRA_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            cache_ttl: Duration::from_secs(get_secs(
                "VIORRA_CATALOG_CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL_SECS,
            )?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

#[allow(clippy::expect_used)]
fn default_catalog_url() -> Url {
    Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid")
}

/// Parse and check the catalog endpoint.
fn parse_catalog_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Get a whole number of seconds with a default.
fn get_secs(key: &str, default: u64) -> Result<u64, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |v| {
        v.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_config() {
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(catalog.timeout, Duration::from_secs(10));
        assert_eq!(catalog.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_parse_catalog_url_rejects_non_http() {
        let err = parse_catalog_url("TEST_URL", "ftp://example.com/products").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "TEST_URL"));
    }

    #[test]
    fn test_parse_catalog_url_rejects_garbage() {
        assert!(parse_catalog_url("TEST_URL", "not a url").is_err());
    }

    #[test]
    fn test_parse_catalog_url_accepts_local_fixture_server() {
        let url = parse_catalog_url("TEST_URL", "http://127.0.0.1:8080/products").unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_with_data_dir() {
        let config = StorefrontConfig::with_data_dir("/tmp/viorra-test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/viorra-test"));
        assert!(config.sentry_dsn.is_none());
    }
}
