//! Application state shared by front ends.

use std::sync::Arc;

use crate::catalog::{CatalogClient, FetchError};
use crate::config::StorefrontConfig;
use crate::services::auth::AuthService;
use crate::session::{FileStore, SessionStore};

/// Long-lived resources: configuration, the catalog client and the
/// device-local session.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    session: SessionStore<FileStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, FetchError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let session = SessionStore::new(FileStore::new(&config.data_dir));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                session,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore<FileStore> {
        &self.inner.session
    }

    /// Authentication service bound to this state's session.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_, FileStore> {
        AuthService::new(&self.inner.session)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_file_lives_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(StorefrontConfig::with_data_dir(dir.path())).unwrap();
        assert!(state.session().storage().path().starts_with(dir.path()));
        assert_eq!(state.config().data_dir, dir.path());
    }
}
