//! Local session: the single registered user in device storage.
//!
//! The store holds at most one [`UserRecord`] under one key. Registering
//! overwrites it unconditionally, logging in only reads it, logging out
//! clears storage entirely.
//!
//! ```text
//! Empty --register--> Populated --logout--> Empty
//! Populated --register--> Populated
//! ```

pub mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_FILE, StorageError};

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::UserRecord;
use crate::models::session::keys;

/// Errors that can occur when logging in.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Nobody has registered on this device.
    #[error("no account found")]
    NoAccount,

    /// Email or password does not match the stored record.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The stored record could not be read.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Single-slot user session over a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a session store over `storage`.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Store `user` as the registered account, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: &UserRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.storage.set(keys::USER_DATA, &json).await?;
        debug!("Registered user stored");
        Ok(())
    }

    /// Check typed credentials against the stored record.
    ///
    /// Both email and password must match exactly (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `LoginError::NoAccount` if nobody registered,
    /// `LoginError::InvalidCredentials` on mismatch and
    /// `LoginError::Storage` if the record cannot be read.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, LoginError> {
        let user = self.read().await?.ok_or(LoginError::NoAccount)?;
        if !user.credentials_match(email, password) {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(user)
    }

    /// The registered user, if any.
    ///
    /// Storage failures are logged and reported as no user.
    pub async fn current_user(&self) -> Option<UserRecord> {
        match self.read().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Could not read stored user");
                None
            }
        }
    }

    /// Remove the registered user by clearing storage. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage cannot be cleared.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.storage.clear().await?;
        debug!("Session cleared");
        Ok(())
    }

    async fn read(&self) -> Result<Option<UserRecord>, StorageError> {
        let Some(json) = self.storage.get(keys::USER_DATA).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
