//! Authentication error types.

use thiserror::Error;

use crate::session::{LoginError, StorageError};

/// Client-side form problems, detected before any storage access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("missing required fields")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The form failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Login was rejected.
    #[error("login failed: {0}")]
    Login(#[from] LoginError),

    /// Storage failed while registering.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Storage could not be cleared on logout.
    #[error("logout failed: {0}")]
    Logout(#[source] StorageError),
}
