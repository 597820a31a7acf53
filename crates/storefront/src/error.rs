//! Unified error handling with Sentry integration.
//!
//! Every failure a screen can hit funnels into [`AppError`], which turns it
//! into the toast the user sees. Unexpected errors (storage, network) are
//! captured to Sentry first; expected ones (bad password, empty field) are not.

use std::time::Duration;

use thiserror::Error;

use crate::catalog::FetchError;
use crate::config::ConfigError;
use crate::notify::Toast;
use crate::services::auth::{AuthError, ValidationError};
use crate::session::{LoginError, StorageError};

const SHORT: Duration = Duration::from_secs(2);
const LONG: Duration = Duration::from_secs(3);

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog fetch failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] FetchError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Requested product is not in the loaded catalog.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Auth(AuthError::Storage(err))
    }
}

impl AppError {
    /// Whether this error points at a fault rather than user input.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::Catalog(_)
                | Self::Config(_)
                | Self::Auth(
                    AuthError::Storage(_)
                        | AuthError::Logout(_)
                        | AuthError::Login(LoginError::Storage(_))
                )
        )
    }

    /// Report to Sentry (unexpected errors only) and describe for the user.
    ///
    /// Internal details such as file paths or response bodies never reach
    /// the toast text.
    #[must_use]
    pub fn into_toast(self) -> Toast {
        if self.is_unexpected() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        } else {
            tracing::debug!(error = %self, "Rejected user action");
        }

        match &self {
            Self::Auth(AuthError::Validation(err)) => match err {
                ValidationError::MissingFields => {
                    Toast::error("Missing Fields", "Please fill all fields", LONG)
                }
                ValidationError::PasswordMismatch => {
                    Toast::error("Password Mismatch", "Passwords do not match", LONG)
                }
            },
            Self::Auth(AuthError::Login(err)) => match err {
                LoginError::NoAccount => {
                    Toast::error("No account found", "Please register first", SHORT)
                }
                LoginError::InvalidCredentials => Toast::error(
                    "Invalid Credentials",
                    "Email or Password is incorrect",
                    SHORT,
                ),
                LoginError::Storage(_) => {
                    Toast::error("Login Failed", "Something went wrong", SHORT)
                }
            },
            Self::Auth(AuthError::Storage(_)) => {
                Toast::error("Registration Failed", "Please try again", SHORT)
            }
            Self::Auth(AuthError::Logout(_)) => {
                Toast::error("Logout Failed", "Please try again", SHORT)
            }
            Self::Catalog(_) => {
                Toast::error("Could not load products", "Please try again later", LONG)
            }
            Self::Config(_) => Toast::error("Configuration Error", "Check your settings", LONG),
            Self::NotFound(what) => Toast::error("Not Found", what.clone(), SHORT),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from the logged-in email.
///
/// Call this after a successful login to associate errors with the user.
pub fn set_sentry_user(email: &impl ToString) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("wishlist", "Toggled product", Some(&[("product_id", "12")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
