//! Authentication service.
//!
//! Screen-boundary logic for the Register, Login and Profile screens:
//! validates forms, talks to the [`SessionStore`], and describes each
//! outcome as a [`Toast`] with an optional follow-up route.

mod error;

pub use error::{AuthError, ValidationError};

use std::time::Duration;

use tracing::instrument;

use viorra_core::Password;

use crate::models::UserRecord;
use crate::navigation::Route;
use crate::notify::Toast;
use crate::session::{KeyValueStore, SessionStore};

/// Values typed on the registration screen.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
}

impl RegistrationForm {
    /// Validate the form and build the record to store.
    ///
    /// Checks run in order: every field filled, then password confirmed.
    /// The email is stored exactly as typed; its format is not checked.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<UserRecord, ValidationError> {
        if [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        let mut user = UserRecord::new(&self.name, &self.email, Password::new(&self.password));
        user.avatar = self.avatar.clone().filter(|a| !a.is_empty());
        Ok(user)
    }
}

/// Authentication service.
pub struct AuthService<'a, S> {
    session: &'a SessionStore<S>,
}

impl<'a, S: KeyValueStore> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(session: &'a SessionStore<S>) -> Self {
        Self { session }
    }

    /// Register the account described by `form`.
    ///
    /// Validation happens before storage is touched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for form problems and
    /// `AuthError::Storage` if the record cannot be written.
    #[instrument(skip(self, form))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserRecord, AuthError> {
        let user = form.validate()?;
        self.session.register(&user).await?;
        crate::error::add_breadcrumb("auth", "Registered account", None);
        Ok(user)
    }

    /// Log in with typed credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Login` when there is no account, the credentials
    /// do not match, or the stored record cannot be read.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let user = self.session.login(email, password).await?;
        crate::error::set_sentry_user(&user.email);
        Ok(user)
    }

    /// Clear the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Logout` if storage cannot be cleared.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.logout().await.map_err(AuthError::Logout)?;
        crate::error::clear_sentry_user();
        Ok(())
    }

    /// The user shown on the profile screen.
    pub async fn profile(&self) -> Option<UserRecord> {
        self.session.current_user().await
    }
}

// =============================================================================
// Outcome toasts
// =============================================================================

/// Toast shown after a successful registration; hides into the login screen.
#[must_use]
pub fn registered_toast() -> Toast {
    Toast::success(
        "Account Created",
        "Redirecting to login page...",
        Duration::from_secs(1),
    )
    .then(Route::Login)
}

/// Toast shown after a successful login; hides into the product list.
#[must_use]
pub fn logged_in_toast() -> Toast {
    Toast::success("Login Successful", "Welcome back!", Duration::from_secs(3)).then(Route::Product)
}
