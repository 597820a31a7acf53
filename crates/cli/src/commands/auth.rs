//! Account commands: register, login, logout, profile.
//!
//! # Usage
//!
//! ```bash
//! viorra register -n "Ada" -e ada@example.com -p secret -c secret
//! viorra login -e ada@example.com -p secret
//! viorra profile
//! viorra logout
//! ```

use std::time::Duration;

use viorra_storefront::error::AppError;
use viorra_storefront::notify::{Notifier, Toast};
use viorra_storefront::services::auth::{RegistrationForm, logged_in_toast, registered_toast};
use viorra_storefront::state::AppState;

/// Register the local account.
///
/// # Errors
///
/// Returns `AppError::Auth` on validation or storage failure.
pub async fn register(
    state: &AppState,
    form: &RegistrationForm,
    notifier: &impl Notifier,
) -> Result<(), AppError> {
    state.auth().register(form).await?;
    notifier.show(registered_toast());
    Ok(())
}

/// Log in with the local account.
///
/// # Errors
///
/// Returns `AppError::Auth` when login is rejected.
pub async fn login(
    state: &AppState,
    email: &str,
    password: &str,
    notifier: &impl Notifier,
) -> Result<(), AppError> {
    state.auth().login(email, password).await?;
    notifier.show(logged_in_toast());
    Ok(())
}

/// Clear the local account.
///
/// # Errors
///
/// Returns `AppError::Auth` if storage cannot be cleared.
pub async fn logout(state: &AppState, notifier: &impl Notifier) -> Result<(), AppError> {
    state.auth().logout().await?;
    notifier.show(Toast::success("Logged Out", "See you soon", Duration::from_secs(2)));
    Ok(())
}

/// Print the stored account, or guest placeholders.
#[allow(clippy::print_stdout)]
pub async fn profile(state: &AppState) {
    let user = state.auth().profile().await;
    let name = user.as_ref().map_or("Guest", |u| u.name.as_str());
    let email = user.as_ref().map_or("Not available", |u| u.email.as_str());

    println!("{name}");
    println!("{email}");
    if let Some(avatar) = user.as_ref().and_then(|u| u.avatar.as_deref()) {
        println!("avatar: {avatar}");
    }
}
