//! User domain types.

use serde::{Deserialize, Serialize};

use viorra_core::Password;

/// The single registered user kept in device storage.
///
/// Serialized as `{"name", "email", "password"}` plus `avatar` when set.
/// The password is stored as typed; this is a local convenience login,
/// not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name shown on the profile screen.
    pub name: String,
    /// Email address used to log in, stored exactly as typed.
    pub email: String,
    /// Password compared verbatim on login.
    pub password: Password,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Create a record without an avatar.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: Password) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password,
            avatar: None,
        }
    }

    /// Attach an avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Whether the typed email and password both match exactly.
    #[must_use]
    pub fn credentials_match(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.matches(password)
    }
}
