//! Plaintext password wrapper.
//!
//! The storefront keeps the registered password in local device storage and
//! compares it verbatim on login. This type exists so the value never shows
//! up in `Debug` output or logs.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A password as typed by the user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a typed password.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exact, case-sensitive comparison with a typed value.
    #[must_use]
    pub fn matches(&self, typed: &str) -> bool {
        self.0 == typed
    }

    /// Returns `true` if no characters were typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("hunter2");
        assert_eq!(format!("{password:?}"), "Password([REDACTED])");
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let password = Password::new("Secret");
        assert!(password.matches("Secret"));
        assert!(!password.matches("secret"));
        assert!(!password.matches("Secret "));
    }
}
