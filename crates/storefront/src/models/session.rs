//! Storage keys for session data.

/// Keys used in the persistent key-value store.
pub mod keys {
    /// Key holding the JSON-encoded registered user.
    pub const USER_DATA: &str = "userData";
}
