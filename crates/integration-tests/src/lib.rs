//! Integration tests for Viorra.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p viorra-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Register, login and logout against on-disk storage
//! - `catalog_flow` - Loading, search, wishlist and navigation from a fixture source
//!
//! No network access is needed; catalog tests drive the index through a
//! fixture `ProductSource`.
