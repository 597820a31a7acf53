//! Viorra Core - Shared types library.
//!
//! This crate provides common types used across all Viorra components:
//! - `storefront` - Catalog, wishlist and session logic
//! - `cli` - Terminal front end driving the storefront core
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, ratings and passwords

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
