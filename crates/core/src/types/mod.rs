//! Core types for Viorra.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod password;
pub mod price;
pub mod rating;

pub use id::*;
pub use password::Password;
pub use price::Price;
pub use rating::{Rating, Star};
