//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Registration, login and logout against the local session

pub mod auth;
