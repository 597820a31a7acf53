//! Viorra Storefront library.
//!
//! The non-visual core of the Viorra shopping app: product catalog with
//! search and wishlist, and a single-user session kept in device storage.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog client, index and wishlist
//! - [`session`] - Single-slot user session over key-value storage
//! - [`services`] - Registration and login flows
//! - [`navigation`] / [`notify`] - Route and toast values handed to the UI
//! - [`error`] - Unified error type mapped to toasts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod services;
pub mod session;
pub mod state;
