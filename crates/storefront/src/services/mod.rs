//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Session credential persistence

pub mod auth;
