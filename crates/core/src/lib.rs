//! Gadgetry Core - Shared types library.
//!
//! This crate provides the types used across all Gadgetry components:
//! - `storefront` - Token persistence and product card resolution
//! - `cli` - Command-line tools for inspecting tokens and product cards
//!
//! # Architecture
//!
//! The core crate contains only types and pure conversions - no I/O, no
//! storage backends, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Credentials, money, products, variants, colour tables and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
