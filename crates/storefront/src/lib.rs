//! Gadgetry Storefront library.
//!
//! The logic layer beneath the storefront UI:
//!
//! - [`services::auth`] - Session credential persistence with expiry extension
//! - [`catalog`] - Active-variant image, price and colour swatch resolution
//! - [`storage`] - Key-value persistence backends
//! - [`config`] - Environment-driven configuration
//! - [`telemetry`] - Tracing subscriber setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
pub mod telemetry;
