//! Core types for Gadgetry.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod color;
pub mod credential;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{CartLine, CartLineDraft};
pub use color::{ColorEntry, ColorSwatch, ColorTable, ColorTableError};
pub use credential::Credential;
pub use id::VariantId;
pub use money::{Money, PriceEntry, convert_price_to_fraction_digits};
pub use product::{Attribute, Image, Product, Variant};
