//! Product card view-state derivation.
//!
//! - [`pricing`] - Pure resolvers for the active variant's image, prices and
//!   the product's colour swatches
//! - [`card`] - Assembles a complete [`ProductCardView`]

pub mod card;
pub mod pricing;

pub use card::{ProductCardView, SwatchView, brief_description, format_price};
pub use pricing::{
    resolve_available_colors, resolve_discount_price, resolve_image, resolve_old_price,
};
