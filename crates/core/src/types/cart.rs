//! Cart line types.

use serde::{Deserialize, Serialize};

use super::id::VariantId;

/// A line already in the shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Platform product ID.
    pub product_id: String,
    /// Variant in the cart.
    pub variant_id: VariantId,
    /// Quantity in the cart.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// Whether this line holds the given product variant.
    #[must_use]
    pub fn matches(&self, product_id: &str, variant_id: VariantId) -> bool {
        self.product_id == product_id && self.variant_id == variant_id
    }
}

/// A request to add a product variant to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDraft {
    /// Platform product ID.
    pub product_id: String,
    /// Variant to add.
    pub variant_id: VariantId,
    /// Quantity to add.
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}
