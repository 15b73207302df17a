//! Product card view assembly.

use rust_decimal::Decimal;
use serde::Serialize;

use gadgetry_core::{CartLine, CartLineDraft, ColorTable, Product, VariantId};

use super::pricing::{
    resolve_available_colors, resolve_discount_price, resolve_image, resolve_old_price,
};

/// First description character shown on a card.
pub const PRODUCT_DESCRIPTION_SLICE_FROM: usize = 0;

/// Description character after the last one shown on a card.
pub const PRODUCT_DESCRIPTION_SLICE_TO: usize = 100;

/// Quantity added by the card's add-to-cart button.
pub const ADD_TO_CART_DEFAULT_QUANTITY: u32 = 1;

/// A colour swatch as rendered on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchView {
    pub variant_id: VariantId,
    pub color_hex: String,
    pub active: bool,
}

/// Everything a product card displays for one active variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardView {
    pub product_id: String,
    pub href: String,
    pub active_variant_id: VariantId,
    pub image_url: String,
    pub name: String,
    pub model: String,
    pub brief_description: String,
    pub currency: Option<String>,
    pub old_price: Decimal,
    pub price: Decimal,
    pub display_old_price: String,
    pub display_price: String,
    pub swatches: Vec<SwatchView>,
    pub in_cart: bool,
    pub add_to_cart_label: &'static str,
}

impl ProductCardView {
    /// Build the card for `product` showing the `active` variant.
    ///
    /// `cart` is the shopper's current cart; the card is marked as in-cart
    /// when a line holds this product with the active variant.
    #[must_use]
    pub fn build(
        product: &Product,
        active: VariantId,
        colors: &ColorTable,
        cart: &[CartLine],
    ) -> Self {
        let variants = product.variants.as_slice();
        let old_price = resolve_old_price(product, variants, active);
        let price = resolve_discount_price(product, variants, active, product.fraction_digits);
        let currency = product.currency.clone();

        let swatches = resolve_available_colors(product, colors)
            .into_iter()
            .map(|swatch| SwatchView {
                active: swatch.variant_id == active,
                variant_id: swatch.variant_id,
                color_hex: swatch.color_hex,
            })
            .collect();

        let in_cart = cart.iter().any(|line| line.matches(&product.id, active));

        Self {
            product_id: product.id.clone(),
            href: format!("/product/{}", product.key),
            active_variant_id: active,
            image_url: resolve_image(product, variants, active),
            name: product.name.clone(),
            model: product.model.clone(),
            brief_description: brief_description(&product.description),
            display_old_price: format_price(currency.as_deref(), old_price),
            display_price: format_price(currency.as_deref(), price),
            currency,
            old_price,
            price,
            swatches,
            in_cart,
            add_to_cart_label: if in_cart { "In Cart" } else { "Add to cart" },
        }
    }

    /// Cart line request for the card's add-to-cart button.
    #[must_use]
    pub fn add_to_cart_request(&self) -> CartLineDraft {
        CartLineDraft {
            product_id: self.product_id.clone(),
            variant_id: self.active_variant_id,
            quantity: ADD_TO_CART_DEFAULT_QUANTITY,
        }
    }
}

/// Shortened description for a card: a fixed character window, trimmed,
/// followed by an ellipsis.
#[must_use]
pub fn brief_description(description: &str) -> String {
    let slice: String = description
        .chars()
        .skip(PRODUCT_DESCRIPTION_SLICE_FROM)
        .take(PRODUCT_DESCRIPTION_SLICE_TO - PRODUCT_DESCRIPTION_SLICE_FROM)
        .collect();
    format!("{}...", slice.trim())
}

/// Price text as shown on a card (e.g., "USD 199.99").
#[must_use]
pub fn format_price(currency: Option<&str>, amount: Decimal) -> String {
    match currency {
        Some(code) if !code.is_empty() => format!("{code} {amount}"),
        _ => amount.to_string(),
    }
}
