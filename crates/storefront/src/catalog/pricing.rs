//! Active-variant resolution for product cards.
//!
//! A product card shows one variant at a time. The main variant
//! ([`VariantId::MAIN`]) takes its data from the product's base fields; any
//! other id is looked up in the variant list. Each resolver substitutes a
//! fixed default instead of failing when data is missing:
//!
//! | Situation                             | Result                       |
//! |---------------------------------------|------------------------------|
//! | No variant with the active id         | `""` / [`DEFAULT_VARIANT_PRICE`] |
//! | Variant without images                | `""`                         |
//! | Variant without prices                | [`DEFAULT_VARIANT_PRICE`]    |
//! | First price entry not discounted      | [`DEFAULT_VARIANT_PRICE`] (discount price) |
//! | Unrepresentable fraction digit count  | [`DEFAULT_VARIANT_PRICE`]    |
//!
//! Only price entry 0 is consulted, whatever its currency.

use rust_decimal::{Decimal, RoundingStrategy};

use gadgetry_core::{
    ColorSwatch, ColorTable, Money, Product, Variant, VariantId, convert_price_to_fraction_digits,
};

/// Query appended to the main variant image to request a card-sized render.
pub const IMAGE_RESIZE_QUERY: &str = "?fit=fill&w=220";

/// Price shown when a variant has no usable price data.
pub const DEFAULT_VARIANT_PRICE: Decimal = Decimal::ZERO;

/// Fraction digits applied to the main variant list price.
pub const FRACTION_DIGITS_COUNT_DEFAULT: u32 = 2;

const FIRST_IMAGE_INDEX: usize = 0;
const FIRST_PRICE_INDEX: usize = 0;

fn find_variant(variants: &[Variant], id: VariantId) -> Option<&Variant> {
    variants.iter().find(|variant| variant.id == id)
}

/// Image URL for the active variant.
///
/// The main variant image gets [`IMAGE_RESIZE_QUERY`] appended; variant
/// images are returned as stored.
#[must_use]
pub fn resolve_image(product: &Product, variants: &[Variant], active: VariantId) -> String {
    if active.is_main() {
        return format!("{}{IMAGE_RESIZE_QUERY}", product.image_url);
    }

    find_variant(variants, active)
        .and_then(|variant| variant.images.get(FIRST_IMAGE_INDEX))
        .map(|image| image.url.clone())
        .unwrap_or_default()
}

/// Selling price for the active variant.
///
/// For the main variant, `fraction_digits` scales the product's base
/// discount price, or its base price when it is not discounted. For other
/// variants the discounted value of the first price entry is scaled by its
/// own fraction digits.
#[must_use]
pub fn resolve_discount_price(
    product: &Product,
    variants: &[Variant],
    active: VariantId,
    fraction_digits: u32,
) -> Decimal {
    if active.is_main() {
        let amount = product.base_discount_price.unwrap_or(product.base_price);
        return convert_price_to_fraction_digits(amount, fraction_digits)
            .unwrap_or(DEFAULT_VARIANT_PRICE);
    }

    find_variant(variants, active)
        .and_then(|variant| variant.prices.get(FIRST_PRICE_INDEX))
        .and_then(|price| price.discounted.as_ref())
        .and_then(Money::to_decimal)
        .unwrap_or(DEFAULT_VARIANT_PRICE)
}

/// List (pre-discount) price for the active variant.
///
/// The main variant's base price is scaled by
/// [`FRACTION_DIGITS_COUNT_DEFAULT`]. Other variants use the undiscounted
/// value of their first price entry.
#[must_use]
pub fn resolve_old_price(product: &Product, variants: &[Variant], active: VariantId) -> Decimal {
    if active.is_main() {
        return convert_price_to_fraction_digits(product.base_price, FRACTION_DIGITS_COUNT_DEFAULT)
            .unwrap_or_else(default_old_price);
    }

    find_variant(variants, active)
        .and_then(|variant| variant.prices.get(FIRST_PRICE_INDEX))
        .and_then(|price| price.value.to_decimal())
        .unwrap_or_else(default_old_price)
}

fn default_old_price() -> Decimal {
    DEFAULT_VARIANT_PRICE.round_dp_with_strategy(
        FRACTION_DIGITS_COUNT_DEFAULT,
        RoundingStrategy::ToNegativeInfinity,
    )
}

/// Distinct colour swatches for a product.
///
/// The main variant's colour comes first, then each variant's colour in
/// declaration order. A colour already present is skipped, so the first
/// variant carrying a given hex value owns its swatch. Attributes whose key
/// is not in `colors` produce no swatch.
#[must_use]
pub fn resolve_available_colors(product: &Product, colors: &ColorTable) -> Vec<ColorSwatch> {
    let mut swatches: Vec<ColorSwatch> = Vec::new();

    if let Some(hex) = product.color_key().and_then(|key| colors.hex_for(key)) {
        swatches.push(ColorSwatch {
            variant_id: VariantId::MAIN,
            color_hex: hex.to_string(),
        });
    }

    for variant in &product.variants {
        let Some(hex) = variant.color_key().and_then(|key| colors.hex_for(key)) else {
            continue;
        };
        if swatches.iter().any(|swatch| swatch.color_hex == hex) {
            continue;
        }
        swatches.push(ColorSwatch {
            variant_id: variant.id,
            color_hex: hex.to_string(),
        });
    }

    swatches
}
