//! Integration tests for Gadgetry.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gadgetry-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `token_lifecycle` - Credential persistence through the file-backed store
//! - `product_card` - Variant resolution on realistic catalog data
//!
//! Shared fixtures live here so every test file builds products the same way.

use gadgetry_core::{Attribute, Image, Money, PriceEntry, Product, Variant, VariantId};

/// A variant with the given colour key, images and price entries.
#[must_use]
pub fn variant(id: i32, color: &str, images: &[&str], prices: Vec<PriceEntry>) -> Variant {
    Variant {
        id: VariantId::new(id),
        images: images
            .iter()
            .map(|url| Image {
                url: (*url).to_string(),
            })
            .collect(),
        prices,
        attributes: vec![Attribute::enumerated("color", color, color)],
    }
}

/// A price entry in USD cents, optionally discounted.
#[must_use]
pub fn usd(value: i64, discounted: Option<i64>) -> PriceEntry {
    let entry = PriceEntry::new(Money::new(value, 2).with_currency("USD"));
    match discounted {
        Some(amount) => entry.with_discounted(Money::new(amount, 2).with_currency("USD")),
        None => entry,
    }
}

/// A laptop in space gray with silver, gold and a second silver variant.
#[must_use]
pub fn laptop() -> Product {
    Product {
        id: "8f1c2a7e-laptop".to_string(),
        key: "air-13".to_string(),
        name: "Air 13".to_string(),
        model: "M3 2024".to_string(),
        description: "Thin and light laptop with an all-day battery, a bright display and a fanless design that stays silent under load.".to_string(),
        image_url: "https://img/x".to_string(),
        base_price: 129_900,
        base_discount_price: Some(19999),
        fraction_digits: 2,
        currency: Some("USD".to_string()),
        attributes: vec![
            Attribute::enumerated("color", "space-gray", "Space Gray"),
            Attribute::enumerated("storage", "256gb", "256 GB"),
        ],
        variants: vec![
            variant(7, "silver", &["https://img/y", "https://img/y2"], vec![usd(134_900, Some(119_900))]),
            variant(8, "gold", &[], vec![usd(139_900, None)]),
            variant(9, "silver", &["https://img/z"], Vec::new()),
        ],
    }
}
