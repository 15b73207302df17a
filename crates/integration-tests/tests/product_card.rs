//! Integration tests for product card resolution.
//!
//! These tests verify the four resolvers and the assembled card view against
//! a multi-variant product with shared colours and sparse price data.

use rust_decimal::Decimal;

use gadgetry_core::{Attribute, CartLine, ColorEntry, ColorSwatch, ColorTable, VariantId};
use gadgetry_integration_tests::{laptop, usd, variant};
use gadgetry_storefront::catalog::pricing::DEFAULT_VARIANT_PRICE;
use gadgetry_storefront::catalog::{
    ProductCardView, resolve_available_colors, resolve_discount_price, resolve_image,
    resolve_old_price,
};

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

// =============================================================================
// Image
// =============================================================================

#[test]
fn test_image_scenario() {
    let product = laptop();

    assert_eq!(
        resolve_image(&product, &product.variants, VariantId::MAIN),
        "https://img/x?fit=fill&w=220"
    );
    assert_eq!(
        resolve_image(&product, &product.variants, VariantId::new(7)),
        "https://img/y"
    );
    assert_eq!(resolve_image(&product, &product.variants, VariantId::new(8)), "");
    assert_eq!(resolve_image(&product, &product.variants, VariantId::new(99)), "");
}

// =============================================================================
// Prices
// =============================================================================

#[test]
fn test_main_variant_prices() {
    let product = laptop();

    assert_eq!(
        resolve_discount_price(&product, &product.variants, VariantId::MAIN, 2),
        dec("199.99")
    );
    assert_eq!(
        resolve_old_price(&product, &product.variants, VariantId::MAIN),
        dec("1299.00")
    );
}

#[test]
fn test_undiscounted_main_variant_sells_at_base_price() {
    let mut product = laptop();
    product.base_price = 19999;
    product.base_discount_price = None;

    assert_eq!(
        resolve_discount_price(&product, &product.variants, VariantId::MAIN, 2),
        dec("199.99")
    );
    assert_eq!(
        resolve_old_price(&product, &product.variants, VariantId::MAIN),
        dec("199.99")
    );
}

#[test]
fn test_discounted_variant_prices() {
    let product = laptop();

    assert_eq!(
        resolve_discount_price(&product, &product.variants, VariantId::new(7), 2),
        dec("1199.00")
    );
    assert_eq!(
        resolve_old_price(&product, &product.variants, VariantId::new(7)),
        dec("1349.00")
    );
}

#[test]
fn test_variant_without_discount() {
    let product = laptop();

    assert_eq!(
        resolve_discount_price(&product, &product.variants, VariantId::new(8), 2),
        DEFAULT_VARIANT_PRICE
    );
    assert_eq!(
        resolve_old_price(&product, &product.variants, VariantId::new(8)),
        dec("1399.00")
    );
}

#[test]
fn test_variant_with_empty_price_list() {
    let product = laptop();

    let discount = resolve_discount_price(&product, &product.variants, VariantId::new(9), 2);
    let old = resolve_old_price(&product, &product.variants, VariantId::new(9));

    assert_eq!(discount, DEFAULT_VARIANT_PRICE);
    assert_eq!(old, DEFAULT_VARIANT_PRICE);
}

#[test]
fn test_only_first_price_entry_is_used() {
    let mut product = laptop();
    product.variants = vec![variant(
        7,
        "silver",
        &[],
        vec![usd(100, Some(50)), usd(999_999, Some(888_888))],
    )];

    assert_eq!(
        resolve_discount_price(&product, &product.variants, VariantId::new(7), 2),
        dec("0.50")
    );
    assert_eq!(
        resolve_old_price(&product, &product.variants, VariantId::new(7)),
        dec("1.00")
    );
}

// =============================================================================
// Colours
// =============================================================================

#[test]
fn test_colors_space_gray_and_silver() {
    let mut product = laptop();
    product.variants = vec![variant(7, "silver", &[], Vec::new())];

    assert_eq!(
        resolve_available_colors(&product, &ColorTable::default()),
        vec![
            ColorSwatch {
                variant_id: VariantId::MAIN,
                color_hex: "#4B4B4B".to_string(),
            },
            ColorSwatch {
                variant_id: VariantId::new(7),
                color_hex: "#C0C0C0".to_string(),
            },
        ]
    );
}

#[test]
fn test_colors_never_repeat_hex() {
    let product = laptop();
    let swatches = resolve_available_colors(&product, &ColorTable::default());

    let ids: Vec<i32> = swatches.iter().map(|s| s.variant_id.as_i32()).collect();
    assert_eq!(ids, vec![1, 7, 8]);

    let mut hexes: Vec<&str> = swatches.iter().map(|s| s.color_hex.as_str()).collect();
    hexes.sort_unstable();
    hexes.dedup();
    assert_eq!(hexes.len(), swatches.len());
}

#[test]
fn test_colors_dedup_by_hex_across_different_keys() {
    let colors = ColorTable::new(vec![
        ColorEntry::new("space-gray", "#4B4B4B"),
        ColorEntry::new("graphite", "#4B4B4B"),
        ColorEntry::new("silver", "#C0C0C0"),
    ]);
    let mut product = laptop();
    product.variants = vec![
        variant(7, "graphite", &[], Vec::new()),
        variant(8, "silver", &[], Vec::new()),
    ];

    let swatches = resolve_available_colors(&product, &colors);
    let ids: Vec<i32> = swatches.iter().map(|s| s.variant_id.as_i32()).collect();
    assert_eq!(ids, vec![1, 8]);
}

#[test]
fn test_colors_without_main_color() {
    let mut product = laptop();
    product.attributes = vec![Attribute::enumerated("storage", "512gb", "512 GB")];

    let swatches = resolve_available_colors(&product, &ColorTable::default());
    assert_eq!(
        swatches.first().map(|s| s.variant_id),
        Some(VariantId::new(7))
    );
}

// =============================================================================
// Card View
// =============================================================================

#[test]
fn test_card_view_follows_active_variant() {
    let product = laptop();
    let cart = vec![CartLine {
        product_id: product.id.clone(),
        variant_id: VariantId::new(7),
        quantity: 2,
    }];

    let main = ProductCardView::build(&product, VariantId::MAIN, &ColorTable::default(), &cart);
    assert_eq!(main.display_price, "USD 199.99");
    assert_eq!(main.display_old_price, "USD 1299.00");
    assert!(!main.in_cart);
    assert!(main.brief_description.ends_with("..."));
    assert!(main.brief_description.chars().count() <= 103);

    let silver = ProductCardView::build(&product, VariantId::new(7), &ColorTable::default(), &cart);
    assert_eq!(silver.image_url, "https://img/y");
    assert_eq!(silver.display_price, "USD 1199.00");
    assert!(silver.in_cart);
    assert_eq!(silver.add_to_cart_label, "In Cart");

    let active: Vec<i32> = silver
        .swatches
        .iter()
        .filter(|s| s.active)
        .map(|s| s.variant_id.as_i32())
        .collect();
    assert_eq!(active, vec![7]);
}

#[test]
fn test_card_view_from_json_fixture() {
    let product: gadgetry_core::Product = serde_json::from_value(serde_json::json!({
        "id": "p-2",
        "key": "phone-se",
        "imageUrl": "https://img/se",
        "basePrice": 42900,
        "currency": "EUR",
        "attributes": [{"name": "finish", "value": {"key": "midnight", "label": "Midnight"}}],
        "variants": [{
            "id": 2,
            "prices": [{
                "value": {"centAmount": 42900, "fractionDigits": 2, "currencyCode": "EUR"},
                "discounted": {"centAmount": 34900, "fractionDigits": 2, "currencyCode": "EUR"}
            }],
            "attributes": [{"name": "finish", "value": {"key": "starlight", "label": "Starlight"}}]
        }]
    }))
    .expect("product fixture");

    let card = ProductCardView::build(&product, VariantId::MAIN, &ColorTable::default(), &[]);
    assert_eq!(card.display_price, "EUR 429.00");
    assert_eq!(card.display_old_price, "EUR 429.00");
    assert_eq!(card.swatches.len(), 2);

    let variant = ProductCardView::build(&product, VariantId::new(2), &ColorTable::default(), &[]);
    assert_eq!(variant.display_price, "EUR 349.00");
    assert_eq!(variant.image_url, "");
    assert_eq!(card.add_to_cart_request().quantity, 1);
}
