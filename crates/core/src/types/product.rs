//! Product and variant records as supplied by the commerce platform.
//!
//! The main variant (id `1`) is never part of [`Product::variants`]; its
//! image and prices are the product's own base fields.

use serde::{Deserialize, Serialize};

use super::id::VariantId;
use super::money::PriceEntry;

/// Attribute names that carry a product's colour.
pub const COLOR_ATTRIBUTE_NAMES: [&str; 2] = ["finish", "color"];

/// A named product or variant attribute.
///
/// Enumerated attributes carry a `{ "key": ..., "label": ... }` object as
/// their value; other attribute types carry plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name (e.g., "color").
    pub name: String,
    /// Raw attribute value.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Attribute {
    /// Create an enumerated attribute with the given key and label.
    #[must_use]
    pub fn enumerated(name: impl Into<String>, key: &str, label: &str) -> Self {
        Self {
            name: name.into(),
            value: serde_json::json!({ "key": key, "label": label }),
        }
    }

    /// Key of an enumerated value, if the value has one.
    #[must_use]
    pub fn enum_key(&self) -> Option<&str> {
        self.value.get("key").and_then(serde_json::Value::as_str)
    }

    /// Whether this attribute describes a colour.
    #[must_use]
    pub fn is_color(&self) -> bool {
        COLOR_ATTRIBUTE_NAMES.contains(&self.name.as_str())
    }
}

/// Key of the first colour attribute in `attributes`.
#[must_use]
pub fn color_key(attributes: &[Attribute]) -> Option<&str> {
    attributes
        .iter()
        .find(|attribute| attribute.is_color())
        .and_then(Attribute::enum_key)
}

/// Product or variant image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
}

/// A non-main product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant ID (never `1`).
    pub id: VariantId,
    /// Images in display order.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Price list; only the first entry is consulted.
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
    /// Variant-specific attributes.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Variant {
    /// Colour key of this variant, if it has one.
    #[must_use]
    pub fn color_key(&self) -> Option<&str> {
        color_key(&self.attributes)
    }
}

/// A catalog product with its main-variant data and extra variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Platform product ID.
    pub id: String,
    /// URL key used in product links.
    pub key: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Model line shown under the name.
    #[serde(default)]
    pub model: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Main variant image URL.
    #[serde(default)]
    pub image_url: String,
    /// Main variant list price in minor units.
    #[serde(default)]
    pub base_price: i64,
    /// Main variant selling price in minor units, if discounted.
    #[serde(default)]
    pub base_discount_price: Option<i64>,
    /// Fraction digits of the main variant selling price.
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u32,
    /// ISO 4217 currency code shown next to prices.
    #[serde(default)]
    pub currency: Option<String>,
    /// Main variant attributes.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Non-main variants in declaration order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

const fn default_fraction_digits() -> u32 {
    2
}

impl Product {
    /// Colour key of the main variant, if it has one.
    #[must_use]
    pub fn color_key(&self) -> Option<&str> {
        color_key(&self.attributes)
    }

    /// Find a non-main variant by ID.
    #[must_use]
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }
}
