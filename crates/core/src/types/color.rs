//! Colour swatch reference data.
//!
//! A [`ColorTable`] maps the colour keys used by product attributes
//! (e.g., `"space-gray"`) to CSS hex values. The table is read-only reference
//! data; lookups return the first entry with a matching name.

use serde::{Deserialize, Serialize};

use super::id::VariantId;

/// Errors that can occur when loading a [`ColorTable`].
#[derive(thiserror::Error, Debug)]
pub enum ColorTableError {
    /// The input is not a JSON list of `{ name, hex }` objects.
    #[error("invalid colour table: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry has an empty name.
    #[error("colour table entry {index} has an empty name")]
    EmptyName {
        /// Position of the entry in the table.
        index: usize,
    },
    /// An entry's hex value is not `#` followed by 3 or 6 hex digits.
    #[error("colour {name} has invalid hex value {hex}")]
    InvalidHex {
        /// Colour name.
        name: String,
        /// Rejected value.
        hex: String,
    },
}

/// A named colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Colour key as used by product attributes.
    pub name: String,
    /// CSS hex value (e.g., `#C0C0C0`).
    pub hex: String,
}

impl ColorEntry {
    /// Create a colour entry.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A selectable colour on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSwatch {
    /// Variant selected by this swatch.
    pub variant_id: VariantId,
    /// CSS hex value of the swatch.
    pub color_hex: String,
}

const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("silver", "#C0C0C0"),
    ("space-gray", "#4B4B4B"),
    ("graphite", "#41424C"),
    ("gold", "#FFD700"),
    ("rose-gold", "#B76E79"),
    ("midnight", "#191970"),
    ("starlight", "#F8F9EC"),
    ("blue", "#0000FF"),
    ("sierra-blue", "#9BB5CE"),
    ("pacific-blue", "#2E4A62"),
    ("green", "#008000"),
    ("alpine-green", "#4D5B4A"),
    ("red", "#FF0000"),
    ("purple", "#800080"),
    ("deep-purple", "#4B3D59"),
    ("pink", "#FFC0CB"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("gray", "#808080"),
    ("natural-titanium", "#BDB7AE"),
    ("blue-titanium", "#3F4B5A"),
    ("white-titanium", "#F2F1ED"),
    ("black-titanium", "#2E2E2E"),
];

/// An ordered, read-only colour lookup table.
///
/// # Examples
///
/// ```
/// use gadgetry_core::ColorTable;
///
/// let colors = ColorTable::default();
/// assert_eq!(colors.hex_for("space-gray"), Some("#4B4B4B"));
/// assert_eq!(colors.hex_for("unobtainium"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable(Vec<ColorEntry>);

impl ColorTable {
    /// Create a table from entries, keeping their order.
    #[must_use]
    pub const fn new(entries: Vec<ColorEntry>) -> Self {
        Self(entries)
    }

    /// Parse and validate a JSON list of `{ "name", "hex" }` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON of that shape, if a
    /// name is empty, or if a hex value is malformed.
    pub fn from_json(json: &str) -> Result<Self, ColorTableError> {
        let entries: Vec<ColorEntry> = serde_json::from_str(json)?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ColorTableError::EmptyName { index });
            }
            if !is_hex_color(&entry.hex) {
                return Err(ColorTableError::InvalidHex {
                    name: entry.name.clone(),
                    hex: entry.hex.clone(),
                });
            }
        }

        Ok(Self(entries))
    }

    /// Hex value for a colour key.
    #[must_use]
    pub fn hex_for(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.hex.as_str())
    }

    /// Entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self(
            DEFAULT_COLORS
                .iter()
                .map(|(name, hex)| ColorEntry::new(*name, *hex))
                .collect(),
        )
    }
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}
