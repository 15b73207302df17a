//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use gadgetry_core::define_id;
/// define_id!(LineItemId);
/// define_id!(WishlistId);
///
/// let line = LineItemId::new(1);
/// let wishlist = WishlistId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: LineItemId = wishlist;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(VariantId);

impl VariantId {
    /// The implicit main variant.
    ///
    /// Its data lives on the product itself and it never appears in a
    /// product's variant list.
    pub const MAIN: Self = Self(1);

    /// Whether this is the main variant.
    #[must_use]
    pub const fn is_main(&self) -> bool {
        self.0 == Self::MAIN.0
    }
}

impl Default for VariantId {
    fn default() -> Self {
        Self::MAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_variant() {
        assert!(VariantId::MAIN.is_main());
        assert!(VariantId::new(1).is_main());
        assert!(!VariantId::new(7).is_main());
        assert_eq!(VariantId::default(), VariantId::MAIN);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&VariantId::new(7)).unwrap_or_default();
        assert_eq!(json, "7");

        let id: Option<VariantId> = serde_json::from_str("3").ok();
        assert_eq!(id, Some(VariantId::new(3)));
    }
}
