//! Product card commands.
//!
//! # Usage
//!
//! ```bash
//! gadgetry product card --file product.json --variant 2 --cart cart.json
//! gadgetry product colors --file product.json
//! ```
//!
//! `product.json` holds one product with camelCase fields; `cart.json` holds
//! a list of `{ "productId", "variantId", "quantity" }` lines.

use std::path::Path;

use gadgetry_core::{CartLine, ColorSwatch, ColorTable, Product, VariantId};
use gadgetry_storefront::catalog::{ProductCardView, resolve_available_colors};
use gadgetry_storefront::error::{AppError, Result, read_json_file};

/// Build the card for `variant` of the product in `file`.
///
/// An unknown variant still produces a card with empty image and default
/// prices; it is only logged.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a non-positive variant id and
/// `AppError::Input`/`AppError::Json` if an input file cannot be loaded.
pub fn card(
    colors: &ColorTable,
    file: &Path,
    variant: i32,
    cart: Option<&Path>,
) -> Result<ProductCardView> {
    if variant < 1 {
        return Err(AppError::BadRequest(format!(
            "variant id must be positive (got {variant})"
        )));
    }

    let product: Product = read_json_file(file)?;
    let cart: Vec<CartLine> = match cart {
        Some(path) => read_json_file(path)?,
        None => Vec::new(),
    };

    let active = VariantId::new(variant);
    if !active.is_main() && product.variant(active).is_none() {
        tracing::warn!(product = %product.key, variant = %active, "Unknown variant for product");
    }

    Ok(ProductCardView::build(&product, active, colors, &cart))
}

/// Distinct colour swatches of the product in `file`.
///
/// # Errors
///
/// Returns `AppError::Input`/`AppError::Json` if the file cannot be loaded.
pub fn colors(colors: &ColorTable, file: &Path) -> Result<Vec<ColorSwatch>> {
    let product: Product = read_json_file(file)?;
    Ok(resolve_available_colors(&product, colors))
}
