//! Money in minor units and its conversion to display amounts.
//!
//! Amounts arrive from the commerce platform as integers in the currency's
//! minor unit (cents for USD) together with a fraction digit count. They are
//! scaled into [`Decimal`] values for display; formatting is left to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., cents for USD).
    pub cent_amount: i64,
    /// Number of minor-unit digits (2 for USD, 0 for JPY).
    pub fraction_digits: u32,
    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Money {
    /// Create a new amount without a currency code.
    #[must_use]
    pub const fn new(cent_amount: i64, fraction_digits: u32) -> Self {
        Self {
            cent_amount,
            fraction_digits,
            currency_code: None,
        }
    }

    /// Attach an ISO 4217 currency code.
    #[must_use]
    pub fn with_currency(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    /// Scale into a display amount.
    ///
    /// Returns `None` when the fraction digit count cannot be represented.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        convert_price_to_fraction_digits(self.cent_amount, self.fraction_digits)
    }
}

/// One entry of a variant's price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    /// Undiscounted price.
    pub value: Money,
    /// Price after an active product discount, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted: Option<Money>,
}

impl PriceEntry {
    /// Create a price entry with no discount.
    #[must_use]
    pub const fn new(value: Money) -> Self {
        Self {
            value,
            discounted: None,
        }
    }

    /// Attach a discounted price.
    #[must_use]
    pub fn with_discounted(mut self, discounted: Money) -> Self {
        self.discounted = Some(discounted);
        self
    }
}

/// Convert a minor-unit amount into a display amount.
///
/// The result equals `amount / 10^fraction_digits`. `None` means the
/// conversion has no numeric result, which happens when `fraction_digits`
/// exceeds the 28 digit scale a [`Decimal`] supports.
///
/// # Examples
///
/// ```
/// use gadgetry_core::convert_price_to_fraction_digits;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     convert_price_to_fraction_digits(19999, 2),
///     Some(Decimal::new(19999, 2))
/// );
/// assert_eq!(convert_price_to_fraction_digits(500, 0), Some(Decimal::new(500, 0)));
/// assert_eq!(convert_price_to_fraction_digits(1, 40), None);
/// ```
#[must_use]
pub fn convert_price_to_fraction_digits(amount: i64, fraction_digits: u32) -> Option<Decimal> {
    Decimal::try_new(amount, fraction_digits).ok()
}
