//! Monetary amounts and their implied-decimal (minor unit) form.
//!
//! The legacy layout stores amounts as cents with the decimal point
//! implied two digits from the right, so `150.50` travels as `15050`.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::TranslationError;

/// Number of implied fractional digits.
pub const MINOR_DIGITS: u32 = 2;

/// Largest amount expressible in minor units: `999999.99`.
pub const MAX_MINOR_UNITS: u64 = 99_999_999;

/// A monetary amount as received from the caller.
///
/// No range checks happen at construction; the amount is only
/// validated when converted to minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Convert a JSON-style float, keeping its exact binary value.
    ///
    /// `2.675` is stored as `2.67499999...`, so it rounds to `2.67` the way
    /// the legacy formatter does.
    pub fn from_f64(value: f64) -> Result<Self, TranslationError> {
        if !value.is_finite() {
            return Err(TranslationError::Encoding(format!(
                "amount {} is not a finite number",
                value
            )));
        }

        Decimal::from_f64_retain(value)
            .or_else(|| Decimal::from_f64(value))
            .map(Amount)
            .ok_or_else(|| TranslationError::AmountOutOfRange(value.to_string()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Round half to even on the exact value and return the amount in
    /// cents.
    ///
    /// Fails with `AmountOutOfRange` for negatives and for anything that
    /// rounds above `999999.99`.
    pub fn to_minor_units(&self) -> Result<u64, TranslationError> {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            return Err(TranslationError::AmountOutOfRange(self.to_string()));
        }

        let mut rounded = self
            .0
            .round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::MidpointNearestEven);

        if rounded > Decimal::new(MAX_MINOR_UNITS as i64, MINOR_DIGITS) {
            return Err(TranslationError::AmountOutOfRange(self.to_string()));
        }

        rounded.rescale(MINOR_DIGITS);
        // Range-checked above, so the mantissa is 0..=MAX_MINOR_UNITS.
        u64::try_from(rounded.mantissa().abs())
            .map_err(|e| TranslationError::Encoding(format!("amount {}: {}", self, e)))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

/// Shown to at most 10 places, so float noise stays out of messages.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.round_dp(10).normalize())
    }
}
