//! Logical payment records.
//!
//! These are **transport-agnostic**: the HTTP layer builds them from
//! JSON, the protocol crate turns them into fixed-width records.

use crate::amount::Amount;
use crate::error::TranslationError;

/// A payment as the modern side describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRecord {
    /// Target account, at most 10 characters once encoded.
    pub account_id: String,

    pub amount: Amount,

    /// ISO currency code. Carried along, not part of the legacy layout.
    pub currency: String,
}

impl LogicalRecord {
    pub fn new(account_id: impl Into<String>, amount: Amount, currency: impl Into<String>) -> Self {
        LogicalRecord {
            account_id: account_id.into(),
            amount,
            currency: currency.into(),
        }
    }

    /// Build a record from a float amount as it arrives over JSON.
    pub fn from_float(
        account_id: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        Ok(LogicalRecord::new(account_id, Amount::from_f64(amount)?, currency))
    }
}
