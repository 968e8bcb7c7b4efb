//! Error types for translating a logical record into a legacy record.
//!
//! Callers keep the distinct kinds for testing and logging; the HTTP
//! boundary collapses all of them into a single "Translation Error"
//! response.

use thiserror::Error;

/// Why a logical record could not be translated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A text field is longer than its fixed-width slot.
    #[error("field `{field}` is {actual} characters long, maximum is {max}")]
    FieldOverflow {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Amount is negative or needs more than 6 integer digits. Carries the
    /// amount as displayed, since it may not fit a `Decimal` at all.
    #[error("amount {0} is outside the encodable range 0.00..=999999.99")]
    AmountOutOfRange(String),

    /// Any other transformation failure.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl TranslationError {
    /// Stable tag for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::FieldOverflow { .. } => "field_overflow",
            TranslationError::AmountOutOfRange(_) => "amount_out_of_range",
            TranslationError::Encoding(_) => "encoding_error",
        }
    }
}
