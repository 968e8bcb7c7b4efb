//! Fixed-width encoding/decoding for payment records.
//!
//! This module converts between:
//! - `gateway_core::LogicalRecord` / `(account_id, Amount)`
//! - the 26-byte positional string described in [`crate::layout`]
//!
//! Encoding either produces a full-width record or fails; it never
//! truncates a field or emits a short/long record.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use gateway_core::amount::MINOR_DIGITS;
use gateway_core::{Amount, Clock, LogicalRecord, SystemClock, TranslationError};

use crate::layout::{right_justify, FieldSpec, ACCOUNT, AMOUNT, DATE, RECORD_WIDTH};

const DATE_FORMAT: &str = "%Y%m%d";

/// An encoded legacy record. Always exactly [`RECORD_WIDTH`] ASCII bytes,
/// so the field accessors never come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedRecord(String);

impl EncodedRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn byte_length(&self) -> usize {
        self.0.len()
    }

    pub fn account_field(&self) -> &str {
        ACCOUNT.slice(&self.0).unwrap_or_default()
    }

    pub fn amount_field(&self) -> &str {
        AMOUNT.slice(&self.0).unwrap_or_default()
    }

    pub fn date_field(&self) -> &str {
        DATE.slice(&self.0).unwrap_or_default()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EncodedRecord> for String {
    fn from(rec: EncodedRecord) -> Self {
        rec.0
    }
}

// ============================================================================
// ENCODE
// ============================================================================

/// Translates logical records into fixed-width records, dating them with
/// the injected clock.
#[derive(Debug, Clone, Default)]
pub struct FixedWidthEncoder<C = SystemClock> {
    clock: C,
}

impl FixedWidthEncoder<SystemClock> {
    pub fn new() -> Self {
        FixedWidthEncoder { clock: SystemClock }
    }
}

impl<C: Clock> FixedWidthEncoder<C> {
    pub fn with_clock(clock: C) -> Self {
        FixedWidthEncoder { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Encode account + amount, dated with the clock's current local date.
    pub fn encode(&self, account_id: &str, amount: Amount) -> Result<EncodedRecord, TranslationError> {
        encode_on(account_id, amount, self.clock.today())
    }

    /// Encode a full logical record. The currency is not part of the layout.
    pub fn encode_record(&self, record: &LogicalRecord) -> Result<EncodedRecord, TranslationError> {
        self.encode(&record.account_id, record.amount)
    }
}

/// Encode against an explicit date. Pure.
pub fn encode_on(
    account_id: &str,
    amount: Amount,
    date: NaiveDate,
) -> Result<EncodedRecord, TranslationError> {
    let account = encode_account(account_id)?;
    let amount = encode_amount(amount)?;
    let date = encode_date(date)?;

    let mut out = String::with_capacity(RECORD_WIDTH);
    out.push_str(&account);
    out.push_str(&amount);
    out.push_str(&date);

    if out.len() != RECORD_WIDTH {
        return Err(TranslationError::Encoding(format!(
            "record is {} bytes, expected {}",
            out.len(),
            RECORD_WIDTH
        )));
    }

    debug!(record = %out, "encoded fixed-width record");
    Ok(EncodedRecord(out))
}

fn encode_account(account_id: &str) -> Result<String, TranslationError> {
    let padded = right_justify(&ACCOUNT, account_id).ok_or(TranslationError::FieldOverflow {
        field: ACCOUNT.name,
        max: ACCOUNT.width,
        actual: account_id.chars().count(),
    })?;

    // One character must be one byte or the record stops being 26 bytes.
    if !account_id.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err(TranslationError::Encoding(format!(
            "account_id {:?} contains non-printable or non-ASCII characters",
            account_id
        )));
    }

    Ok(padded)
}

fn encode_amount(amount: Amount) -> Result<String, TranslationError> {
    let cents = amount.to_minor_units()?;
    let digits = format!("{:0width$}", cents, width = AMOUNT.width);
    if digits.len() != AMOUNT.width {
        return Err(TranslationError::AmountOutOfRange(amount.to_string()));
    }
    Ok(digits)
}

fn encode_date(date: NaiveDate) -> Result<String, TranslationError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(TranslationError::Encoding(format!(
            "date {} does not fit YYYYMMDD",
            date
        )));
    }
    Ok(date.format(DATE_FORMAT).to_string())
}

// ============================================================================
// DECODE
// ============================================================================

/// A fixed-width record read back into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    /// Account field as stored, padding included.
    pub account_number: String,
    pub amount: Amount,
    pub date: NaiveDate,
}

/// Errors that can arise when reading a fixed-width record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("record is {actual} bytes, expected {expected}")]
    Length { actual: usize, expected: usize },

    #[error("record contains non-ASCII characters")]
    NotAscii,

    #[error("field `{field}` contains non-digit characters")]
    InvalidDigits { field: &'static str },

    #[error("date field `{0}` is not a calendar date")]
    InvalidDate(String),
}

/// Decode a single record. The buffer must hold exactly one record.
pub fn decode_record(record: &str) -> Result<DecodedRecord, DecodeError> {
    if !record.is_ascii() {
        return Err(DecodeError::NotAscii);
    }
    if record.len() != RECORD_WIDTH {
        return Err(DecodeError::Length {
            actual: record.len(),
            expected: RECORD_WIDTH,
        });
    }

    let account_number = field(&ACCOUNT, record)?.to_string();

    let cents = digits(&AMOUNT, record)?
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidDigits { field: AMOUNT.name })?;
    let amount = Amount::new(Decimal::new(cents, MINOR_DIGITS));

    let raw_date = digits(&DATE, record)?;
    let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|_| DecodeError::InvalidDate(raw_date.to_string()))?;

    Ok(DecodedRecord {
        account_number,
        amount,
        date,
    })
}

fn field<'a>(spec: &FieldSpec, record: &'a str) -> Result<&'a str, DecodeError> {
    spec.slice(record).ok_or(DecodeError::Length {
        actual: record.len(),
        expected: RECORD_WIDTH,
    })
}

fn digits<'a>(spec: &FieldSpec, record: &'a str) -> Result<&'a str, DecodeError> {
    let value = field(spec, record)?;
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(DecodeError::InvalidDigits { field: spec.name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_core::FixedClock;

    fn march_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn amount(v: f64) -> Amount {
        Amount::from_f64(v).unwrap()
    }

    #[test]
    fn encodes_reference_payment() {
        let rec = encode_on("123", amount(150.50), march_5()).unwrap();
        assert_eq!(rec.as_str(), "00000001230001505020240305");
        assert_eq!(rec.byte_length(), RECORD_WIDTH);
    }

    #[test]
    fn field_accessors_slice_the_record() {
        let rec = encode_on("42", amount(0.0), march_5()).unwrap();
        assert_eq!(rec.account_field(), "0000000042");
        assert_eq!(rec.amount_field(), "00000000");
        assert_eq!(rec.date_field(), "20240305");
    }

    #[test]
    fn amount_field_rounds_float_midpoints_like_the_legacy_format() {
        let rec = encode_on("1", amount(2.675), march_5()).unwrap();
        assert_eq!(rec.amount_field(), "00000267");
        let rec = encode_on("1", amount(0.125), march_5()).unwrap();
        assert_eq!(rec.amount_field(), "00000012");
        let rec = encode_on("1", amount(1.005), march_5()).unwrap();
        assert_eq!(rec.amount_field(), "00000100");
    }

    #[test]
    fn account_overflow_is_rejected() {
        let err = encode_on("ABCDEFGHIJK", amount(1.0), march_5()).unwrap_err();
        assert_eq!(
            err,
            TranslationError::FieldOverflow {
                field: "account_id",
                max: 10,
                actual: 11
            }
        );
    }

    #[test]
    fn non_ascii_account_is_an_encoding_error() {
        let err = encode_on("café", amount(1.0), march_5()).unwrap_err();
        assert_eq!(err.kind(), "encoding_error");
    }

    #[test]
    fn alphanumeric_accounts_are_padded_like_digits() {
        let rec = encode_on("AB-12", amount(1.0), march_5()).unwrap();
        assert_eq!(rec.account_field(), "00000AB-12");
    }

    #[test]
    fn dates_beyond_four_digit_years_fail() {
        let far = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        let err = encode_on("1", amount(1.0), far).unwrap_err();
        assert_eq!(err.kind(), "encoding_error");
    }

    #[test]
    fn early_years_are_zero_padded() {
        let early = NaiveDate::from_ymd_opt(999, 1, 2).unwrap();
        let rec = encode_on("1", amount(1.0), early).unwrap();
        assert_eq!(rec.date_field(), "09990102");
    }

    #[test]
    fn encoder_uses_injected_clock() {
        let encoder = FixedWidthEncoder::with_clock(FixedClock::from_ymd(2024, 3, 5).unwrap());
        let rec = encoder.encode("1234567890", amount(999_999.99)).unwrap();
        assert_eq!(rec.as_str(), "12345678909999999920240305");
    }

    #[test]
    fn decode_reads_fields_back() {
        let decoded = decode_record("00000001230001505020240305").unwrap();
        assert_eq!(decoded.account_number, "0000000123");
        assert_eq!(decoded.amount.value(), Decimal::new(15050, 2));
        assert_eq!(decoded.date, march_5());
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode_record("0000000123"),
            Err(DecodeError::Length {
                actual: 10,
                expected: 26
            })
        );
    }

    #[test]
    fn decode_rejects_non_digit_amount() {
        assert_eq!(
            decode_record("00000001230001505X20240305"),
            Err(DecodeError::InvalidDigits { field: "amount" })
        );
    }

    #[test]
    fn decode_rejects_impossible_date() {
        assert_eq!(
            decode_record("00000001230001505020240230"),
            Err(DecodeError::InvalidDate("20240230".into()))
        );
    }

    #[test]
    fn decode_rejects_non_ascii() {
        assert_eq!(decode_record("é"), Err(DecodeError::NotAscii));
    }
}
