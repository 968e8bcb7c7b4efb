//! Record layout constants.
//!
//! ```text
//! Bytes   Field            Format
//! -----   --------------   ------------------------------------------
//! 1-10    Account Number   right-justified, zero-padded
//! 11-18   Amount           implied 2-decimal fixed point, zero-padded
//! 19-26   Date             YYYYMMDD
//! ```
//!
//! The actual encode/decode logic lives in `fixed_width`.

/// Character used to fill unused leading positions.
pub const PAD_CHAR: char = '0';

/// One positional field of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Zero-based start position.
    pub offset: usize,
    pub width: usize,
}

impl FieldSpec {
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// The slice of `record` this field occupies, or `None` if `record` is
    /// too short or the field would split a multi-byte character.
    pub fn slice<'a>(&self, record: &'a str) -> Option<&'a str> {
        record.get(self.offset..self.end())
    }
}

pub const ACCOUNT: FieldSpec = FieldSpec {
    name: "account_id",
    offset: 0,
    width: 10,
};

pub const AMOUNT: FieldSpec = FieldSpec {
    name: "amount",
    offset: ACCOUNT.end(),
    width: 8,
};

pub const DATE: FieldSpec = FieldSpec {
    name: "date",
    offset: AMOUNT.end(),
    width: 8,
};

/// Fields in record order.
pub const RECORD_LAYOUT: [FieldSpec; 3] = [ACCOUNT, AMOUNT, DATE];

/// Total record length in bytes.
pub const RECORD_WIDTH: usize = DATE.end();

/// Right-justify `value` in a field of `spec.width`, padding with `'0'`.
///
/// Values wider than the field are never truncated.
pub fn right_justify(spec: &FieldSpec, value: &str) -> Option<String> {
    let len = value.chars().count();
    if len > spec.width {
        return None;
    }

    let mut out = String::with_capacity(spec.width);
    out.extend(std::iter::repeat(PAD_CHAR).take(spec.width - len));
    out.push_str(value);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_contiguous_and_total_26() {
        let mut expected_offset = 0;
        for field in RECORD_LAYOUT {
            assert_eq!(field.offset, expected_offset, "{}", field.name);
            expected_offset = field.end();
        }
        assert_eq!(RECORD_WIDTH, 26);
    }

    #[test]
    fn right_justify_pads_with_zeros() {
        assert_eq!(right_justify(&ACCOUNT, "123").as_deref(), Some("0000000123"));
        assert_eq!(right_justify(&ACCOUNT, "").as_deref(), Some("0000000000"));
        assert_eq!(
            right_justify(&ACCOUNT, "1234567890").as_deref(),
            Some("1234567890")
        );
    }

    #[test]
    fn right_justify_refuses_overflow() {
        assert_eq!(right_justify(&ACCOUNT, "12345678901"), None);
    }

    #[test]
    fn slice_picks_field_positions() {
        let rec = "00000001230001505020240305";
        assert_eq!(ACCOUNT.slice(rec), Some("0000000123"));
        assert_eq!(AMOUNT.slice(rec), Some("00015050"));
        assert_eq!(DATE.slice(rec), Some("20240305"));
    }

    #[test]
    fn slice_of_short_or_multibyte_input_is_none() {
        assert_eq!(DATE.slice("0000000123"), None);
        assert_eq!(ACCOUNT.slice(""), None);
        // 'é' is two bytes, so byte 10 falls inside it.
        assert_eq!(ACCOUNT.slice("000000000é00000000"), None);
    }
}
