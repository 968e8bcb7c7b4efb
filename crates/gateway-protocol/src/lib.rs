//! gateway-protocol
//!
//! The legacy fixed-width record format.
//!
//! This crate turns logical payment records
//! (`gateway_core::LogicalRecord`) into positional strings and back.
//!
//! - [`layout`]      : field widths, offsets and padding rules
//! - [`fixed_width`] : encoder / decoder for the 26-byte record

pub mod fixed_width;
pub mod layout;

pub use fixed_width::{decode_record, DecodeError, DecodedRecord, EncodedRecord, FixedWidthEncoder};
pub use layout::{FieldSpec, RECORD_LAYOUT, RECORD_WIDTH};
