//! Request / response bodies for the HTTP boundary.
//!
//! Field names are part of the external contract and must not change.

use chrono::NaiveDateTime;
use gateway_protocol::EncodedRecord;
use serde::{Deserialize, Serialize};

/// Human-readable service name reported by `/health`.
pub const SERVICE_NAME: &str = "Legacy-to-Cloud Payment Gateway";

pub const SUCCESS_MESSAGE: &str = "Translated JSON to Legacy Fixed-Width";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// `POST /process-transaction/` body.
///
/// Only presence and JSON types are checked here; domain rules belong
/// to the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub account_id: String,
    pub amount: f64,
    pub currency: String,
}

/// Successful translation envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub status: String,
    pub message: String,
    pub mainframe_string: String,
    pub byte_length: usize,
    pub timestamp: String,
}

impl TranslationResponse {
    pub fn success(record: &EncodedRecord, at: NaiveDateTime) -> Self {
        TranslationResponse {
            status: "success".to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            mainframe_string: record.as_str().to_string(),
            byte_length: record.byte_length(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Health status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        HealthStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
