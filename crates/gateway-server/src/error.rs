//! Error types for the gateway server and their HTTP mapping.
//!
//! Every translation failure, whatever its kind, becomes a 500 with a
//! `"Translation Error: ..."` detail. Malformed requests never reach the
//! encoder and come back as 422.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gateway_core::TranslationError;
use serde_json::json;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoder refused the record.
    #[error("Translation Error: {0}")]
    Translation(#[from] TranslationError),

    /// Missing or mistyped request fields.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Translation(_) | Error::Config(_) | Error::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
