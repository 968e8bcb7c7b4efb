//! HTTP endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use gateway_core::{Clock, LogicalRecord};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::types::{HealthStatus, PaymentRequest, TranslationResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/process-transaction/", post(process_transaction))
        .route("/health", get(health_check))
}

/// Translate one JSON payment into a fixed-width record.
///
/// POST /process-transaction/
async fn process_transaction(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected malformed payment request");
        Error::Validation(rejection.body_text())
    })?;

    let encoded = LogicalRecord::from_float(req.account_id, req.amount, req.currency)
        .and_then(|record| state.encoder.encode_record(&record))
        .map_err(|e| {
            warn!(kind = e.kind(), error = %e, "translation failed");
            Error::Translation(e)
        })?;

    info!(record = %encoded, "Sending to core banking system");

    Ok(Json(TranslationResponse::success(&encoded, state.clock().now())))
}

/// GET /health
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
