use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use super::AppState;
use crate::envelope::Envelope;
use crate::error::EnvelopeError;

pub struct ApiError(EnvelopeError);

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            EnvelopeError::MalformedEnvelope(_) => StatusCode::BAD_REQUEST,
            EnvelopeError::StaleTimestamp { .. } | EnvelopeError::SignatureInvalid => {
                StatusCode::UNAUTHORIZED
            }
            EnvelopeError::PayloadDecode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EnvelopeError::Encoding(_) | EnvelopeError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn sign(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<Envelope>, ApiError> {
    Ok(Json(state.sealer.seal(&payload)?))
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let envelope: Envelope = serde_json::from_value(body)
        .map_err(|e| EnvelopeError::MalformedEnvelope(e.to_string()))?;
    Ok(Json(state.opener.open(&envelope)?))
}
