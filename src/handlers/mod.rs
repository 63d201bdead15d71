use std::sync::Arc;

use axum::{Router, routing::post};

use crate::crypto::ed25519::{Ed25519Signer, Ed25519Verifier};
use crate::envelope::codec::{EnvelopeSigner, EnvelopeVerifier};

pub mod signing;

/// Key holders shared by every request.
pub struct AppState {
    pub sealer: EnvelopeSigner<Ed25519Signer>,
    pub opener: EnvelopeVerifier<Ed25519Verifier>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sign", post(signing::sign))
        .route("/verify", post(signing::verify))
        .with_state(Arc::new(state))
}
