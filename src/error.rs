//! Error types.
//!
//! [`KeyError`] covers misconfiguration (bad key material, bad context) and is
//! only raised while building signers and verifiers. [`EnvelopeError`] covers
//! untrusted input and is raised per call on the sign and verify paths.

use thiserror::Error;

/// Errors raised while constructing key holders.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid key size: expected {expected} bytes, got {got}")]
    InvalidKeySize { expected: usize, got: usize },

    #[error("invalid base64 key: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("environment variable {name} is not set")]
    MissingEnv { name: String },

    #[error("context must be at most {max} bytes, got {got}")]
    ContextTooLong { max: usize, got: usize },

    #[error("key generation failed: {0}")]
    Generation(String),
}

/// Errors raised while sealing or opening an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("stale timestamp {timestamp} (now {now}, max gap {max_gap}s)")]
    StaleTimestamp {
        timestamp: u64,
        now: u64,
        max_gap: u64,
    },

    #[error("signature verification failed")]
    SignatureInvalid,

    #[error("payload could not be decoded: {0}")]
    PayloadDecode(#[source] serde_json::Error),

    #[error("payload could not be encoded: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("signing failed: {0}")]
    Signing(String),
}
