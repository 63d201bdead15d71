#![forbid(unsafe_code)]

//! Signed JSON envelopes.
//!
//! A producer seals a value into an [`Envelope`] carrying the JSON payload,
//! an Ed25519ph signature under a domain-separation [`Context`] and the
//! signing time. A consumer opens it only if the timestamp is inside the
//! replay window and the signature checks out.

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod proptests;

pub use crypto::ed25519::{Ed25519Signer, Ed25519Verifier};
pub use crypto::keys::KeyPair;
pub use crypto::signer::{Context, Signer, Verifier};
pub use encoding::PayloadEncoding;
pub use envelope::Envelope;
pub use envelope::codec::{CodecConfig, EnvelopeSigner, EnvelopeVerifier};
pub use error::{EnvelopeError, KeyError};
