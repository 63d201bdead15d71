//! Sealing values into envelopes and opening them again.
//!
//! Opening runs parse, freshness, signature and payload decoding in that
//! order; the caller only ever sees a payload that passed every check.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::replay::{DEFAULT_MAX_GAP, ReplayWindow};
use super::{Envelope, signing_buffer};
use crate::crypto::signer::{Signer, Verifier};
use crate::encoding::{PayloadEncoder, PayloadEncoding};
use crate::error::EnvelopeError;

/// Policy shared by both ends of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub max_gap: u64,
    pub encoding: PayloadEncoding,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            encoding: PayloadEncoding::default(),
        }
    }
}

/// Producer side: serializes, timestamps and signs values.
#[derive(Debug)]
pub struct EnvelopeSigner<S, C = SystemClock> {
    signer: S,
    clock: C,
    encoding: PayloadEncoding,
}

impl<S: Signer> EnvelopeSigner<S> {
    pub fn new(signer: S) -> Self {
        Self::with_clock(signer, SystemClock, CodecConfig::default())
    }
}

impl<S: Signer, C: Clock> EnvelopeSigner<S, C> {
    pub fn with_clock(signer: S, clock: C, config: CodecConfig) -> Self {
        Self {
            signer,
            clock,
            encoding: config.encoding,
        }
    }

    pub fn seal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Envelope, EnvelopeError> {
        let payload = serde_json::to_vec(value).map_err(EnvelopeError::Encoding)?;
        let timestamp = self.clock.now();

        let signature = self.signer.sign(&signing_buffer(timestamp, &payload))?;

        debug!(timestamp, payload_len = payload.len(), "sealed envelope");
        Ok(Envelope {
            payload: self.encoding.encode(&payload),
            signature: STANDARD.encode(signature),
            timestamp,
        })
    }

    /// Seals `value` and serializes the envelope for transport.
    pub fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EnvelopeError> {
        self.seal(value)?.to_json()
    }
}

/// Consumer side: checks freshness and authenticity before decoding.
#[derive(Debug)]
pub struct EnvelopeVerifier<V, C = SystemClock> {
    verifier: V,
    clock: C,
    window: ReplayWindow,
    encoding: PayloadEncoding,
}

impl<V: Verifier> EnvelopeVerifier<V> {
    pub fn new(verifier: V) -> Self {
        Self::with_clock(verifier, SystemClock, CodecConfig::default())
    }
}

impl<V: Verifier, C: Clock> EnvelopeVerifier<V, C> {
    pub fn with_clock(verifier: V, clock: C, config: CodecConfig) -> Self {
        Self {
            verifier,
            clock,
            window: ReplayWindow::new(config.max_gap),
            encoding: config.encoding,
        }
    }

    pub fn window(&self) -> ReplayWindow {
        self.window
    }

    /// Parses a serialized envelope and opens it.
    pub fn unmarshal<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, EnvelopeError> {
        self.open(&Envelope::from_json(data)?)
    }

    pub fn open<T: DeserializeOwned>(&self, envelope: &Envelope) -> Result<T, EnvelopeError> {
        let payload = self.verified_payload(envelope).inspect_err(|e| {
            warn!(timestamp = envelope.timestamp, error = %e, "rejected envelope");
        })?;
        serde_json::from_slice(&payload).map_err(EnvelopeError::PayloadDecode)
    }

    /// Payload bytes of an envelope that is both fresh and correctly signed.
    fn verified_payload(&self, envelope: &Envelope) -> Result<Vec<u8>, EnvelopeError> {
        let payload = self.encoding.decode(&envelope.payload).ok_or_else(|| {
            EnvelopeError::MalformedEnvelope(format!("payload is not valid {}", self.encoding))
        })?;
        let signature = STANDARD
            .decode(&envelope.signature)
            .map_err(|e| EnvelopeError::MalformedEnvelope(format!("signature: {e}")))?;

        let now = self.clock.now();
        self.window.check(envelope.timestamp, now)?;

        self.verifier
            .verify(&signing_buffer(envelope.timestamp, &payload), &signature)?;

        debug!(timestamp = envelope.timestamp, now, "verified envelope");
        Ok(payload)
    }
}
