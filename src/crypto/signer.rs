use crate::error::{EnvelopeError, KeyError};

/// Domain-separation tag used when no other context is configured.
pub const DEFAULT_CONTEXT: &[u8] = b"sigser/v0.0.1";

/// Longest context Ed25519ph accepts (RFC 8032, section 5.1).
pub const MAX_CONTEXT_LEN: usize = 255;

pub trait Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, EnvelopeError>;
}

pub trait Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), EnvelopeError>;
}

/// Domain-separation context mixed into every signature.
///
/// A signature made under one context never verifies under another, even
/// with the same key and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context(Vec<u8>);

impl Context {
    pub fn new(tag: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let tag = tag.into();
        if tag.len() > MAX_CONTEXT_LEN {
            return Err(KeyError::ContextTooLong {
                max: MAX_CONTEXT_LEN,
                got: tag.len(),
            });
        }
        Ok(Self(tag))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Context {
    fn default() -> Self {
        Self(DEFAULT_CONTEXT.to_vec())
    }
}
