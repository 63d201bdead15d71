use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::{SECRET_KEY_LENGTH, Signature, SigningKey, VerifyingKey};
use sha2::{Digest, Sha512};

use crate::crypto::signer::{Context, Signer, Verifier};
use crate::error::{EnvelopeError, KeyError};

/// Size of a private key: 32-byte seed followed by the 32-byte public key.
pub const PRIVATE_KEY_LEN: usize = 64;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

/// Client-side key holder.
///
/// Signs with Ed25519ph over SHA-512 using the configured [`Context`].
pub struct Ed25519Signer {
    key: SigningKey,
    context: Context,
}

impl Ed25519Signer {
    /// Builds a signer from `seed || public key`. Only the length is checked;
    /// the public half is re-derived from the seed, never trusted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidKeySize {
                expected: PRIVATE_KEY_LEN,
                got: bytes.len(),
            });
        }
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        seed.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        Ok(Self::from_signing_key(SigningKey::from_bytes(&seed)))
    }

    pub fn from_base64(text: &str) -> Result<Self, KeyError> {
        Self::from_bytes(&STANDARD.decode(text.trim())?)
    }

    /// Loads a base64 private key from the named environment variable.
    pub fn from_env(name: &str) -> Result<Self, KeyError> {
        Self::from_base64(&read_env(name)?)
    }

    pub(crate) fn from_signing_key(key: SigningKey) -> Self {
        Self {
            key,
            context: Context::default(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.key.verifying_key().to_bytes()
    }

    /// Verifier for the matching public key, under the same context.
    pub fn verifier(&self) -> Ed25519Verifier {
        Ed25519Verifier {
            key: self.key.verifying_key().to_bytes(),
            context: self.context.clone(),
        }
    }
}

impl std::fmt::Debug for Ed25519Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Signer")
            .field("key", &"***SECRET***")
            .field("context", &self.context)
            .finish()
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
        let prehash = Sha512::new().chain_update(message);
        let signature = self
            .key
            .sign_prehashed(prehash, Some(self.context.as_bytes()))
            .map_err(|e| EnvelopeError::Signing(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// Server-side key holder.
///
/// Keeps the raw public key; a key that is not a valid curve point simply
/// never verifies anything.
#[derive(Debug, Clone)]
pub struct Ed25519Verifier {
    key: [u8; PUBLIC_KEY_LEN],
    context: Context,
}

impl Ed25519Verifier {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key: [u8; PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_| KeyError::InvalidKeySize {
                expected: PUBLIC_KEY_LEN,
                got: bytes.len(),
            })?;
        Ok(Self {
            key,
            context: Context::default(),
        })
    }

    pub fn from_base64(text: &str) -> Result<Self, KeyError> {
        Self::from_bytes(&STANDARD.decode(text.trim())?)
    }

    /// Loads a base64 public key from the named environment variable.
    pub fn from_env(name: &str) -> Result<Self, KeyError> {
        Self::from_base64(&read_env(name)?)
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.key
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), EnvelopeError> {
        let signature =
            Signature::from_slice(signature).map_err(|_| EnvelopeError::SignatureInvalid)?;
        let key =
            VerifyingKey::from_bytes(&self.key).map_err(|_| EnvelopeError::SignatureInvalid)?;
        let prehash = Sha512::new().chain_update(message);
        key.verify_prehashed_strict(prehash, Some(self.context.as_bytes()), &signature)
            .map_err(|_| EnvelopeError::SignatureInvalid)
    }
}

fn read_env(name: &str) -> Result<String, KeyError> {
    std::env::var(name).map_err(|_| KeyError::MissingEnv {
        name: name.to_string(),
    })
}
