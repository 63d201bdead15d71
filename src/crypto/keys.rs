//! Key pair generation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::SigningKey;
use rand_core::{OsRng, RngCore};

use crate::crypto::ed25519::{Ed25519Signer, Ed25519Verifier, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN};
use crate::error::KeyError;

/// A freshly generated Ed25519 key pair.
pub struct KeyPair {
    key: SigningKey,
}

impl KeyPair {
    /// Generate a key pair from the operating system's random source.
    pub fn generate() -> Result<Self, KeyError> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| KeyError::Generation(e.to_string()))?;
        Ok(Self {
            key: SigningKey::from_bytes(&seed),
        })
    }

    /// The 64-byte private key (`seed || public key`).
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.key.to_keypair_bytes()
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.key.verifying_key().to_bytes()
    }

    pub fn private_key_base64(&self) -> String {
        STANDARD.encode(self.private_key_bytes())
    }

    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.public_key_bytes())
    }

    pub fn signer(&self) -> Ed25519Signer {
        Ed25519Signer::from_signing_key(self.key.clone())
    }

    pub fn verifier(&self) -> Ed25519Verifier {
        self.signer().verifier()
    }
}
