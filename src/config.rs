//! Environment-driven configuration for the binaries.

use std::net::SocketAddr;

use thiserror::Error;

use crate::crypto::ed25519::{Ed25519Signer, Ed25519Verifier};
use crate::crypto::signer::{Context, DEFAULT_CONTEXT};
use crate::encoding::PayloadEncoding;
use crate::envelope::codec::CodecConfig;
use crate::envelope::replay::DEFAULT_MAX_GAP;
use crate::error::KeyError;

pub const PRIVATE_KEY_ENV: &str = "SIGSER_PRIVATE_KEY";
pub const PUBLIC_KEY_ENV: &str = "SIGSER_PUBLIC_KEY";
pub const LISTEN_ADDR_ENV: &str = "SIGSER_LISTEN_ADDR";
pub const CONTEXT_ENV: &str = "SIGSER_CONTEXT";
pub const MAX_GAP_ENV: &str = "SIGSER_MAX_GAP";
pub const PAYLOAD_ENCODING_ENV: &str = "SIGSER_PAYLOAD_ENCODING";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error(transparent)]
    Key(#[from] KeyError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub context: Context,
    pub codec: CodecConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; unset names fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = parse_or(&lookup, LISTEN_ADDR_ENV, DEFAULT_LISTEN_ADDR)?;
        let max_gap = parse_or(&lookup, MAX_GAP_ENV, &DEFAULT_MAX_GAP.to_string())?;
        let encoding: PayloadEncoding =
            parse_or(&lookup, PAYLOAD_ENCODING_ENV, &PayloadEncoding::default().to_string())?;
        let context = match lookup(CONTEXT_ENV) {
            Some(tag) => Context::new(tag)?,
            None => Context::new(DEFAULT_CONTEXT)?,
        };

        Ok(Self {
            listen_addr,
            context,
            codec: CodecConfig { max_gap, encoding },
        })
    }

    /// Signer from [`PRIVATE_KEY_ENV`], bound to the configured context.
    pub fn signer_from_env(&self) -> Result<Ed25519Signer, ConfigError> {
        Ok(Ed25519Signer::from_env(PRIVATE_KEY_ENV)?.with_context(self.context.clone()))
    }

    /// Verifier from [`PUBLIC_KEY_ENV`], bound to the configured context.
    pub fn verifier_from_env(&self) -> Result<Ed25519Verifier, ConfigError> {
        Ok(Ed25519Verifier::from_env(PUBLIC_KEY_ENV)?.with_context(self.context.clone()))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}
