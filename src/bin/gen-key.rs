//! Generates an Ed25519 key pair and logs both keys as base64.
//!
//! Usage:
//!   cargo run --bin gen-key
//!
//! Put the output in `.env` as `SIGSER_PUBLIC_KEY` / `SIGSER_PRIVATE_KEY`.

use std::process::ExitCode;

use sigser::KeyPair;
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    match KeyPair::generate() {
        Ok(pair) => {
            info!("[PUBLIC KEY] {}", pair.public_key_base64());
            info!("[PRIVATE KEY] {}", pair.private_key_base64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
