pub mod ed25519;
pub mod keys;
pub mod signer;
