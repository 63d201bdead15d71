use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::PayloadEncoder;

/// Carries the payload as standard base64, for containers that escape
/// binary or mangle nested JSON text.
#[derive(Default)]
pub struct Base64Encoder;

impl PayloadEncoder for Base64Encoder {
    fn encode(&self, payload: &[u8]) -> String {
        STANDARD.encode(payload)
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        STANDARD.decode(text).ok()
    }
}
