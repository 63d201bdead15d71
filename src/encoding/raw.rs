use super::PayloadEncoder;

/// Carries the payload as text. Payloads are JSON, so they are always UTF-8.
#[derive(Default)]
pub struct RawEncoder;

impl PayloadEncoder for RawEncoder {
    fn encode(&self, payload: &[u8]) -> String {
        String::from_utf8_lossy(payload).into_owned()
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        Some(text.as_bytes().to_vec())
    }
}
