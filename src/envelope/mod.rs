//! Signed envelope wire record and the sign/verify codec around it.

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

pub mod clock;
pub mod codec;
pub mod replay;

/// The wire record: `{"payload": ..., "signature": ..., "timestamp": ...}`.
///
/// `signature` is standard base64 and covers [`signing_buffer`] of
/// `timestamp` and the decoded payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub payload: String,
    pub signature: String,
    pub timestamp: u64,
}

impl Envelope {
    pub fn to_json(&self) -> Result<Vec<u8>, EnvelopeError> {
        serde_json::to_vec(self).map_err(EnvelopeError::Encoding)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, EnvelopeError> {
        serde_json::from_slice(data).map_err(|e| EnvelopeError::MalformedEnvelope(e.to_string()))
    }
}

/// Bytes that are actually signed: `timestamp` as 8 big-endian bytes, then the payload.
pub fn signing_buffer(timestamp: u64, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + payload.len());
    buf.extend_from_slice(&timestamp.to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_buffer_layout() {
        let buf = signing_buffer(0x0102030405060708, b"{}");
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8, b'{', b'}']);
    }

    #[test]
    fn signing_buffer_with_empty_payload() {
        assert_eq!(signing_buffer(1, b""), [0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn wire_field_names_are_stable() {
        let envelope = Envelope {
            payload: "{}".into(),
            signature: "c2ln".into(),
            timestamp: 1700000000,
        };
        let json: serde_json::Value = serde_json::from_slice(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"payload": "{}", "signature": "c2ln", "timestamp": 1700000000u64})
        );
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        let err = Envelope::from_json(br#"{"payload":"{}","timestamp":1}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedEnvelope(_)));
    }

    #[test]
    fn from_json_rejects_negative_timestamp() {
        let err =
            Envelope::from_json(br#"{"payload":"{}","signature":"","timestamp":-1}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::MalformedEnvelope(_)));
    }

    #[test]
    fn from_json_rejects_non_json() {
        assert!(matches!(
            Envelope::from_json(b"not json"),
            Err(EnvelopeError::MalformedEnvelope(_))
        ));
    }
}
