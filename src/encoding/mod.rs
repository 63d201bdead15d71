//! How payload bytes are carried in the envelope's `payload` string.

use std::fmt;
use std::str::FromStr;

pub mod base64;
pub mod raw;

use self::base64::Base64Encoder;
use self::raw::RawEncoder;

pub trait PayloadEncoder {
    fn encode(&self, payload: &[u8]) -> String;
    fn decode(&self, text: &str) -> Option<Vec<u8>>;
}

/// Wire variant for the `payload` field. Signer and verifier must agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Payload JSON text embedded verbatim.
    #[default]
    Raw,
    /// Payload bytes as standard base64.
    Base64,
}

impl PayloadEncoder for PayloadEncoding {
    fn encode(&self, payload: &[u8]) -> String {
        match self {
            Self::Raw => RawEncoder.encode(payload),
            Self::Base64 => Base64Encoder.encode(payload),
        }
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        match self {
            Self::Raw => RawEncoder.decode(text),
            Self::Base64 => Base64Encoder.decode(text),
        }
    }
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

impl FromStr for PayloadEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "base64" => Ok(Self::Base64),
            other => Err(format!("unknown payload encoding '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("raw".parse::<PayloadEncoding>(), Ok(PayloadEncoding::Raw));
        assert_eq!("Base64".parse::<PayloadEncoding>(), Ok(PayloadEncoding::Base64));
        assert!("hex".parse::<PayloadEncoding>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for encoding in [PayloadEncoding::Raw, PayloadEncoding::Base64] {
            assert_eq!(encoding.to_string().parse::<PayloadEncoding>(), Ok(encoding));
        }
    }

    #[test]
    fn default_is_raw() {
        assert_eq!(PayloadEncoding::default(), PayloadEncoding::Raw);
    }

    #[test]
    fn variants_produce_different_text() {
        let payload = br#"{"Str":"hogehoge","Num":99}"#;
        assert_ne!(
            PayloadEncoding::Raw.encode(payload),
            PayloadEncoding::Base64.encode(payload)
        );
    }
}
