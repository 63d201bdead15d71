use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crypto::keys::KeyPair;
use crate::crypto::signer::{Signer, Verifier};
use crate::encoding::PayloadEncoding;
use crate::envelope::Envelope;
use crate::envelope::clock::FixedClock;
use crate::envelope::codec::{CodecConfig, EnvelopeSigner, EnvelopeVerifier};
use crate::envelope::replay::ReplayWindow;
use crate::error::EnvelopeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    name: String,
    num: i64,
    tags: Vec<String>,
}

fn record() -> impl Strategy<Value = Record> {
    (any::<String>(), any::<i64>(), prop::collection::vec(any::<String>(), 0..4))
        .prop_map(|(name, num, tags)| Record { name, num, tags })
}

fn encoding() -> impl Strategy<Value = PayloadEncoding> {
    prop_oneof![Just(PayloadEncoding::Raw), Just(PayloadEncoding::Base64)]
}

fn codec_pair(
    pair: &KeyPair,
    now: u64,
    encoding: PayloadEncoding,
) -> (
    EnvelopeSigner<crate::Ed25519Signer, FixedClock>,
    EnvelopeVerifier<crate::Ed25519Verifier, FixedClock>,
) {
    let config = CodecConfig {
        encoding,
        ..CodecConfig::default()
    };
    (
        EnvelopeSigner::with_clock(pair.signer(), FixedClock(now), config),
        EnvelopeVerifier::with_clock(pair.verifier(), FixedClock(now), config),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn envelope_round_trip(
        value in record(),
        now in 61u64..u64::MAX / 2,
        encoding in encoding(),
    ) {
        let pair = KeyPair::generate().unwrap();
        let (sealer, opener) = codec_pair(&pair, now, encoding);
        let data = sealer.marshal(&value).unwrap();
        let opened: Record = opener.unmarshal(&data).unwrap();
        prop_assert_eq!(opened, value);
    }

    #[test]
    fn primitive_signature_round_trip(message in any::<Vec<u8>>()) {
        let pair = KeyPair::generate().unwrap();
        let signature = pair.signer().sign(&message).unwrap();
        prop_assert!(pair.verifier().verify(&message, &signature).is_ok());
    }

    #[test]
    fn any_signature_bit_flip_is_rejected(
        message in any::<Vec<u8>>(),
        bit in 0usize..512,
    ) {
        let pair = KeyPair::generate().unwrap();
        let mut signature = pair.signer().sign(&message).unwrap();
        signature[bit / 8] ^= 1u8 << (bit % 8);
        let rejected = matches!(
            pair.verifier().verify(&message, &signature),
            Err(EnvelopeError::SignatureInvalid)
        );
        prop_assert!(rejected);
    }

    #[test]
    fn any_payload_bit_flip_is_rejected(
        value in record(),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let pair = KeyPair::generate().unwrap();
        let (sealer, opener) = codec_pair(&pair, 1_700_000_000, PayloadEncoding::Base64);
        let envelope = sealer.seal(&value).unwrap();

        let mut payload = base64_decode(&envelope.payload);
        let i = index.index(payload.len());
        payload[i] ^= 1u8 << bit;
        let tampered = Envelope {
            payload: base64_encode(&payload),
            ..envelope
        };

        let result: Result<Record, _> = opener.open(&tampered);
        let rejected = matches!(result, Err(EnvelopeError::SignatureInvalid));
        prop_assert!(rejected);
    }

    #[test]
    fn any_timestamp_bit_flip_is_rejected(
        value in record(),
        bit in 0u32..64,
    ) {
        let now = 1_700_000_000;
        let pair = KeyPair::generate().unwrap();
        let (sealer, opener) = codec_pair(&pair, now, PayloadEncoding::Raw);
        let mut envelope = sealer.seal(&value).unwrap();
        envelope.timestamp ^= 1u64 << bit;

        let result: Result<Record, _> = opener.open(&envelope);
        let rejected = matches!(
            result,
            Err(EnvelopeError::SignatureInvalid) | Err(EnvelopeError::StaleTimestamp { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn replay_window_matches_unsigned_gap(
        timestamp in any::<u64>(),
        now in 3600u64..=u64::MAX,
        max_gap in 0u64..3600,
    ) {
        let fresh = ReplayWindow::new(max_gap).check(timestamp, now).is_ok();
        let expected = timestamp <= now && now - timestamp <= max_gap;
        prop_assert_eq!(fresh, expected);
    }
}

fn base64_decode(text: &str) -> Vec<u8> {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.decode(text).unwrap()
}

fn base64_encode(bytes: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
