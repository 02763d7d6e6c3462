//! # Base58 Envelope Codec
//!
//! The transport layer of a token: a payload framed behind its checksum
//! and rendered as Base58 text.
//!
//! ```text
//! [ 4-byte checksum ][ N-byte payload ]  --Base58-->  text token
//! ```
//!
//! The alphabet is the Bitcoin one — digits and letters minus the
//! lookalikes `0`, `O`, `I`, `l` — with no padding characters and each
//! leading zero byte rendered as `'1'`. Decoding is all-or-nothing:
//! either the text parses, is long enough to hold a checksum, and the
//! stored tag matches the recomputed one, or the whole token is
//! rejected. There is nothing to salvage from a torn envelope.

use thiserror::Error;

use crate::checksum::{checksum, CHECKSUM_LEN};

/// Errors that can occur while opening an envelope.
///
/// Encoding never fails; all of these arise on the decode path. Callers
/// should treat any of them as "reject this token" — the distinction
/// exists for diagnostics, not for recovery.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The text contains a character outside the Base58 alphabet.
    #[error("invalid base58 text: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// The decoded bytes are too short to even hold a checksum.
    #[error("decoded envelope is {got} bytes, too short for a 4-byte checksum")]
    TooShort {
        /// Number of bytes the text actually decoded to.
        got: usize,
    },

    /// The stored checksum does not match the one recomputed from the
    /// payload — the token was corrupted in transit, or was never an
    /// envelope to begin with.
    #[error(
        "checksum mismatch: stored {}, computed {}",
        hex::encode(.stored),
        hex::encode(.computed)
    )]
    ChecksumMismatch {
        /// The tag carried in the envelope.
        stored: [u8; CHECKSUM_LEN],
        /// The tag recomputed over the payload.
        computed: [u8; CHECKSUM_LEN],
    },
}

/// Seal a payload into a Base58 envelope token.
///
/// Prepends the payload's 4-byte checksum and Base58-encodes the
/// concatenation. Infallible for any byte input, including empty.
pub fn encode(payload: &[u8]) -> String {
    let tag = checksum(payload);
    let mut framed = Vec::with_capacity(CHECKSUM_LEN + payload.len());
    framed.extend_from_slice(&tag);
    framed.extend_from_slice(payload);
    bs58::encode(framed).into_string()
}

/// Open a Base58 envelope token, returning the validated payload.
///
/// The round-trip law holds for every payload `p`:
/// `decode(&encode(p)).unwrap() == p`.
pub fn decode(text: &str) -> Result<Vec<u8>, EnvelopeError> {
    let raw = bs58::decode(text).into_vec()?;
    if raw.len() < CHECKSUM_LEN {
        return Err(EnvelopeError::TooShort { got: raw.len() });
    }

    let (stored, payload) = raw.split_at(CHECKSUM_LEN);
    let computed = checksum(payload);
    if stored != computed.as_slice() {
        let mut stored_tag = [0u8; CHECKSUM_LEN];
        stored_tag.copy_from_slice(stored);
        return Err(EnvelopeError::ChecksumMismatch {
            stored: stored_tag,
            computed,
        });
    }

    Ok(payload.to_vec())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_payload_is_four_ones() {
        // checksum(&[]) is all zeroes, and Base58 renders each leading
        // zero byte as '1', so the empty envelope is exactly "1111".
        assert_eq!(encode(&[]), "1111");
        assert_eq!(decode("1111").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn roundtrip_simple_payload() {
        let payload = b"hello, envelope".to_vec();
        assert_eq!(decode(&encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn roundtrip_preserves_leading_zero_bytes() {
        let payload = vec![0, 0, 0, 7, 0];
        assert_eq!(decode(&encode(&payload)).unwrap(), payload);
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for text in ["0abc", "O123", "Imposter", "lower", "abc!def", "with space"] {
            assert!(
                matches!(decode(text), Err(EnvelopeError::InvalidBase58(_))),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn rejects_envelope_shorter_than_checksum() {
        // Three zero bytes decode fine but cannot hold a 4-byte tag.
        let text = bs58::encode([0u8; 3]).into_string();
        assert!(matches!(
            decode(&text),
            Err(EnvelopeError::TooShort { got: 3 })
        ));
    }

    #[test]
    fn rejects_tampered_payload() {
        // Re-frame a tampered payload under the original tag, bypassing
        // encode() so the corruption is guaranteed rather than probable.
        let payload = b"amount: 100".to_vec();
        let mut framed = Vec::from(checksum(&payload));
        framed.extend_from_slice(&payload);
        framed[CHECKSUM_LEN] ^= 0x40;

        let err = decode(&bs58::encode(framed).into_string()).unwrap_err();
        match err {
            EnvelopeError::ChecksumMismatch { stored, computed } => {
                assert_eq!(stored, checksum(&payload));
                assert_ne!(stored, computed);
            }
            other => panic!("expected checksum mismatch, got {other}"),
        }
    }

    #[test]
    fn rejects_tampered_checksum() {
        let payload = b"memo: lunch".to_vec();
        let mut framed = Vec::from(checksum(&payload));
        framed.extend_from_slice(&payload);
        framed[0] = framed[0].wrapping_add(1);

        assert!(matches!(
            decode(&bs58::encode(framed).into_string()),
            Err(EnvelopeError::ChecksumMismatch { .. })
        ));
    }

    proptest! {
        #[test]
        fn roundtrip_any_payload(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
            let token = encode(&payload);
            prop_assert_eq!(decode(&token).unwrap(), payload);
        }
    }
}
