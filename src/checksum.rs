//! # Envelope Checksum
//!
//! Every token frames its payload behind a 4-byte integrity tag: the
//! CRC-32 (ISO-HDLC, the plain IEEE polynomial) of the payload, stored
//! in little-endian byte order.
//!
//! The little-endian presentation is a format quirk worth spelling out.
//! Early encoders of this token family rendered the CRC as a hex string,
//! converted digit pairs back to bytes, and reversed them. Skipping the
//! zero-pad to eight hex digits in that dance silently shortens the tag
//! whenever the CRC value is below `0x10000000` — roughly one payload in
//! sixteen. Taking the integer's little-endian bytes directly is the
//! same presentation with that failure made unrepresentable: the tag is
//! 4 bytes by type, for every input, including the empty one.

use crc::{Crc, CRC_32_ISO_HDLC};

/// Width of the envelope integrity tag, in bytes.
pub const CHECKSUM_LEN: usize = 4;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Compute the 4-byte integrity tag for a payload.
///
/// Pure and deterministic: identical bytes in, identical tag out.
/// Accepts the empty payload (its tag is all zeroes, since the CRC-32
/// of no input is 0).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    CRC32.checksum(payload).to_le_bytes()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
