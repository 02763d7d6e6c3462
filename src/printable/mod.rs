//! # Structured Payload Codec
//!
//! The record living inside every envelope is a `printable` wrapper: a
//! tagged union whose active variant is either a **public address** or a
//! **payment request** (address + amount + memo). This module owns the
//! record-level operations and the domain types; the raw protobuf
//! message impls live in [`wire`].
//!
//! Two choices here carry most of the weight:
//!
//! - The address record is opaque bytes end-to-end. This codec never
//!   looks inside it, never re-encodes it, and therefore cannot mangle
//!   it. Whatever address schema the wallet on the other side speaks,
//!   the bytes come back out exactly as they went in.
//! - Amounts are exact. The wire field is `uint64`, [`Amount`] is a
//!   `u64` of base units, and string numerals are parsed with integer
//!   semantics or rejected. No floats, no rounding, anywhere.

pub mod wire;

use std::fmt;
use std::str::FromStr;

use quick_protobuf::{BytesReader, MessageRead, MessageWrite, Writer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::wire::OneOfWrapper;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding a printable record.
#[derive(Debug, Error)]
pub enum PrintableError {
    /// The bytes are not a well-formed protobuf record.
    #[error("malformed printable record: {0}")]
    Wire(#[from] quick_protobuf::Error),

    /// The record parsed, but no variant known to this schema is
    /// populated — likely a newer schema revision.
    #[error("printable record carries no recognized variant")]
    EmptyWrapper,

    /// The record holds a different variant than the operation expects.
    #[error("expected a {expected} record, found a {found} record")]
    WrongVariant {
        /// Variant the caller asked for.
        expected: &'static str,
        /// Variant actually present.
        found: &'static str,
    },
}

/// A string that does not parse as an exact base-unit amount.
#[derive(Debug, Error)]
#[error("invalid amount {numeral:?}: {source}")]
pub struct AmountError {
    numeral: String,
    source: std::num::ParseIntError,
}

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// An encoded public address record, carried opaquely.
///
/// The interior encoding belongs to the address schema, not to this
/// crate; equality and round-tripping are byte-for-byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicAddress(Vec<u8>);

impl PublicAddress {
    /// Wrap raw encoded address bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw encoded address record.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the wrapper, yielding the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for PublicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The interior is opaque; print a fingerprint, not 300 bytes.
        write!(f, "PublicAddress({} bytes)", self.0.len())
    }
}

impl Serialize for PublicAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(&self.0))
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for PublicAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
            Ok(Self(bytes))
        } else {
            Ok(Self(<Vec<u8>>::deserialize(deserializer)?))
        }
    }
}

/// A payment amount in base units.
///
/// Construct from an integer via [`from_base_units`](Self::from_base_units)
/// or parse a plain decimal numeral via [`FromStr`]. Parsing is exact:
/// a numeral that does not fit a `u64` is an error, never a rounded
/// approximation. Serialized as a decimal string in human-readable
/// formats (JSON and friends parse 2^53-sized integers badly) and as a
/// plain `u64` in binary ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// An amount from a count of base units.
    pub const fn from_base_units(units: u64) -> Self {
        Self(units)
    }

    /// The amount as a count of base units.
    pub const fn base_units(self) -> u64 {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = s.parse::<u64>().map_err(|source| AmountError {
            numeral: s.to_owned(),
            source,
        })?;
        Ok(Self(units))
    }
}

impl TryFrom<&str> for Amount {
    type Error = AmountError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(&self.0)
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Ok(Self(u64::deserialize(deserializer)?))
        }
    }
}

/// A decoded payment request: who to pay, how much, and what for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// The recipient's encoded address record.
    pub address: PublicAddress,
    /// Payment amount in base units.
    pub amount: Amount,
    /// Free-text memo, possibly empty.
    pub memo: String,
}

// ---------------------------------------------------------------------------
// Record operations
// ---------------------------------------------------------------------------

/// Decode a printable record and extract its public address.
///
/// Fails if the bytes are not a well-formed record, or if the populated
/// variant is anything other than `public_address`.
pub fn decode_address(bytes: &[u8]) -> Result<PublicAddress, PrintableError> {
    match read_wrapper(bytes)?.wrapper {
        OneOfWrapper::PublicAddress(raw) => Ok(PublicAddress::from_bytes(raw)),
        OneOfWrapper::PaymentRequest(_) => Err(PrintableError::WrongVariant {
            expected: "public address",
            found: "payment request",
        }),
        OneOfWrapper::None => Err(PrintableError::EmptyWrapper),
    }
}

/// Decode a printable record and extract its payment request.
///
/// The dual of [`encode_payment_request`] — what a receiving wallet
/// calls to display an incoming request.
pub fn decode_payment_request(bytes: &[u8]) -> Result<PaymentRequest, PrintableError> {
    match read_wrapper(bytes)?.wrapper {
        OneOfWrapper::PaymentRequest(m) => Ok(PaymentRequest {
            address: PublicAddress::from_bytes(m.public_address),
            amount: Amount::from_base_units(m.value),
            memo: m.memo,
        }),
        OneOfWrapper::PublicAddress(_) => Err(PrintableError::WrongVariant {
            expected: "payment request",
            found: "public address",
        }),
        OneOfWrapper::None => Err(PrintableError::EmptyWrapper),
    }
}

/// Serialize a payment request record around an existing address.
///
/// The address bytes are embedded verbatim. Cannot fail for well-formed
/// inputs; the `Result` only surfaces writer errors, which an in-memory
/// buffer does not produce.
pub fn encode_payment_request(
    address: &PublicAddress,
    amount: Amount,
    memo: &str,
) -> Result<Vec<u8>, PrintableError> {
    let record = wire::PrintableWrapper {
        wrapper: OneOfWrapper::PaymentRequest(wire::PaymentRequest {
            public_address: address.as_bytes().to_vec(),
            value: amount.base_units(),
            memo: memo.to_owned(),
        }),
    };
    write_to_vec(&record)
}

fn write_to_vec<M: MessageWrite>(msg: &M) -> Result<Vec<u8>, PrintableError> {
    let mut out = Vec::with_capacity(msg.get_size());
    let mut writer = Writer::new(&mut out);
    msg.write_message(&mut writer)?;
    Ok(out)
}

fn read_wrapper(bytes: &[u8]) -> Result<wire::PrintableWrapper, PrintableError> {
    let mut reader = BytesReader::from_bytes(bytes);
    Ok(wire::PrintableWrapper::from_reader(&mut reader, bytes)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
