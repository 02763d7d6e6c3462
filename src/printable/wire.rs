//! Wire definitions for the `printable` record schema.
//!
//! These are hand-maintained `quick-protobuf` message impls in the shape
//! pb-rs would generate, kept in-tree because the schema is two messages
//! and a oneof — small enough that codegen would cost more than it buys.
//!
//! ```text
//! message PaymentRequest {
//!     bytes  public_address = 1;   // opaque encoded address record
//!     uint64 value          = 2;
//!     string memo           = 3;
//! }
//! message PrintableWrapper {
//!     oneof wrapper {
//!         bytes          public_address  = 1;
//!         PaymentRequest payment_request = 2;
//!     }
//! }
//! ```
//!
//! The address record is deliberately typed `bytes` rather than a nested
//! message: the codec carries it opaquely and never re-encodes its
//! interior, which keeps the address schema out of this crate entirely
//! and makes byte-for-byte reproduction of the field trivial. On the
//! wire the two typings are indistinguishable (both length-delimited).
//!
//! Proto3 semantics apply: zero/empty fields are omitted on write, and
//! unknown fields are skipped on read.

use quick_protobuf::sizeofs::*;
use quick_protobuf::{BytesReader, MessageRead, MessageWrite, Result, Writer, WriterBackend};

/// `printable.PaymentRequest` — address, amount, memo.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Field 1: the recipient's encoded address record, carried opaquely.
    pub public_address: Vec<u8>,
    /// Field 2: payment amount in base units.
    pub value: u64,
    /// Field 3: free-text memo.
    pub memo: String,
}

impl MessageWrite for PaymentRequest {
    fn get_size(&self) -> usize {
        let mut size = 0;
        if !self.public_address.is_empty() {
            size += 1 + sizeof_len(self.public_address.len());
        }
        if self.value != 0 {
            size += 1 + sizeof_varint(self.value);
        }
        if !self.memo.is_empty() {
            size += 1 + sizeof_len(self.memo.len());
        }
        size
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if !self.public_address.is_empty() {
            w.write_with_tag(10, |w| w.write_bytes(&self.public_address))?;
        }
        if self.value != 0 {
            w.write_with_tag(16, |w| w.write_uint64(self.value))?;
        }
        if !self.memo.is_empty() {
            w.write_with_tag(26, |w| w.write_string(&self.memo))?;
        }
        Ok(())
    }
}

impl<'a> MessageRead<'a> for PaymentRequest {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(10) => msg.public_address = r.read_bytes(bytes)?.to_vec(),
                Ok(16) => msg.value = r.read_uint64(bytes)?,
                Ok(26) => msg.memo = r.read_string(bytes)?.to_owned(),
                Ok(t) => {
                    r.read_unknown(bytes, t)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

/// `printable.PrintableWrapper` — the outermost record inside every
/// envelope payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrintableWrapper {
    /// The `wrapper` oneof; exactly one variant is populated in a valid
    /// record.
    pub wrapper: OneOfWrapper,
}

/// Alternatives of the `wrapper` oneof.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OneOfWrapper {
    /// Field 1: an encoded public address record, carried opaquely.
    PublicAddress(Vec<u8>),
    /// Field 2: a full payment request.
    PaymentRequest(PaymentRequest),
    /// No variant known to this schema is populated.
    #[default]
    None,
}

impl MessageWrite for PrintableWrapper {
    fn get_size(&self) -> usize {
        match self.wrapper {
            OneOfWrapper::PublicAddress(ref raw) => 1 + sizeof_len(raw.len()),
            OneOfWrapper::PaymentRequest(ref m) => 1 + sizeof_len(m.get_size()),
            OneOfWrapper::None => 0,
        }
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        match self.wrapper {
            OneOfWrapper::PublicAddress(ref raw) => {
                w.write_with_tag(10, |w| w.write_bytes(raw))?;
            }
            OneOfWrapper::PaymentRequest(ref m) => {
                w.write_with_tag(18, |w| w.write_message(m))?;
            }
            OneOfWrapper::None => {}
        }
        Ok(())
    }
}

impl<'a> MessageRead<'a> for PrintableWrapper {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(10) => {
                    msg.wrapper = OneOfWrapper::PublicAddress(r.read_bytes(bytes)?.to_vec());
                }
                Ok(18) => {
                    msg.wrapper =
                        OneOfWrapper::PaymentRequest(r.read_message::<PaymentRequest>(bytes)?);
                }
                Ok(t) => {
                    r.read_unknown(bytes, t)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
