//! # Payment Request Builder
//!
//! The operations a wallet actually calls, composing the envelope and
//! payload codecs:
//!
//! 1. [`parse_address_token`] — counterparty's address token in, their
//!    address record out.
//! 2. [`build_payment_request_token`] — address + amount + memo in, a
//!    fresh request token out, ready for a chat message or a QR code.
//! 3. [`parse_payment_request_token`] — the receiving side of (2).
//!
//! Errors from both layers propagate unchanged. Every failure means
//! "reject this token"; the variants exist so logs can tell corruption
//! apart from a wrong schema revision, not because any of them is
//! recoverable.

use thiserror::Error;
use tracing::debug;

use crate::envelope::{self, EnvelopeError};
use crate::printable::{self, Amount, PaymentRequest, PrintableError, PublicAddress};

/// Errors from the builder-level token operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The token failed Base58 decoding or checksum validation.
    #[error("invalid token envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The checksummed payload is not the expected printable record.
    #[error("invalid token payload: {0}")]
    Payload(#[from] PrintableError),
}

/// Recover the address record from an address token.
///
/// Idempotent: parsing the same token twice yields the same address.
pub fn parse_address_token(token: &str) -> Result<PublicAddress, RequestError> {
    let payload = envelope::decode(token)?;
    let address = printable::decode_address(&payload)?;
    debug!(
        token_len = token.len(),
        address_len = address.as_bytes().len(),
        "parsed address token"
    );
    Ok(address)
}

/// Build a payment request token around an address record.
///
/// Deterministic: the same address, amount, and memo always produce the
/// same token text.
pub fn build_payment_request_token(
    address: &PublicAddress,
    amount: Amount,
    memo: &str,
) -> Result<String, RequestError> {
    let payload = printable::encode_payment_request(address, amount, memo)?;
    let token = envelope::encode(&payload);
    debug!(
        payload_len = payload.len(),
        token_len = token.len(),
        %amount,
        "built payment request token"
    );
    Ok(token)
}

/// Unpack a payment request token into its address, amount, and memo.
pub fn parse_payment_request_token(token: &str) -> Result<PaymentRequest, RequestError> {
    let payload = envelope::decode(token)?;
    let request = printable::decode_payment_request(&payload)?;
    debug!(
        token_len = token.len(),
        amount = %request.amount,
        memo_len = request.memo.len(),
        "parsed payment request token"
    );
    Ok(request)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
