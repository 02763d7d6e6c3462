// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CHIT — Checksummed Payment Request Tokens
//!
//! A *chit* is a small note acknowledging a debt or requesting payment.
//! This crate builds exactly that: a single opaque string a wallet can
//! paste into a chat, print on a receipt, or pack into a QR code, which
//! any other wallet can validate and unpack without ever touching the
//! network.
//!
//! Every token is a Base58Check-style envelope:
//!
//! ```text
//! payload bytes
//!     -> CRC-32(payload) -> 4-byte tag
//!     -> tag || payload
//!     -> Base58 -> "BM2dvA9xZPP63fkf..."
//! ```
//!
//! Inside the envelope sits a `printable` record — a tagged wrapper whose
//! active variant is either a public address or a full payment request
//! (address, amount, memo). The interesting flow for a wallet:
//!
//! 1. Parse the counterparty's address token back to its address record.
//! 2. Attach an amount and a memo.
//! 3. Emit a fresh payment request token for transmission.
//!
//! ## Architecture
//!
//! The modules mirror the layers of the format, leaves first:
//!
//! - **checksum** — the 4-byte CRC-32 integrity tag. Ten lines that have
//!   historically been worth a hundred lines of debugging.
//! - **envelope** — the Base58 framing: tag-then-payload, all-or-nothing
//!   validation on the way back in.
//! - **printable** — the structured payload codec and its wire format.
//! - **request** — the builder-level operations wallets actually call.
//!
//! ## Design Philosophy
//!
//! 1. Pure functions only. No hidden I/O, no caches, no locks — every
//!    operation is safe to call from as many threads as you like.
//! 2. A token is valid or it is garbage. No partial decodes, no repair.
//! 3. Amounts are exact. If a numeral cannot be represented without
//!    loss, encoding refuses; nothing here ever rounds money.

pub mod checksum;
pub mod envelope;
pub mod printable;
pub mod request;
