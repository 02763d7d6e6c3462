//! End-to-end tests over real token material.
//!
//! The reference vector below is production token data for this format:
//! a published address token, and the exact payment request token a
//! conforming encoder must produce from it for a fixed amount and memo.
//! Reproducing it byte-for-byte pins down every layer at once — the
//! CRC-32 tag (including its fixed 4-byte width), the Base58 framing,
//! the protobuf field layout, and the verbatim carry of the address
//! record.

use chit::envelope;
use chit::printable::Amount;
use chit::request::{
    build_payment_request_token, parse_address_token, parse_payment_request_token,
};

// ---------------------------------------------------------------------------
// Reference vector
// ---------------------------------------------------------------------------

/// A published recipient address token.
const ADDRESS_TOKEN: &str = "sHYSrc4kc4m3NUo9f99UkAendEz9cKx22kTL5divPiqzpGhmfJq8Hhj2QgEW6wBfD3PPTHFGNKFFRum2CGYepmWJZyFRtJdt6uQs7XrtBBAf3N61AyDwAwHvr8Vj7YNVYY5NsKg1vbUbMoX74qzFQfa9hQuBccRYC8Hos1JYe6AzaipGVL5TKU6t8qPLTnTzGFvwrQthF5LVQnTHvEBLZnSazRbiKvmw9irVfEZf8DNnZUQzFkP";

/// The payment request token a conforming encoder must emit for
/// `ADDRESS_TOKEN` with amount `99999900000000` and memo `test invoice`.
const EXPECTED_REQUEST_TOKEN: &str = "BM2dvA9xZPP63fkfGpcttmuoZtgqXKpSmzQ9c2vj3S2d8k84YXKipt3WpaAhdkmUXFFNQp1ydh18FmYuqUf5q41ED7VAdPJfH6J1qfx4ni6HvCJJDSDQvCYjHP3mohUGDp92Ye7oKS1DxJkfRdMouMQqgkFkMbEgYYQ3sx35ogviEWSXRz4yBtzVacvgQ4L2fGwjtP4Aq2WBjHd8MxMhPnBgCBbncjhzFrkQnxV8tsXeoYgyaEyA5XwdnpKyffsannAjZ5g172PAcYk75pvdr";

const AMOUNT: &str = "99999900000000";
const MEMO: &str = "test invoice";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn reference_vector_reproduced_exactly() {
    let address = parse_address_token(ADDRESS_TOKEN).expect("reference address token is valid");
    let amount: Amount = AMOUNT.parse().expect("reference amount parses");

    let token = build_payment_request_token(&address, amount, MEMO).expect("build succeeds");
    assert_eq!(token, EXPECTED_REQUEST_TOKEN);
}

#[test]
fn reference_request_token_parses_back() {
    let request =
        parse_payment_request_token(EXPECTED_REQUEST_TOKEN).expect("reference token is valid");

    let address = parse_address_token(ADDRESS_TOKEN).unwrap();
    assert_eq!(request.address, address);
    assert_eq!(request.amount, Amount::from_base_units(99_999_900_000_000));
    assert_eq!(request.memo, MEMO);
}

#[test]
fn address_parse_is_idempotent_on_real_material() {
    let first = parse_address_token(ADDRESS_TOKEN).unwrap();
    let second = parse_address_token(ADDRESS_TOKEN).unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupting_any_checksum_character_is_rejected() {
    // The first characters of the token encode the high digits of the
    // checksum-prefixed big number; swapping any single character for a
    // different alphabet symbol must fail validation.
    let replacement = |c: char| if c == '2' { '3' } else { '2' };
    for i in 0..6 {
        let mut chars: Vec<char> = ADDRESS_TOKEN.chars().collect();
        chars[i] = replacement(chars[i]);
        let tampered: String = chars.into_iter().collect();
        assert!(
            parse_address_token(&tampered).is_err(),
            "tampered position {i} accepted"
        );
    }
}

#[test]
fn envelope_payload_of_reference_token_roundtrips() {
    let payload = envelope::decode(ADDRESS_TOKEN).unwrap();
    assert_eq!(envelope::encode(&payload), ADDRESS_TOKEN);
}
