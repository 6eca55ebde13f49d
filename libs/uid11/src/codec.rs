//! Fixed-width base58 codec over 64-bit payloads.
//!
//! Every payload encodes to exactly [`LENGTH`] characters, most significant
//! digit first and left-padded with the zero symbol `'1'`. Because the
//! alphabet is in ascending ASCII order, comparing two identifiers as strings
//! gives the same result as comparing their payloads.

use std::ops::RangeInclusive;

use crate::Uid11Error;

/// The Bitcoin base58 alphabet. Order is significant for interoperability.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Numeric base of the codec.
pub const BASE: u64 = 58;

/// Characters in a full identifier. 58^11 is the smallest power above 2^64.
pub const LENGTH: usize = 11;

/// Encoding of `0`.
pub const MIN_U64_B58: &str = "11111111111";

/// Encoding of `u64::MAX`.
pub const MAX_U64_B58: &str = "jpXCZedGfVQ";

const SYMBOLS: &[u8] = ALPHABET.as_bytes();

/// Marks bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

static INDEX: [u8; 256] = build_index();

/// `POW58[i] == 58^i` for every power that fits in a `u64`.
const POW58: [u64; LENGTH] = build_powers();

const fn build_index() -> [u8; 256] {
    let mut index = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        index[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    index
}

const fn build_powers() -> [u64; LENGTH] {
    let mut powers = [1u64; LENGTH];
    let mut i = 1;
    while i < LENGTH {
        powers[i] = powers[i - 1] * BASE;
        i += 1;
    }
    powers
}

#[inline]
fn digit(byte: u8) -> Option<u64> {
    match INDEX[byte as usize] {
        INVALID => None,
        d => Some(u64::from(d)),
    }
}

/// Writes the 11-byte ASCII encoding of `payload` into `buf`.
pub fn encode_to(payload: u64, buf: &mut [u8; LENGTH]) {
    let mut v = payload;
    for slot in buf.iter_mut().rev() {
        *slot = SYMBOLS[(v % BASE) as usize];
        v /= BASE;
    }
}

/// Encodes a payload as an 11-character identifier.
#[must_use]
pub fn encode(payload: u64) -> String {
    let mut buf = [SYMBOLS[0]; LENGTH];
    encode_to(payload, &mut buf);
    buf.iter().map(|&b| char::from(b)).collect()
}

/// True if `s` has at most 11 characters, all from the alphabet.
///
/// Says nothing about range: `"zzzzzzzzzzz"` is a valid partial.
#[must_use]
pub fn is_valid_partial(s: &str) -> bool {
    s.len() <= LENGTH && s.bytes().all(|b| digit(b).is_some())
}

/// True if `s` has exactly 11 characters, all from the alphabet.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    s.len() == LENGTH && is_valid_partial(s)
}

/// Accumulates base58 digits, returning `None` on a foreign byte or once the
/// value would leave the `u64` range.
fn unpack(bytes: &[u8]) -> Option<u64> {
    bytes.iter().try_fold(0u64, |acc, &b| {
        acc.checked_mul(BASE)?.checked_add(digit(b)?)
    })
}

/// Decodes a full identifier.
///
/// Returns `None` for anything other than 11 alphabet characters whose value
/// fits in 64 bits.
#[must_use]
pub fn decode(s: &str) -> Option<u64> {
    if !is_valid(s) {
        return None;
    }
    unpack(s.as_bytes())
}

/// Decodes an identifier prefix as the smallest full identifier starting
/// with it, i.e. with the missing trailing characters taken as `'1'`.
///
/// The empty string decodes to `0`. Returns `None` if the prefix is not a
/// valid partial or its left-justified value exceeds `u64::MAX`.
#[must_use]
pub fn decode_partial(s: &str) -> Option<u64> {
    if !is_valid_partial(s) {
        return None;
    }
    if s.is_empty() {
        return Some(0);
    }
    unpack(s.as_bytes())?.checked_mul(POW58[LENGTH - s.len()])
}

/// The inclusive payload range covered by every identifier that starts
/// with `prefix`, clamped to `u64::MAX`.
///
/// Useful for turning a prefix search over identifier strings into a range
/// scan over stored payloads.
#[must_use]
pub fn prefix_range(prefix: &str) -> Option<RangeInclusive<u64>> {
    let lower = decode_partial(prefix)?;
    if prefix.is_empty() {
        return Some(0..=u64::MAX);
    }
    let span = POW58[LENGTH - prefix.len()];
    Some(lower..=lower.saturating_add(span - 1))
}

/// Strict decode reporting why the input was rejected.
pub(crate) fn parse(s: &str) -> Result<u64, Uid11Error> {
    if s.is_empty() {
        return Err(Uid11Error::Empty);
    }
    if let Some((position, character)) = s
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii() || digit(c as u8).is_none())
    {
        return Err(Uid11Error::InvalidCharacter {
            character,
            position,
        });
    }
    if s.len() != LENGTH {
        return Err(Uid11Error::InvalidLength {
            expected: LENGTH,
            actual: s.len(),
        });
    }
    unpack(s.as_bytes()).ok_or(Uid11Error::Overflow)
}
