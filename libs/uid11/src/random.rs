//! Randomness drawn from the operating system entropy source.
//!
//! No userspace generator sits in this path. A failing source surfaces as
//! [`Uid11Error::EntropyUnavailable`].

use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::warn;

use crate::{encode, Uid11Error};

/// Widest draw supported by [`random_bits`].
pub const MAX_RANDOM_BITS: u32 = u64::BITS;

/// Returns a value with `bits` significant random bits, `0 <= bits <= 64`.
///
/// Reads `ceil(bits / 8)` bytes from the OS, assembles them big-endian and
/// masks off the excess when `bits` is not a multiple of 8.
pub fn random_bits(bits: u32) -> Result<u64, Uid11Error> {
    if bits > MAX_RANDOM_BITS {
        return Err(Uid11Error::InvalidBitWidth { bits });
    }

    let len = bits.div_ceil(8) as usize;
    let mut buf = [0u8; 8];
    if len > 0 {
        OsRng.try_fill_bytes(&mut buf[..len]).map_err(|err| {
            warn!(error = %err, bits, "os entropy source failed");
            Uid11Error::EntropyUnavailable(err.to_string())
        })?;
    }

    let value = buf[..len]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    Ok(value & mask(bits))
}

/// 64 random bits.
pub fn random() -> Result<u64, Uid11Error> {
    random_bits(MAX_RANDOM_BITS)
}

/// A random payload, encoded.
pub fn random_string() -> Result<String, Uid11Error> {
    random().map(encode)
}

/// Low-`bits` mask; saturates at 64.
pub(crate) const fn mask(bits: u32) -> u64 {
    match bits {
        0 => 0,
        b if b >= u64::BITS => u64::MAX,
        b => (1u64 << b) - 1,
    }
}
