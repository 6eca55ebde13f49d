//! Time+random identifiers.
//!
//! Layout of a packed payload:
//!
//! ```text
//!  63                                20 19                 0
//! +------------------------------------+--------------------+
//! |  44 bits: ms since EPOCH_MS        |  20 bits: random   |
//! +------------------------------------+--------------------+
//! ```
//!
//! 44 bits of milliseconds last until 2569-05-02T17:31:55.526Z, after which
//! the time field wraps. Wrapping is accepted so that packing stays total.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::random::{mask, random_bits};
use crate::{encode, Uid11Error};

/// Bits of the payload holding milliseconds since [`EPOCH_MS`].
pub const TIME_BITS: u32 = 44;

/// Bits of the payload holding randomness.
pub const RANDOM_BITS: u32 = u64::BITS - TIME_BITS;

/// Reference point of the time field: 2011-11-11T11:11:11.111Z.
pub const EPOCH_MS: u64 = 1_321_009_871_111;

/// Range-checks a caller-supplied integer into a payload.
pub fn to_u64(value: i128) -> Result<u64, Uid11Error> {
    u64::try_from(value).map_err(|_| Uid11Error::OutOfRange { value })
}

/// Packs an absolute Unix time in milliseconds with the low 20 bits of
/// `random`.
///
/// Times before [`EPOCH_MS`] cannot be represented and fail with
/// [`Uid11Error::BeforeEpoch`]. Times at or beyond 2^44 ms past the epoch
/// wrap.
pub fn pack(time_ms: u64, random: u64) -> Result<u64, Uid11Error> {
    let since_epoch = time_ms
        .checked_sub(EPOCH_MS)
        .ok_or(Uid11Error::BeforeEpoch {
            time_ms,
            epoch_ms: EPOCH_MS,
        })?;

    // bits shifted past 63 drop out, wrapping the time field
    Ok((since_epoch << RANDOM_BITS) | (random & mask(RANDOM_BITS)))
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_unix_ms() -> Result<u64, Uid11Error> {
    to_u64(i128::from(Utc::now().timestamp_millis()))
}

/// A fresh time+random payload for the current millisecond.
pub fn xid() -> Result<u64, Uid11Error> {
    pack(now_unix_ms()?, random_bits(RANDOM_BITS)?)
}

/// A fresh time+random identifier string.
pub fn xid_string() -> Result<String, Uid11Error> {
    xid().map(encode)
}

/// Milliseconds since the Unix epoch encoded in the high 44 bits of
/// `payload`.
#[must_use]
pub fn unix_ms(payload: u64) -> u64 {
    (payload >> RANDOM_BITS) + EPOCH_MS
}

/// The point in time encoded in `payload`.
///
/// Any payload is accepted; nothing checks that it came from [`pack`].
#[must_use]
pub fn timepoint(payload: u64) -> DateTime<Utc> {
    // at most 2^44 + EPOCH_MS, far inside chrono's range
    DateTime::from_timestamp_millis(unix_ms(payload) as i64).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// [`timepoint`] as ISO-8601 UTC with milliseconds, e.g.
/// `2011-11-11T11:11:11.111Z`.
#[must_use]
pub fn timestamp(payload: u64) -> String {
    timepoint(payload).to_rfc3339_opts(SecondsFormat::Millis, true)
}
