//! # uid11
//!
//! Short, sortable identifiers over 64-bit payloads.
//!
//! ## Design Principles
//!
//! - Every payload has exactly one 11-character form and every identifier
//!   string in range has exactly one payload
//! - String order equals numeric order, so identifiers work as sort keys
//! - Parsing untrusted strings never panics; validation returns `Option`
//! - Randomness comes only from the operating system entropy source
//!
//! ## ID Format
//!
//! Payloads are written in base58 with the Bitcoin alphabet, fixed at 11
//! characters and left-padded with `1`:
//!
//! - `11111111111` is `0`
//! - `jpXCZedGfVQ` is `2^64 - 1`
//!
//! Generated identifiers ([`xid`]) pack 44 bits of milliseconds since
//! 2011-11-11T11:11:11.111Z above 20 random bits, so they sort by creation
//! time to the millisecond:
//!
//! ```
//! let id = uid11::xid_string()?;
//! assert!(uid11::is_valid(&id));
//!
//! let payload = uid11::decode(&id).unwrap();
//! println!("{id} was created at {}", uid11::timestamp(payload));
//! # Ok::<(), uid11::Uid11Error>(())
//! ```
//!
//! Prefixes of identifiers decode to the smallest payload sharing that
//! prefix, which turns prefix search into a range scan:
//!
//! ```
//! assert_eq!(uid11::decode_partial(""), Some(0));
//! assert_eq!(uid11::encode(uid11::decode_partial("24H").unwrap()), "24H11111111");
//! ```

mod codec;
mod error;
mod macros;
mod random;
mod sequence;
mod types;
mod xid;

pub use codec::{
    decode, decode_partial, encode, encode_to, is_valid, is_valid_partial, prefix_range, ALPHABET,
    BASE, LENGTH, MAX_U64_B58, MIN_U64_B58,
};
pub use error::Uid11Error;
pub use random::{random, random_bits, random_string, MAX_RANDOM_BITS};
pub use sequence::XidSequence;
pub use types::Uid11;
pub use xid::{
    now_unix_ms, pack, timepoint, timestamp, to_u64, unix_ms, xid, xid_string, EPOCH_MS,
    RANDOM_BITS, TIME_BITS,
};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
