//! Error types for identifier construction and parsing.

use thiserror::Error;

/// Errors produced by the construction side of the crate.
///
/// Validation functions such as [`crate::decode`] never return these; they
/// signal bad input through `Option` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Uid11Error {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier does not have exactly 11 characters.
    #[error("identifier must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside the base58 alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The identifier is alphabet-valid but exceeds 2^64 - 1.
    #[error("identifier does not fit in 64 bits")]
    Overflow,

    /// An integer outside [0, 2^64 - 1].
    #[error("value {value} is outside [0, 2^64-1]")]
    OutOfRange { value: i128 },

    /// A timestamp earlier than the xid epoch.
    #[error("timestamp {time_ms} ms is before the xid epoch {epoch_ms} ms")]
    BeforeEpoch { time_ms: u64, epoch_ms: u64 },

    /// More than 64 random bits were requested.
    #[error("cannot draw {bits} random bits, at most 64")]
    InvalidBitWidth { bits: u32 },

    /// The operating system entropy source failed.
    #[error("secure entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A sequence generator has issued its final payload.
    #[error("xid sequence exhausted")]
    SequenceExhausted,
}

impl Uid11Error {
    /// Returns true if this error came from parsing an identifier string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Uid11Error::Empty
                | Uid11Error::InvalidLength { .. }
                | Uid11Error::InvalidCharacter { .. }
                | Uid11Error::Overflow
        )
    }

    /// Returns true if the entropy source failed.
    pub fn is_entropy_error(&self) -> bool {
        matches!(self, Uid11Error::EntropyUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_classification() {
        assert!(Uid11Error::Empty.is_parse_error());
        assert!(Uid11Error::Overflow.is_parse_error());
        assert!(Uid11Error::InvalidCharacter {
            character: '0',
            position: 3
        }
        .is_parse_error());
        assert!(!Uid11Error::SequenceExhausted.is_parse_error());
        assert!(!Uid11Error::OutOfRange { value: -1 }.is_parse_error());
    }

    #[test]
    fn test_entropy_error_classification() {
        assert!(Uid11Error::EntropyUnavailable("no device".into()).is_entropy_error());
        assert!(!Uid11Error::Overflow.is_entropy_error());
    }

    #[test]
    fn test_display_messages() {
        let err = Uid11Error::InvalidCharacter {
            character: 'O',
            position: 4,
        };
        assert_eq!(err.to_string(), "invalid character 'O' at position 4");

        let err = Uid11Error::InvalidLength {
            expected: 11,
            actual: 3,
        };
        assert_eq!(err.to_string(), "identifier must be 11 characters, got 3");
    }
}
