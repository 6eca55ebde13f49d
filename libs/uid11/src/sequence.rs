//! Monotonic time+sequence payloads.
//!
//! Same layout as [`crate::pack`], but the low 20 bits count up within a
//! millisecond instead of being random. Issuing more than 2^20 payloads in
//! one millisecond borrows from the next one, so the output is strictly
//! increasing for the lifetime of the generator.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::xid::{now_unix_ms, pack, RANDOM_BITS};
use crate::Uid11Error;

/// Lock-free generator of strictly increasing packed payloads.
///
/// A single generator can be shared between threads (for example in a
/// `static`). Separate generators are not ordered relative to each other.
/// The last payload a generator will issue is `u64::MAX - 1`.
#[derive(Debug, Default)]
pub struct XidSequence {
    /// Smallest payload the next call may return.
    floor: AtomicU64,
}

impl XidSequence {
    /// Creates a generator with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            floor: AtomicU64::new(0),
        }
    }

    /// Next payload at the current wall-clock time.
    pub fn next(&self) -> Result<u64, Uid11Error> {
        self.next_at(now_unix_ms()?)
    }

    /// Next payload as if the clock read `now_ms`.
    ///
    /// A clock that steps backwards does not break ordering; payloads keep
    /// counting up from the last one issued.
    pub fn next_at(&self, now_ms: u64) -> Result<u64, Uid11Error> {
        let start = pack(now_ms, 0)?;

        let mut floor = self.floor.load(Ordering::Acquire);
        loop {
            let candidate = start.max(floor);
            if candidate == u64::MAX {
                return Err(Uid11Error::SequenceExhausted);
            }

            match self.floor.compare_exchange_weak(
                floor,
                candidate + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    if candidate >> RANDOM_BITS != start >> RANDOM_BITS {
                        debug!(now_ms, payload = candidate, "xid sequence ahead of clock");
                    }
                    return Ok(candidate);
                }
                Err(actual) => floor = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::xid::{unix_ms, EPOCH_MS};

    const T: u64 = 1_700_000_000_000;

    #[test]
    fn test_sequence_counts_within_millisecond() {
        let seq = XidSequence::new();
        let base = pack(T, 0).unwrap();
        assert_eq!(seq.next_at(T).unwrap(), base);
        assert_eq!(seq.next_at(T).unwrap(), base + 1);
        assert_eq!(seq.next_at(T).unwrap(), base + 2);
    }

    #[test]
    fn test_sequence_resets_on_new_millisecond() {
        let seq = XidSequence::new();
        seq.next_at(T).unwrap();
        seq.next_at(T).unwrap();
        assert_eq!(seq.next_at(T + 1).unwrap(), pack(T + 1, 0).unwrap());
    }

    #[test]
    fn test_sequence_survives_clock_step_back() {
        let seq = XidSequence::new();
        let a = seq.next_at(T + 10).unwrap();
        let b = seq.next_at(T).unwrap();
        assert_eq!(b, a + 1);
        assert_eq!(unix_ms(b), T + 10);
    }

    #[test]
    fn test_sequence_overflow_borrows_next_millisecond() {
        let seq = XidSequence::new();
        let per_ms = 1u64 << RANDOM_BITS;
        let mut last = 0;
        for _ in 0..per_ms {
            last = seq.next_at(T).unwrap();
        }
        assert_eq!(unix_ms(last), T);
        let spilled = seq.next_at(T).unwrap();
        assert_eq!(spilled, pack(T + 1, 0).unwrap());
        assert_eq!(seq.next_at(T + 1).unwrap(), spilled + 1);
    }

    #[test]
    fn test_sequence_before_epoch() {
        let seq = XidSequence::new();
        assert!(matches!(
            seq.next_at(EPOCH_MS - 1),
            Err(Uid11Error::BeforeEpoch { .. })
        ));
    }

    #[test]
    fn test_sequence_exhaustion() {
        let seq = XidSequence {
            floor: AtomicU64::new(u64::MAX - 1),
        };
        assert_eq!(seq.next_at(T).unwrap(), u64::MAX - 1);
        assert_eq!(seq.next_at(T), Err(Uid11Error::SequenceExhausted));
        assert_eq!(seq.next_at(T), Err(Uid11Error::SequenceExhausted));
    }

    #[test]
    fn test_sequence_wall_clock_monotonic() {
        let seq = XidSequence::new();
        let mut prev = seq.next().unwrap();
        for _ in 0..1000 {
            let next = seq.next().unwrap();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_sequence_shared_between_threads() {
        let seq = Arc::new(XidSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || {
                    (0..500).map(|_| seq.next_at(T).unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            let values = handle.join().unwrap();
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            all.extend(values);
        }
        assert_eq!(all.len(), 2000);
    }
}
