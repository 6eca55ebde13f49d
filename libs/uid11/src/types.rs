//! The `Uid11` value type.

use chrono::{DateTime, Utc};

use crate::{codec, random, xid, Uid11Error};

/// A 64-bit payload with an 11-character base58 representation.
///
/// Ordering follows the payload, which is the same as ordering the encoded
/// strings. Identifiers made by [`Uid11::new`] therefore sort by creation
/// time to the millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid11(u64);

impl Uid11 {
    /// The identifier with payload `0` (`11111111111`).
    pub const MIN: Self = Self(0);

    /// The identifier with payload `u64::MAX` (`jpXCZedGfVQ`).
    pub const MAX: Self = Self(u64::MAX);

    /// A fresh time+random identifier.
    pub fn new() -> Result<Self, Uid11Error> {
        xid::xid().map(Self)
    }

    /// An identifier with 64 random bits and no time component.
    pub fn random() -> Result<Self, Uid11Error> {
        random::random().map(Self)
    }

    /// Wraps a raw payload.
    #[must_use]
    pub const fn from_u64(payload: u64) -> Self {
        Self(payload)
    }

    /// Returns the raw payload.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parses an 11-character identifier.
    pub fn parse(s: &str) -> Result<Self, Uid11Error> {
        codec::parse(s).map(Self)
    }

    /// Creation time, assuming the payload was packed.
    #[must_use]
    pub fn timepoint(&self) -> DateTime<Utc> {
        xid::timepoint(self.0)
    }

    /// Creation time as ISO-8601 UTC with milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> String {
        xid::timestamp(self.0)
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        xid::unix_ms(self.0)
    }

    /// Writes the encoding into a stack buffer.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; codec::LENGTH] {
        let mut buf = [0u8; codec::LENGTH];
        codec::encode_to(self.0, &mut buf);
        buf
    }
}

impl std::fmt::Display for Uid11 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buf = self.to_bytes();
        // the alphabet is ASCII
        let s = std::str::from_utf8(&buf).map_err(|_| std::fmt::Error)?;
        f.pad(s)
    }
}

impl std::str::FromStr for Uid11 {
    type Err = Uid11Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Uid11 {
    fn from(payload: u64) -> Self {
        Self(payload)
    }
}

impl From<Uid11> for u64 {
    fn from(id: Uid11) -> Self {
        id.0
    }
}

impl TryFrom<&str> for Uid11 {
    type Error = Uid11Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for Uid11 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Uid11 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
