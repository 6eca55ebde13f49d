//! Macros for defining typed identifiers.

/// Defines a newtype over [`Uid11`](crate::Uid11) for one kind of resource.
///
/// The generated type has the same wire format as `Uid11` (11 base58
/// characters, no prefix) but is a distinct type, so a `TraceId` cannot be
/// passed where a `SpanId` is expected. It gets:
/// - `new()` / `random()` to generate a fresh ID
/// - `parse()` plus `Display` and `FromStr`
/// - `Serialize` and `Deserialize` as the encoded string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```
/// uid11::define_uid!(TraceId);
///
/// let id = TraceId::new().unwrap();
/// let parsed: TraceId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[macro_export]
macro_rules! define_uid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uid11);

        impl $name {
            /// Creates a new time+random ID.
            pub fn new() -> Result<Self, $crate::Uid11Error> {
                $crate::Uid11::new().map(Self)
            }

            /// Creates a fully random ID.
            pub fn random() -> Result<Self, $crate::Uid11Error> {
                $crate::Uid11::random().map(Self)
            }

            /// Wraps an existing identifier.
            #[must_use]
            pub const fn from_uid(uid: $crate::Uid11) -> Self {
                Self(uid)
            }

            /// Returns the underlying identifier.
            #[must_use]
            pub const fn uid(&self) -> $crate::Uid11 {
                self.0
            }

            /// Returns the raw payload.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0.as_u64()
            }

            /// Returns the time component in milliseconds since the Unix epoch.
            #[must_use]
            pub fn timestamp_ms(&self) -> u64 {
                self.0.timestamp_ms()
            }

            /// Parses an ID from its 11-character form.
            pub fn parse(s: &str) -> Result<Self, $crate::Uid11Error> {
                $crate::Uid11::parse(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Uid11Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::Uid11 as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }

        impl AsRef<$crate::Uid11> for $name {
            fn as_ref(&self) -> &$crate::Uid11 {
                &self.0
            }
        }

        impl From<$name> for $crate::Uid11 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::define_uid!(
        /// Test trace identifier.
        TraceId
    );
    crate::define_uid!(SpanId);

    #[test]
    fn test_typed_roundtrip() {
        let id = TraceId::new().unwrap();
        let parsed: TraceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_shares_wire_format() {
        let span = SpanId::random().unwrap();
        let trace = TraceId::parse(&span.to_string()).unwrap();
        assert_eq!(span.as_u64(), trace.as_u64());
        assert_eq!(crate::Uid11::from(span), trace.uid());
    }

    #[test]
    fn test_typed_parse_error() {
        assert!(matches!(
            TraceId::parse("not-an-id"),
            Err(crate::Uid11Error::InvalidCharacter { position: 3, .. })
        ));
    }

    #[test]
    fn test_typed_json_roundtrip() {
        let id = SpanId::from_uid(crate::Uid11::from_u64(1_234_567));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", crate::encode(1_234_567)));
        let parsed: SpanId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_timestamp() {
        let id = TraceId::from_uid(crate::Uid11::from_u64(0));
        assert_eq!(id.timestamp_ms(), crate::EPOCH_MS);
    }
}
