//! Forward-compatible string enums.
//!
//! Services add enum values over time. A client built against an older model
//! must still decode responses containing the new values, so every generated
//! enum carries an `Unknown(String)` variant that round-trips the raw string.

/// Declare a string enum with a fixed wire spelling per variant.
///
/// Generates `as_str`, `from_wire`, `is_unknown`, `Display`, `From<&str>`
/// and serde impls that never fail on unrecognized values.
///
/// # Examples
///
/// ```
/// awsjson_json::wire_enum! {
///     /// How an invocation is performed.
///     pub enum InvocationType {
///         /// Synchronous.
///         RequestResponse => "RequestResponse",
///         /// Asynchronous.
///         Event => "Event",
///     }
/// }
///
/// assert_eq!(InvocationType::Event.as_str(), "Event");
/// let parsed: InvocationType = serde_json::from_str("\"Queued\"").unwrap();
/// assert_eq!(parsed, InvocationType::Unknown("Queued".to_owned()));
/// assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Queued\"");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this version of the model does not know about.
            Unknown(String),
        }

        impl $name {
            /// All wire values known to this version of the model.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire spelling of this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Map a wire spelling to a variant, keeping unrecognized values.
            #[must_use]
            pub fn from_wire(raw: &str) -> Self {
                match raw {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }

            /// Returns `true` for values outside the known set.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from_wire(raw)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::wire_enum! {
        enum Protocol {
            Tcp => "tcp",
            All => "all",
            Udp => "udp",
        }
    }

    #[test]
    fn test_should_map_known_values() {
        assert_eq!(Protocol::from_wire("udp"), Protocol::Udp);
        assert_eq!(Protocol::Tcp.to_string(), "tcp");
        assert_eq!(Protocol::VALUES, &["tcp", "all", "udp"]);
    }

    #[test]
    fn test_should_keep_unknown_values_verbatim() {
        let parsed: Protocol = serde_json::from_str("\"sctp\"").unwrap();
        assert!(parsed.is_unknown());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"sctp\"");
    }

    #[test]
    fn test_should_be_case_sensitive() {
        assert_eq!(Protocol::from("TCP"), Protocol::Unknown("TCP".to_owned()));
    }
}
