//! Closed string enumerations decoded by exact wire-value match.

/// Declares an enumeration with one wire string per variant.
///
/// Generates the enum plus `as_str`, `from_wire`, `Display`, `FromStr`,
/// [`Decode`](crate::decode::Decode) and `serde::Serialize`. Decoding an
/// unknown string fails with
/// [`DecodeErrorKind::UnknownEnumValue`](crate::decode::DecodeErrorKind).
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire string of this member.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Looks up a member by exact wire string.
            #[must_use]
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::decode::DecodeErrorKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| $crate::decode::DecodeErrorKind::UnknownEnumValue {
                    enumeration: stringify!($name),
                    value: String::from(s),
                })
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                value: &::serde_json::Value,
                cx: &$crate::decode::DecodeContext<'_>,
            ) -> Result<Self, $crate::decode::DecodeError> {
                let text = value
                    .as_str()
                    .ok_or_else(|| cx.malformed(stringify!($name), value))?;
                text.parse::<Self>().map_err(|kind| cx.error(kind))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;
