//! Enum-backed string fields.
//!
//! Shapes store enum fields as their raw wire string so values unknown to
//! this build still round-trip. [`ServiceEnum`] gives the typed view, and
//! [`service_enum!`](crate::service_enum) declares one.

use crate::{Error, Result};
use tracing::debug;

/// A closed set of wire strings with a typed Rust face.
pub trait ServiceEnum: Copy + Eq + 'static {
    /// Service name of the enum type.
    const NAME: &'static str;

    /// Every variant, in schema order.
    const VARIANTS: &'static [Self];

    /// Wire strings of every variant, in schema order.
    const VALUES: &'static [&'static str];

    /// Wire string of this variant.
    fn as_str(&self) -> &'static str;

    /// Looks up the variant with the given wire string.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyEnumValue`] for an empty string and
    /// [`Error::UnknownEnumValue`] when no variant matches.
    fn from_value(value: &str) -> Result<Self> {
        if value.is_empty() {
            debug!(enum_name = Self::NAME, "empty enum value rejected");
            return Err(Error::EmptyEnumValue {
                enum_name: Self::NAME,
            });
        }
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| {
                debug!(enum_name = Self::NAME, value, "unknown enum value rejected");
                Error::UnknownEnumValue {
                    enum_name: Self::NAME,
                    value: value.to_owned(),
                }
            })
    }
}

/// Declares a [`ServiceEnum`] along with `Display`, `FromStr`,
/// `From<_> for String` and serde impls using the wire strings.
///
/// ```
/// iot_model_types::service_enum! {
///     /// Connection state.
///     pub enum Connectivity {
///         Online = "ONLINE",
///         Offline = "OFFLINE",
///     }
/// }
///
/// use iot_model_types::ServiceEnum;
/// assert_eq!(Connectivity::Online.as_str(), "ONLINE");
/// assert_eq!("OFFLINE".parse::<Connectivity>().unwrap(), Connectivity::Offline);
/// ```
#[macro_export]
macro_rules! service_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::ServiceEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::ServiceEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::ServiceEnum>::from_value(s)
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                $crate::ServiceEnum::as_str(&value).to_owned()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::ServiceEnum::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::ServiceEnum>::from_value(&raw)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
