//! Closed-set enumerations backed by exact wire strings.
//!
//! Every enumeration in this crate is declared once through [`wire_enum!`],
//! which generates the Rust enum, its serde/JSON Schema representation and a
//! [`WireEnum`] impl. The reverse lookup table is built lazily on first use
//! and is read-only afterwards, so lookups need no coordination across threads.
//!
//! Matching is exact: no trimming, no case folding, no prefix matching.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Rejection of a wire string that does not name a declared symbol.
///
/// Both variants are permanent: the caller passed a value that will never
/// become valid for this enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireValueError {
    /// The value was empty or absent.
    #[error("{enumeration} value cannot be null or empty")]
    InvalidValue { enumeration: &'static str },

    /// The value is not one of the declared wire strings.
    #[error("cannot create {enumeration} from unknown value '{value}'")]
    UnknownValue {
        enumeration: &'static str,
        value: String,
    },
}

impl WireValueError {
    /// Name of the enumeration the lookup was made against.
    #[must_use]
    pub const fn enumeration(&self) -> &'static str {
        match self {
            Self::InvalidValue { enumeration } | Self::UnknownValue { enumeration, .. } => {
                enumeration
            }
        }
    }
}

/// Reverse lookup from wire string to symbol for one enumeration.
#[derive(Debug)]
pub struct WireTable<T: 'static> {
    by_wire: HashMap<&'static str, T>,
}

impl<T: WireEnum> WireTable<T> {
    /// Build the table from the enumeration's declared symbols.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if two symbols share a wire string.
    #[must_use]
    pub fn build() -> Self {
        let mut by_wire = HashMap::with_capacity(T::ALL.len());
        for &symbol in T::ALL {
            let previous = by_wire.insert(symbol.as_str(), symbol);
            debug_assert!(
                previous.is_none(),
                "duplicate wire value '{}' in {}",
                symbol.as_str(),
                T::NAME
            );
        }
        Self { by_wire }
    }

    #[must_use]
    pub fn get(&self, value: &str) -> Option<T> {
        self.by_wire.get(value).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_wire.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_wire.is_empty()
    }
}

/// A closed enumeration whose symbols map one-to-one onto wire strings.
pub trait WireEnum: Copy + Eq + Hash + Send + Sync + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Every declared symbol, in declaration order.
    const ALL: &'static [Self];

    /// The wire string for this symbol.
    fn as_str(self) -> &'static str;

    /// The process-wide reverse lookup table.
    fn table() -> &'static WireTable<Self>;

    /// Total mapping from symbol to wire string.
    fn to_wire_value(self) -> &'static str {
        self.as_str()
    }

    /// Exact lookup of a wire string.
    ///
    /// # Errors
    ///
    /// [`WireValueError::InvalidValue`] for an empty string,
    /// [`WireValueError::UnknownValue`] for anything outside the declared set.
    fn from_wire_value(value: &str) -> Result<Self, WireValueError> {
        if value.is_empty() {
            return Err(WireValueError::InvalidValue {
                enumeration: Self::NAME,
            });
        }
        Self::table()
            .get(value)
            .ok_or_else(|| WireValueError::UnknownValue {
                enumeration: Self::NAME,
                value: value.to_string(),
            })
    }

    /// Like [`WireEnum::from_wire_value`], treating `None` the same as `""`.
    ///
    /// # Errors
    ///
    /// Same as [`WireEnum::from_wire_value`].
    fn from_optional_wire_value(value: Option<&str>) -> Result<Self, WireValueError> {
        Self::from_wire_value(value.unwrap_or_default())
    }

    /// Declared wire strings, in declaration order.
    fn wire_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|symbol| symbol.as_str()).collect()
    }
}

/// Declare a closed enumeration and its wire strings.
///
/// ```ignore
/// wire_enum! {
///     /// The type of access for an instance port.
///     pub enum PortAccessType {
///         Public => "Public",
///         Private => "Private",
///     }
/// }
/// ```
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
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Return the exact string used on the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                Self::as_str(self)
            }

            fn table() -> &'static $crate::wire::WireTable<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::wire::WireTable<$name>> =
                    ::std::sync::LazyLock::new($crate::wire::WireTable::build);
                &TABLE
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::wire::WireValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::wire::WireEnum>::from_wire_value(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::wire::WireValueError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                <Self as $crate::wire::WireEnum>::from_wire_value(value)
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        enum Fruit {
            Apple => "apple",
            BloodOrange => "Blood/Orange",
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Fruit::from_wire_value("apple"), Ok(Fruit::Apple));
        assert_eq!(Fruit::from_wire_value("Blood/Orange"), Ok(Fruit::BloodOrange));
        assert!(Fruit::from_wire_value("Apple").is_err());
        assert!(Fruit::from_wire_value(" apple").is_err());
    }

    #[test]
    fn empty_and_absent_are_invalid() {
        let expected = WireValueError::InvalidValue { enumeration: "Fruit" };
        assert_eq!(Fruit::from_wire_value(""), Err(expected.clone()));
        assert_eq!(Fruit::from_optional_wire_value(None), Err(expected));
    }

    #[test]
    fn unknown_value_is_reported_verbatim() {
        let err = Fruit::from_wire_value("pear").unwrap_err();
        assert_eq!(
            err,
            WireValueError::UnknownValue {
                enumeration: "Fruit",
                value: "pear".into(),
            }
        );
        assert_eq!(err.enumeration(), "Fruit");
        assert_eq!(err.to_string(), "cannot create Fruit from unknown value 'pear'");
    }

    #[test]
    fn table_covers_every_symbol() {
        assert_eq!(Fruit::table().len(), Fruit::ALL.len());
        assert_eq!(Fruit::wire_values(), vec!["apple", "Blood/Orange"]);
    }

    #[test]
    fn from_str_and_display_agree() {
        let parsed: Fruit = "Blood/Orange".parse().unwrap();
        assert_eq!(parsed.to_string(), "Blood/Orange");
        assert_eq!(Fruit::try_from("apple"), Ok(Fruit::Apple));
    }
}
