//! The closed vocabulary of type annotations.
//!
//! Every value that plain data cannot carry natively is stored as a plain-data
//! payload plus one of these tags. The tags are split into two families:
//!
//! - **Primitive**: `NaN`, `Infinity`, `-Infinity`, `undefined`, `bigint`. The tag
//!   alone identifies the kind; consumers never need to inspect the payload.
//! - **Leaf / container**: `regexp`, `Date`, `map:number`, `map:string`,
//!   `map:bigint`, `map:boolean`, `set`. The payload carries the data.
//!
//! ## Examples
//!
//! ```rust
//! use serde_annotated::{is_primitive_type_annotation, is_type_annotation, TypeAnnotation};
//!
//! assert!(is_type_annotation("map:number"));
//! assert!(!is_primitive_type_annotation("map:number"));
//! assert!(is_primitive_type_annotation("NaN"));
//!
//! let tag: TypeAnnotation = "set".parse().unwrap();
//! assert_eq!(tag, TypeAnnotation::Set);
//! assert_eq!(tag.to_string(), "set");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const WIRE_NAMES: &[&str] = &[
    "-Infinity",
    "Infinity",
    "undefined",
    "NaN",
    "bigint",
    "map:number",
    "map:string",
    "map:bigint",
    "map:boolean",
    "regexp",
    "set",
    "Date",
];

/// A type tag from the closed annotation vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeAnnotation {
    NaN,
    Infinity,
    NegativeInfinity,
    Undefined,
    BigInt,
    RegExp,
    Date,
    NumberMap,
    StringMap,
    BigIntMap,
    BooleanMap,
    Set,
}

impl TypeAnnotation {
    /// Every annotation, primitives first.
    pub const ALL: [TypeAnnotation; 12] = [
        TypeAnnotation::NegativeInfinity,
        TypeAnnotation::Infinity,
        TypeAnnotation::Undefined,
        TypeAnnotation::NaN,
        TypeAnnotation::BigInt,
        TypeAnnotation::NumberMap,
        TypeAnnotation::StringMap,
        TypeAnnotation::BigIntMap,
        TypeAnnotation::BooleanMap,
        TypeAnnotation::RegExp,
        TypeAnnotation::Set,
        TypeAnnotation::Date,
    ];

    /// The annotations whose payload carries no information.
    pub const PRIMITIVE: [TypeAnnotation; 5] = [
        TypeAnnotation::NegativeInfinity,
        TypeAnnotation::Infinity,
        TypeAnnotation::Undefined,
        TypeAnnotation::NaN,
        TypeAnnotation::BigInt,
    ];

    /// Returns the wire name of this annotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::TypeAnnotation;
    ///
    /// assert_eq!(TypeAnnotation::NegativeInfinity.as_str(), "-Infinity");
    /// assert_eq!(TypeAnnotation::BooleanMap.as_str(), "map:boolean");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeAnnotation::NaN => "NaN",
            TypeAnnotation::Infinity => "Infinity",
            TypeAnnotation::NegativeInfinity => "-Infinity",
            TypeAnnotation::Undefined => "undefined",
            TypeAnnotation::BigInt => "bigint",
            TypeAnnotation::RegExp => "regexp",
            TypeAnnotation::Date => "Date",
            TypeAnnotation::NumberMap => "map:number",
            TypeAnnotation::StringMap => "map:string",
            TypeAnnotation::BigIntMap => "map:bigint",
            TypeAnnotation::BooleanMap => "map:boolean",
            TypeAnnotation::Set => "set",
        }
    }

    /// Returns `true` for the five primitive annotations.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeAnnotation::NaN
                | TypeAnnotation::Infinity
                | TypeAnnotation::NegativeInfinity
                | TypeAnnotation::Undefined
                | TypeAnnotation::BigInt
        )
    }

    /// Looks up an annotation by wire name.
    #[must_use]
    pub fn from_wire(tag: &str) -> Option<Self> {
        TypeAnnotation::ALL
            .iter()
            .copied()
            .find(|annotation| annotation.as_str() == tag)
    }
}

/// Returns `true` iff `value` names one of the five primitive annotations.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::is_primitive_type_annotation;
///
/// assert!(is_primitive_type_annotation("bigint"));
/// assert!(is_primitive_type_annotation("-Infinity"));
/// assert!(!is_primitive_type_annotation("Date"));
/// assert!(!is_primitive_type_annotation("nan"));
/// ```
#[must_use]
pub fn is_primitive_type_annotation(value: &str) -> bool {
    TypeAnnotation::from_wire(value).is_some_and(|annotation| annotation.is_primitive())
}

/// Returns `true` iff `value` names any annotation in the vocabulary.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::is_type_annotation;
///
/// assert!(is_type_annotation("regexp"));
/// assert!(is_type_annotation("map:bigint"));
/// assert!(!is_type_annotation("map:date"));
/// assert!(!is_type_annotation(""));
/// ```
#[must_use]
pub fn is_type_annotation(value: &str) -> bool {
    TypeAnnotation::from_wire(value).is_some()
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeAnnotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeAnnotation::from_wire(s).ok_or_else(|| Error::unknown_annotation(s))
    }
}

impl Serialize for TypeAnnotation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeAnnotation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct AnnotationVisitor;

        impl<'de> Visitor<'de> for AnnotationVisitor {
            type Value = TypeAnnotation;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a type annotation such as \"bigint\" or \"map:number\"")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                TypeAnnotation::from_wire(value)
                    .ok_or_else(|| de::Error::unknown_variant(value, WIRE_NAMES))
            }
        }

        deserializer.deserialize_str(AnnotationVisitor)
    }
}
