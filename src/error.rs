//! Error types for classifying and reconstructing annotated values.
//!
//! ## Error Categories
//!
//! - **Unsupported key type**: a map whose first key is not a string, number,
//!   bigint, or boolean cannot be annotated
//! - **Malformed payload**: a stored payload does not parse back into the kind
//!   its annotation names (bad integer literal, bad timestamp, bad regexp literal,
//!   wrong payload shape)
//! - **Invalid regexp**: a pattern or flag string was rejected while building a
//!   [`RegExp`](crate::RegExp)
//! - **Type mismatch**: a [`Value`](crate::Value) was extracted as the wrong kind
//! - **Unknown annotation**: a type tag outside the closed vocabulary, raised only
//!   when parsing tags or reconstructing in strict mode
//!
//! ## Examples
//!
//! ```rust
//! use serde_annotated::{untransform_value, TypeAnnotation, Value};
//!
//! let result = untransform_value(Value::from("not a number"), TypeAnnotation::BigInt);
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("bigint"));
//! }
//! ```

use crate::{TypeAnnotation, Value};
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the annotation codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A map's sampled key has a type the vocabulary has no annotation for
    #[error("Key type not supported: expected string, number, bigint or boolean key, found {found}")]
    UnsupportedKeyType { found: String },

    /// Payload could not be reconstructed into the annotated kind
    #[error("Malformed {annotation} payload: {msg}")]
    MalformedPayload {
        annotation: TypeAnnotation,
        msg: String,
    },

    /// Regular expression pattern or flags rejected
    #[error("Invalid regular expression /{pattern}/: {msg}")]
    InvalidRegExp { pattern: String, msg: String },

    /// Value extracted as the wrong kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Type annotation outside the closed vocabulary
    #[error("Unknown type annotation: {0:?}")]
    UnknownAnnotation(String),
}

impl Error {
    /// Creates an unsupported key type error naming the kind that was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::Error;
    ///
    /// let err = Error::unsupported_key_type("array");
    /// assert!(err.to_string().contains("found array"));
    /// ```
    pub fn unsupported_key_type(found: &str) -> Self {
        Error::UnsupportedKeyType {
            found: found.to_string(),
        }
    }

    /// Creates a malformed payload error for the given annotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::{Error, TypeAnnotation};
    ///
    /// let err = Error::malformed(TypeAnnotation::Date, "expected ISO-8601 string");
    /// assert!(err.to_string().contains("Malformed Date payload"));
    /// ```
    pub fn malformed<T: fmt::Display>(annotation: TypeAnnotation, msg: T) -> Self {
        Error::MalformedPayload {
            annotation,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid regular expression error.
    pub fn invalid_regexp<T: fmt::Display>(pattern: &str, msg: T) -> Self {
        Error::InvalidRegExp {
            pattern: pattern.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a type mismatch error for a failed `TryFrom<Value>` extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::{Error, Value};
    ///
    /// let err = Error::unsupported_conversion("integer", &Value::Null);
    /// assert!(err.to_string().contains("expected integer, found null"));
    /// ```
    pub fn unsupported_conversion(expected: &str, found: &Value) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.kind().to_string(),
        }
    }

    /// Creates an unknown annotation error.
    pub fn unknown_annotation(tag: &str) -> Self {
        Error::UnknownAnnotation(tag.to_string())
    }

    /// Returns the annotation whose payload failed to parse, if any.
    #[must_use]
    pub fn annotation(&self) -> Option<TypeAnnotation> {
        match self {
            Error::MalformedPayload { annotation, .. } => Some(*annotation),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
