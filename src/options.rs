//! Configuration options for reconstructing annotated values.
//!
//! - [`CodecOptions`]: Main configuration struct
//! - [`BooleanKeys`]: How `map:boolean` key strings become booleans
//!
//! ## Examples
//!
//! ```rust
//! use serde_annotated::{untransform_tagged_with_options, CodecOptions, Value};
//!
//! // Unknown tags pass the payload through by default...
//! let lenient = CodecOptions::new();
//! let value = untransform_tagged_with_options(Value::from(1), "map:date", &lenient).unwrap();
//! assert_eq!(value, Value::from(1));
//!
//! // ...and are rejected in strict mode.
//! let strict = CodecOptions::strict();
//! assert!(untransform_tagged_with_options(Value::from(1), "map:date", &strict).is_err());
//! ```

/// Conversion policy for the key strings of a `map:boolean` payload.
///
/// - **Literal**: `"true"` and `"false"` map to their booleans; any other string
///   falls back to truthiness
/// - **Truthy**: every non-empty string is `true`, so `"false"` becomes `true`;
///   matches payload consumers that apply generic truthiness
///
/// # Examples
///
/// ```rust
/// use serde_annotated::BooleanKeys;
///
/// assert!(!BooleanKeys::Literal.parse("false"));
/// assert!(BooleanKeys::Truthy.parse("false"));
/// assert!(!BooleanKeys::Truthy.parse(""));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BooleanKeys {
    #[default]
    Literal,
    Truthy,
}

impl BooleanKeys {
    /// Converts a key string to a boolean under this policy.
    #[must_use]
    pub fn parse(&self, key: &str) -> bool {
        match (self, key) {
            (BooleanKeys::Literal, "true") => true,
            (BooleanKeys::Literal, "false") => false,
            _ => !key.is_empty(),
        }
    }
}

/// Configuration options for reconstruction.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{BooleanKeys, CodecOptions};
///
/// let options = CodecOptions::new();
/// assert!(!options.strict);
/// assert_eq!(options.boolean_keys, BooleanKeys::Literal);
///
/// let options = CodecOptions::new()
///     .with_strict(true)
///     .with_boolean_keys(BooleanKeys::Truthy);
/// assert!(options.strict);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub boolean_keys: BooleanKeys,
    pub strict: bool,
}

impl CodecOptions {
    /// Creates default options (literal boolean keys, lenient unknown tags).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject type annotations outside the vocabulary.
    #[must_use]
    pub fn strict() -> Self {
        CodecOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Creates options that convert boolean keys by truthiness, for payloads
    /// whose readers treat every non-empty key as `true`.
    #[must_use]
    pub fn compatible() -> Self {
        CodecOptions {
            boolean_keys: BooleanKeys::Truthy,
            ..Default::default()
        }
    }

    /// Sets the boolean key policy.
    #[must_use]
    pub fn with_boolean_keys(mut self, boolean_keys: BooleanKeys) -> Self {
        self.boolean_keys = boolean_keys;
        self
    }

    /// Enables or disables strict tag validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
