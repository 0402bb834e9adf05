//! # serde_annotated
//!
//! Round-trip rich in-memory values through plain-data formats such as JSON.
//!
//! ## What does it do?
//!
//! Plain data only knows strings, numbers, booleans, null, arrays, and
//! string-keyed objects. This crate classifies the values that do not fit
//! (bigints, dates, `NaN`, the infinities, `undefined`, regular expressions,
//! sets, and maps keyed by strings, numbers, bigints, or booleans) into a
//! plain-data payload plus a type annotation, and reconstructs the original
//! value from that pair.
//!
//! ## Key Features
//!
//! - **Closed vocabulary**: twelve [`TypeAnnotation`]s, matched exhaustively in both
//!   directions
//! - **Leaf-level**: classifies one value at a time; walking documents and storing
//!   annotations by path is left to the caller
//! - **Serde Compatible**: [`Value`] and [`Transformed`] implement `Serialize` and
//!   `Deserialize`
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_annotated::{transform_value, untransform_value, TypeAnnotation, Value};
//! use num_bigint::BigInt;
//!
//! let big: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let original = Value::from(big);
//!
//! let transformed = transform_value(&original).unwrap().expect("bigint needs an annotation");
//! assert_eq!(transformed.annotation, TypeAnnotation::BigInt);
//!
//! // The payload is plain data and can be written with any serde format.
//! let json = serde_json::to_string(&transformed.value).unwrap();
//! assert_eq!(json, "\"123456789012345678901234567890\"");
//!
//! // Later: read the payload back and restore the original value.
//! let payload: Value = serde_json::from_str(&json).unwrap();
//! let restored = untransform_value(payload, transformed.annotation).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! ### Maps and Sets
//!
//! ```rust
//! use serde_annotated::{transform_value, untransform_value, KeyedMap, TypeAnnotation, Value};
//!
//! let mut map = KeyedMap::new();
//! map.insert(Value::from(5), Value::from("five"));
//! map.insert(Value::from(10), Value::from("ten"));
//! let original = Value::from(map);
//!
//! let t = transform_value(&original).unwrap().unwrap();
//! assert_eq!(t.annotation, TypeAnnotation::NumberMap);
//!
//! // Map payloads serialize as objects with stringified keys.
//! let json = serde_json::to_string(&t.value).unwrap();
//! assert_eq!(json, r#"{"5":"five","10":"ten"}"#);
//!
//! let payload: Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(untransform_value(payload, t.annotation).unwrap(), original);
//! ```
//!
//! ### Unvalidated Tags
//!
//! Tags read back from storage are strings. [`untransform_tagged`] accepts them
//! directly; unknown tags pass the payload through unchanged unless
//! [`CodecOptions::strict`] is used.
//!
//! ```rust
//! use serde_annotated::{untransform_tagged, Value};
//!
//! assert!(untransform_tagged(Value::Undefined, "NaN").unwrap().is_nan());
//! assert_eq!(untransform_tagged(Value::from(1), "newer:tag").unwrap(), Value::from(1));
//! ```
//!
//! ## Logging
//!
//! Classification and reconstruction emit [`tracing`] events: `trace` per
//! classified value, `debug` when an unknown tag is passed through, and `warn`
//! when a map with mixed key types is annotated from its first key. No
//! subscriber is installed by this crate.

#![forbid(unsafe_code)]

mod date;

pub mod annotation;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod regexp;
pub mod set;
pub mod transform;
pub mod untransform;
pub mod value;

pub use annotation::{is_primitive_type_annotation, is_type_annotation, TypeAnnotation};
pub use error::{Error, Result};
pub use map::{KeyedMap, ObjectMap};
pub use options::{BooleanKeys, CodecOptions};
pub use regexp::RegExp;
pub use set::ValueSet;
pub use transform::{transform_value, Transformed};
pub use untransform::{
    untransform_tagged, untransform_tagged_with_options, untransform_value,
    untransform_value_with_options,
};
pub use value::{Number, Value};
