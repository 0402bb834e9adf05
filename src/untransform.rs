//! Reconstruction: plain-data payload plus type annotation back to a rich value.
//!
//! [`untransform_value`] matches exhaustively on [`TypeAnnotation`], so the
//! reconstructor and the classifier cannot drift apart when the vocabulary
//! changes. [`untransform_tagged`] accepts an unvalidated tag string; unknown
//! tags pass the payload through unchanged unless strict mode is enabled.
//!
//! Payload parsing follows the conversions plain-data hosts apply to strings:
//!
//! - **bigint**: optional sign and decimal digits, or a `0x`/`0o`/`0b` literal;
//!   surrounding whitespace is ignored and an empty string is zero
//! - **number keys**: as above plus decimals, exponents, and
//!   `Infinity`/`-Infinity`; anything unparseable becomes `NaN`
//! - **dates**: ISO-8601 strings, or epoch milliseconds

use crate::options::CodecOptions;
use crate::{date, Error, KeyedMap, Number, RegExp, Result, TypeAnnotation, Value, ValueSet};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// Reconstructs a value from its payload and annotation with default options.
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] if the payload does not parse as the
/// annotated kind.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{untransform_value, RegExp, TypeAnnotation, Value};
///
/// let re = untransform_value(Value::from("/ab+c/gi"), TypeAnnotation::RegExp).unwrap();
/// assert_eq!(re, Value::from(RegExp::new("ab+c", "gi").unwrap()));
///
/// let nan = untransform_value(Value::Undefined, TypeAnnotation::NaN).unwrap();
/// assert!(nan.is_nan());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn untransform_value(payload: Value, annotation: TypeAnnotation) -> Result<Value> {
    untransform_value_with_options(payload, annotation, &CodecOptions::default())
}

/// Reconstructs a value from its payload and annotation.
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] if the payload does not parse as the
/// annotated kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn untransform_value_with_options(
    payload: Value,
    annotation: TypeAnnotation,
    options: &CodecOptions,
) -> Result<Value> {
    match annotation {
        TypeAnnotation::BigInt => bigint_payload(payload).map(Value::BigInt),
        TypeAnnotation::Undefined => Ok(Value::Undefined),
        TypeAnnotation::Date => date_payload(payload).map(Value::Date),
        TypeAnnotation::NaN => Ok(Value::Number(Number::NaN)),
        TypeAnnotation::Infinity => Ok(Value::Number(Number::Infinity)),
        TypeAnnotation::NegativeInfinity => Ok(Value::Number(Number::NegativeInfinity)),
        TypeAnnotation::NumberMap => rebuild_map(payload, annotation, |key| {
            Ok(Value::Number(parse_number_key(&key)))
        }),
        TypeAnnotation::StringMap => rebuild_map(payload, annotation, |key| Ok(Value::String(key))),
        TypeAnnotation::BooleanMap => rebuild_map(payload, annotation, |key| {
            Ok(Value::Bool(options.boolean_keys.parse(&key)))
        }),
        TypeAnnotation::BigIntMap => rebuild_map(payload, annotation, |key| {
            parse_bigint_literal(&key)
                .map(Value::BigInt)
                .map_err(|msg| Error::malformed(annotation, msg))
        }),
        TypeAnnotation::Set => set_payload(payload).map(Value::Set),
        TypeAnnotation::RegExp => regexp_payload(payload).map(Value::RegExp),
    }
}

/// Reconstructs a value from its payload and a tag string that may fall
/// outside the vocabulary, with default (lenient) options.
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] if the tag is known and the payload does
/// not parse as that kind.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{untransform_tagged, Value};
///
/// let inf = untransform_tagged(Value::Undefined, "Infinity").unwrap();
/// assert!(inf.is_infinite());
///
/// // Unknown tags hand the payload back unchanged.
/// let passthrough = untransform_tagged(Value::from("x"), "custom:thing").unwrap();
/// assert_eq!(passthrough, Value::from("x"));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn untransform_tagged(payload: Value, tag: &str) -> Result<Value> {
    untransform_tagged_with_options(payload, tag, &CodecOptions::default())
}

/// Reconstructs a value from its payload and an unvalidated tag string.
///
/// # Errors
///
/// Returns [`Error::UnknownAnnotation`] for an unknown tag in strict mode, and
/// [`Error::MalformedPayload`] for a known tag whose payload does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn untransform_tagged_with_options(
    payload: Value,
    tag: &str,
    options: &CodecOptions,
) -> Result<Value> {
    match TypeAnnotation::from_wire(tag) {
        Some(annotation) => untransform_value_with_options(payload, annotation, options),
        None if options.strict => Err(Error::unknown_annotation(tag)),
        None => {
            tracing::debug!(tag, "unknown type annotation, passing payload through");
            Ok(payload)
        }
    }
}

fn bigint_payload(payload: Value) -> Result<BigInt> {
    match payload {
        Value::String(s) => {
            parse_bigint_literal(&s).map_err(|msg| Error::malformed(TypeAnnotation::BigInt, msg))
        }
        Value::BigInt(bi) => Ok(bi),
        Value::Bool(b) => Ok(BigInt::from(u8::from(b))),
        Value::Number(n) => n.as_i64().map(BigInt::from).ok_or_else(|| {
            Error::malformed(
                TypeAnnotation::BigInt,
                format!("{} is not an integer", n),
            )
        }),
        other => Err(Error::malformed(
            TypeAnnotation::BigInt,
            format!("expected integer string, found {}", other.kind()),
        )),
    }
}

fn date_payload(payload: Value) -> Result<DateTime<Utc>> {
    match payload {
        Value::String(s) => date::parse_iso_string(&s)
            .map_err(|e| Error::malformed(TypeAnnotation::Date, format!("{:?}: {}", s, e))),
        Value::Date(dt) => Ok(dt),
        Value::Number(n) => n
            .as_i64()
            .and_then(date::from_epoch_millis)
            .ok_or_else(|| {
                Error::malformed(
                    TypeAnnotation::Date,
                    format!("{} is not a valid epoch millisecond value", n),
                )
            }),
        other => Err(Error::malformed(
            TypeAnnotation::Date,
            format!("expected ISO-8601 string, found {}", other.kind()),
        )),
    }
}

fn set_payload(payload: Value) -> Result<ValueSet> {
    match payload {
        Value::Array(items) => Ok(items.into_iter().collect()),
        Value::Set(set) => Ok(set),
        Value::Undefined | Value::Null => Ok(ValueSet::new()),
        other => Err(Error::malformed(
            TypeAnnotation::Set,
            format!("expected array, found {}", other.kind()),
        )),
    }
}

fn regexp_payload(payload: Value) -> Result<RegExp> {
    match payload {
        Value::String(literal) => RegExp::from_literal(&literal)
            .map_err(|e| Error::malformed(TypeAnnotation::RegExp, e)),
        Value::RegExp(re) => Ok(re),
        other => Err(Error::malformed(
            TypeAnnotation::RegExp,
            format!("expected /pattern/flags string, found {}", other.kind()),
        )),
    }
}

/// Rebuilds a keyed map from object entries, or from a map whose keys are
/// first turned into their property-name strings.
fn rebuild_map<F>(payload: Value, annotation: TypeAnnotation, mut convert: F) -> Result<Value>
where
    F: FnMut(String) -> Result<Value>,
{
    let entries: Vec<(String, Value)> = match payload {
        Value::Object(obj) => obj.into_iter().collect(),
        Value::Map(map) => map
            .into_iter()
            .map(|(key, value)| {
                key.property_key().map(|k| (k, value)).ok_or_else(|| {
                    Error::malformed(annotation, format!("{} cannot be a map key", key.kind()))
                })
            })
            .collect::<Result<_>>()?,
        other => {
            return Err(Error::malformed(
                annotation,
                format!("expected object entries, found {}", other.kind()),
            ))
        }
    };

    let mut map = KeyedMap::with_capacity(entries.len());
    for (key, value) in entries {
        map.insert(convert(key)?, value);
    }
    Ok(Value::Map(map))
}

fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Parses a number key the way string-to-number conversion does.
pub(crate) fn parse_number_key(key: &str) -> Number {
    let s = key.trim();
    match s {
        "" => return Number::Integer(0),
        "Infinity" | "+Infinity" => return Number::Infinity,
        "-Infinity" => return Number::NegativeInfinity,
        _ => {}
    }

    if let Some((radix, digits)) = split_radix_prefix(s) {
        if digits.is_empty() {
            return Number::NaN;
        }
        if let Ok(i) = i64::from_str_radix(digits, radix) {
            if digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Number::Integer(i);
            }
        }
        return digits
            .chars()
            .try_fold(0f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
            })
            .map_or(Number::NaN, Number::Float);
    }

    let is_decimal = s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return Number::NaN;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Number::Integer(i);
    }
    s.parse::<f64>().map_or(Number::NaN, Number::Float)
}

/// Parses a bigint literal: trimmed, empty is zero, optional sign on decimal
/// digits, or an unsigned `0x`/`0o`/`0b` literal.
pub(crate) fn parse_bigint_literal(literal: &str) -> std::result::Result<BigInt, String> {
    let s = literal.trim();
    if s.is_empty() {
        return Ok(BigInt::from(0));
    }

    let (radix, negative, digits) = match split_radix_prefix(s) {
        Some((radix, digits)) => (radix, false, digits),
        None => match s.as_bytes()[0] {
            b'-' => (10, true, &s[1..]),
            b'+' => (10, false, &s[1..]),
            _ => (10, false, s),
        },
    };

    let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    match BigInt::parse_bytes(digits.as_bytes(), radix).filter(|_| valid) {
        Some(value) if negative => Ok(-value),
        Some(value) => Ok(value),
        None => Err(format!("cannot convert {:?} to a bigint", literal)),
    }
}
