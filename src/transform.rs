//! Classification: rich value to plain-data payload plus type annotation.
//!
//! Kinds are tested in a fixed priority order, first match wins:
//!
//! 1. undefined
//! 2. bigint
//! 3. date
//! 4. NaN (before the infinity test, since NaN compares false with everything)
//! 5. infinities
//! 6. set
//! 7. regexp
//! 8. map, with the key type inferred from the first key
//!
//! Anything else is already plain data and yields `None`.

use crate::{date, Error, KeyedMap, Result, TypeAnnotation, Value};
use serde::{Deserialize, Serialize};
use std::mem;

/// A plain-data payload together with the annotation needed to restore it.
///
/// Serializes as `{ "value": ..., "type": ... }`.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{transform_value, TypeAnnotation, Value};
///
/// let t = transform_value(&Value::from(f64::NEG_INFINITY)).unwrap().unwrap();
/// assert_eq!(t.annotation, TypeAnnotation::NegativeInfinity);
/// assert!(t.value.is_undefined());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transformed {
    pub value: Value,
    #[serde(rename = "type")]
    pub annotation: TypeAnnotation,
}

impl Transformed {
    /// Pairs a payload with its annotation.
    #[must_use]
    pub fn new(value: Value, annotation: TypeAnnotation) -> Self {
        Transformed { value, annotation }
    }

    fn placeholder(annotation: TypeAnnotation) -> Self {
        Transformed::new(Value::Undefined, annotation)
    }

    /// Splits into `(payload, annotation)`.
    #[must_use]
    pub fn into_parts(self) -> (Value, TypeAnnotation) {
        (self.value, self.annotation)
    }
}

/// Classifies a value, returning its payload and annotation if it needs one.
///
/// Returns `Ok(None)` when the value is already plain data and should be
/// passed through unchanged. Set elements and map entries are copied into the
/// payload as they are; annotating nested values is left to the caller.
///
/// # Errors
///
/// Returns [`Error::UnsupportedKeyType`] for a map whose first key is not a
/// string, number, bigint, or boolean.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{transform_value, TypeAnnotation, Value};
/// use num_bigint::BigInt;
///
/// let big: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let t = transform_value(&Value::from(big)).unwrap().unwrap();
/// assert_eq!(t.annotation, TypeAnnotation::BigInt);
/// assert_eq!(t.value, Value::from("123456789012345678901234567890"));
///
/// assert_eq!(transform_value(&Value::from("plain")).unwrap(), None);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn transform_value(value: &Value) -> Result<Option<Transformed>> {
    let transformed = match value {
        Value::Undefined => Transformed::placeholder(TypeAnnotation::Undefined),
        Value::BigInt(bi) => {
            Transformed::new(Value::String(bi.to_string()), TypeAnnotation::BigInt)
        }
        Value::Date(dt) => Transformed::new(
            Value::String(date::to_iso_string(dt)),
            TypeAnnotation::Date,
        ),
        Value::Number(n) if n.is_nan() => Transformed::placeholder(TypeAnnotation::NaN),
        Value::Number(n) if n.is_infinite() => {
            if n.as_f64() > 0.0 {
                Transformed::placeholder(TypeAnnotation::Infinity)
            } else {
                Transformed::placeholder(TypeAnnotation::NegativeInfinity)
            }
        }
        Value::Set(set) => Transformed::new(Value::Array(set.to_vec()), TypeAnnotation::Set),
        Value::RegExp(re) => Transformed::new(Value::String(re.to_string()), TypeAnnotation::RegExp),
        Value::Map(map) => {
            let annotation = infer_map_annotation(map)?;
            Transformed::new(value.clone(), annotation)
        }
        _ => {
            tracing::trace!(kind = value.kind(), "value is plain data");
            return Ok(None);
        }
    };

    tracing::trace!(
        kind = value.kind(),
        annotation = %transformed.annotation,
        "classified value"
    );
    Ok(Some(transformed))
}

/// Picks the map annotation from the first key alone. An empty map is
/// string-keyed.
fn infer_map_annotation(map: &KeyedMap) -> Result<TypeAnnotation> {
    let Some(sample) = map.first_key() else {
        return Ok(TypeAnnotation::StringMap);
    };

    let annotation = match sample {
        Value::String(_) => TypeAnnotation::StringMap,
        Value::Number(_) => TypeAnnotation::NumberMap,
        Value::BigInt(_) => TypeAnnotation::BigIntMap,
        Value::Bool(_) => TypeAnnotation::BooleanMap,
        other => return Err(Error::unsupported_key_type(other.kind())),
    };

    if tracing::enabled!(tracing::Level::WARN)
        && map
            .keys()
            .any(|key| mem::discriminant(key) != mem::discriminant(sample))
    {
        tracing::warn!(
            annotation = %annotation,
            entries = map.len(),
            "map has mixed key types; annotated from its first key only"
        );
    }

    Ok(annotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, RegExp, ValueSet};
    use chrono::{TimeZone, Utc};
    use num_bigint::BigInt;

    fn map_of(keys: Vec<Value>) -> Value {
        Value::Map(keys.into_iter().map(|k| (k, Value::Null)).collect())
    }

    fn annotation_of(value: &Value) -> Option<TypeAnnotation> {
        transform_value(value).unwrap().map(|t| t.annotation)
    }

    #[test]
    fn test_undefined() {
        let t = transform_value(&Value::Undefined).unwrap().unwrap();
        assert_eq!(t, Transformed::new(Value::Undefined, TypeAnnotation::Undefined));
    }

    #[test]
    fn test_date_payload() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t = transform_value(&Value::Date(dt)).unwrap().unwrap();
        assert_eq!(t.annotation, TypeAnnotation::Date);
        assert_eq!(t.value, Value::from("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(annotation_of(&Value::from(f64::NAN)), Some(TypeAnnotation::NaN));
        assert_eq!(
            annotation_of(&Value::Number(Number::NaN)),
            Some(TypeAnnotation::NaN)
        );
        assert_eq!(
            annotation_of(&Value::from(f64::INFINITY)),
            Some(TypeAnnotation::Infinity)
        );
        assert_eq!(
            annotation_of(&Value::Number(Number::NegativeInfinity)),
            Some(TypeAnnotation::NegativeInfinity)
        );
        assert_eq!(annotation_of(&Value::from(1.5)), None);
        assert_eq!(annotation_of(&Value::from(0)), None);
    }

    #[test]
    fn test_set_payload_keeps_insertion_order() {
        let set: ValueSet = [3, 1, 2].into_iter().map(Value::from).collect();
        let t = transform_value(&Value::Set(set)).unwrap().unwrap();
        assert_eq!(t.annotation, TypeAnnotation::Set);
        assert_eq!(
            t.value,
            Value::Array(vec![Value::from(3), Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn test_set_elements_are_not_transformed() {
        let set: ValueSet = vec![Value::from(BigInt::from(1))].into_iter().collect();
        let t = transform_value(&Value::Set(set)).unwrap().unwrap();
        assert_eq!(t.value, Value::Array(vec![Value::from(BigInt::from(1))]));
    }

    #[test]
    fn test_regexp_payload() {
        let re = RegExp::new("ab+c", "gi").unwrap();
        let t = transform_value(&Value::RegExp(re)).unwrap().unwrap();
        assert_eq!(t.annotation, TypeAnnotation::RegExp);
        assert_eq!(t.value, Value::from("/ab+c/gi"));
    }

    #[test]
    fn test_map_key_inference() {
        let numbers = map_of(vec![Value::from(5), Value::from(10), Value::from(15)]);
        assert_eq!(annotation_of(&numbers), Some(TypeAnnotation::NumberMap));

        assert_eq!(
            annotation_of(&map_of(vec![])),
            Some(TypeAnnotation::StringMap)
        );
        assert_eq!(
            annotation_of(&map_of(vec![Value::from("a")])),
            Some(TypeAnnotation::StringMap)
        );
        assert_eq!(
            annotation_of(&map_of(vec![Value::from(BigInt::from(1))])),
            Some(TypeAnnotation::BigIntMap)
        );
        assert_eq!(
            annotation_of(&map_of(vec![Value::from(true), Value::from(false)])),
            Some(TypeAnnotation::BooleanMap)
        );
    }

    #[test]
    fn test_map_payload_is_the_map() {
        let map = map_of(vec![Value::from(1)]);
        let t = transform_value(&map).unwrap().unwrap();
        assert_eq!(t.value, map);
    }

    #[test]
    fn test_mixed_keys_use_first_key_only() {
        // Known limitation: only the first key is sampled.
        let mixed = map_of(vec![Value::from(1), Value::from("one")]);
        assert_eq!(annotation_of(&mixed), Some(TypeAnnotation::NumberMap));

        let mixed = map_of(vec![Value::from("one"), Value::Null]);
        assert_eq!(annotation_of(&mixed), Some(TypeAnnotation::StringMap));
    }

    #[test]
    fn test_unsupported_key_type() {
        for key in [
            Value::Null,
            Value::Undefined,
            Value::from(vec![]),
            Value::Date(Utc::now()),
        ] {
            let kind = key.kind();
            let err = transform_value(&map_of(vec![key])).unwrap_err();
            assert_eq!(err, Error::unsupported_key_type(kind));
        }
    }

    #[test]
    fn test_plain_values_pass_through() {
        for value in [
            Value::Null,
            Value::from(true),
            Value::from(42),
            Value::from("text"),
            Value::from(vec![Value::Undefined]),
            Value::Object(crate::ObjectMap::new()),
        ] {
            assert_eq!(transform_value(&value).unwrap(), None);
        }
    }

    #[test]
    fn test_classification_is_stable() {
        let value = map_of(vec![Value::from(BigInt::from(7))]);
        assert_eq!(
            transform_value(&value).unwrap(),
            transform_value(&value).unwrap()
        );
    }
}
