//! Property-based tests for the round-trip law
//!
//! Every annotated kind is generated, classified, pushed through JSON as plain
//! data, and reconstructed. The result must equal the input.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use proptest::prelude::*;
use serde_annotated::{
    transform_value, untransform_tagged, KeyedMap, RegExp, TypeAnnotation, Value, ValueSet,
};

// Every millisecond chrono can represent, BCE and expanded years included.
fn millis_range() -> std::ops::RangeInclusive<i64> {
    DateTime::<Utc>::MIN_UTC.timestamp_millis()..=DateTime::<Utc>::MAX_UTC.timestamp_millis()
}

fn roundtrip_through_json(value: &Value) -> bool {
    let transformed = match transform_value(value) {
        Ok(Some(t)) => t,
        Ok(None) => {
            eprintln!("No annotation for {}", value);
            return false;
        }
        Err(e) => {
            eprintln!("Classify failed: {}", e);
            return false;
        }
    };

    let json = match serde_json::to_string(&transformed) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            return false;
        }
    };

    let (payload, tag) = match serde_json::from_str::<serde_json::Value>(&json) {
        Ok(mut doc) => {
            let tag = doc["type"].as_str().unwrap_or_default().to_string();
            let payload: Value = match serde_json::from_value(doc["value"].take()) {
                Ok(payload) => payload,
                Err(e) => {
                    eprintln!("Payload deserialize failed: {}", e);
                    return false;
                }
            };
            (payload, tag)
        }
        Err(e) => {
            eprintln!("Deserialize failed: {}", e);
            eprintln!("Serialized was: {}", json);
            return false;
        }
    };

    match untransform_tagged(payload, &tag) {
        Ok(restored) => {
            if restored != *value {
                eprintln!("Restored {} from {}, expected {}", restored, json, value);
            }
            restored == *value
        }
        Err(e) => {
            eprintln!("Reconstruct failed: {}", e);
            false
        }
    }
}

fn arb_bigint() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u32>(), 0..5)).prop_map(|(negative, digits)| {
        let magnitude = BigInt::from_slice(num_bigint::Sign::Plus, &digits);
        if negative {
            -magnitude
        } else {
            magnitude
        }
    })
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn arb_flags() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 5).prop_map(|on| {
        "gimsy"
            .chars()
            .zip(on)
            .filter_map(|(flag, on)| on.then_some(flag))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_bigint(n in arb_bigint()) {
        prop_assert!(roundtrip_through_json(&Value::from(n)));
    }

    #[test]
    fn prop_date(millis in millis_range()) {
        let dt = DateTime::from_timestamp_millis(millis).unwrap();
        prop_assert!(roundtrip_through_json(&Value::Date(dt)));
    }

    #[test]
    fn prop_set(items in prop::collection::vec(arb_leaf(), 0..10)) {
        let set: ValueSet = items.into_iter().collect();
        prop_assert!(roundtrip_through_json(&Value::Set(set)));
    }

    #[test]
    fn prop_integer_keyed_map(entries in prop::collection::vec((any::<i64>(), arb_leaf()), 1..10)) {
        let map: KeyedMap = entries
            .into_iter()
            .map(|(k, v)| (Value::from(k), v))
            .collect();
        prop_assert!(roundtrip_through_json(&Value::Map(map)));
    }

    #[test]
    fn prop_float_keyed_map(keys in prop::collection::vec(-1.0e9f64..1.0e9, 1..10)) {
        let map: KeyedMap = keys
            .into_iter()
            .map(|k| (Value::from(k), Value::Null))
            .collect();
        prop_assert!(roundtrip_through_json(&Value::Map(map)));
    }

    #[test]
    fn prop_string_keyed_map(entries in prop::collection::vec(("[a-z0-9]{0,6}", arb_leaf()), 1..10)) {
        let map: KeyedMap = entries
            .into_iter()
            .map(|(k, v)| (Value::from(k), v))
            .collect();
        prop_assert!(roundtrip_through_json(&Value::Map(map)));
    }

    #[test]
    fn prop_bigint_keyed_map(keys in prop::collection::vec(arb_bigint(), 1..6)) {
        let map: KeyedMap = keys
            .into_iter()
            .map(|k| (Value::from(k), Value::from(true)))
            .collect();
        prop_assert!(roundtrip_through_json(&Value::Map(map)));
    }

    #[test]
    fn prop_regexp(pattern in "[a-z0-9/ .]{0,12}", flags in arb_flags()) {
        let re = RegExp::new(&pattern, &flags).unwrap();
        prop_assert!(roundtrip_through_json(&Value::RegExp(re)));
    }

    #[test]
    fn prop_plain_values_are_untouched(value in arb_leaf()) {
        prop_assert_eq!(transform_value(&value).unwrap(), None);
    }

    #[test]
    fn prop_classification_is_deterministic(n in arb_bigint(), millis in millis_range()) {
        for value in [Value::from(n), Value::Date(DateTime::from_timestamp_millis(millis).unwrap())] {
            let first = transform_value(&value).unwrap();
            prop_assert_eq!(&first, &transform_value(&value).unwrap());
            let annotation = first.map(|t| t.annotation);
            prop_assert!(matches!(
                annotation,
                Some(TypeAnnotation::BigInt) | Some(TypeAnnotation::Date)
            ));
        }
    }
}
