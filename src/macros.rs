/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// `undefined` and `null` are both accepted. Any other expression goes
/// through `Value::from`, so dates, bigints, sets, maps and regexps can be
/// embedded directly.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{value, Value};
///
/// let v = value!({
///     "name": "Alice",
///     "missing": undefined,
///     "scores": [1, 2, 3]
/// });
/// assert_eq!(v.as_object().unwrap().get("missing"), Some(&Value::Undefined));
/// ```
#[macro_export]
macro_rules! value {
    (undefined) => {
        $crate::Value::Undefined
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ObjectMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ObjectMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {
        $crate::Value::from($s)
    };
}
