/// Typed, failable access into player documents
/// Absence and type mismatch are treated the same: the field is unavailable.
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Raw value stored under `key`, if `doc` is an object and holds it.
///
/// An explicit JSON `null` counts as absent.
pub fn get<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.as_object()?.get(key).filter(|value| !value.is_null())
}

/// Nested object stored under `key`. Any other value type yields `None`.
pub fn get_object<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    get(doc, key).filter(|value| value.is_object())
}

/// Walk a chain of object keys, e.g. `["socialMedia", "links"]`.
pub fn get_path<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(doc, |current, key| get(current, key))
}

/// Deserialize the value under `key` as `T`.
pub fn get_typed<T: DeserializeOwned>(doc: &Value, key: &str) -> Option<T> {
    get(doc, key).and_then(as_typed)
}

/// Deserialize an already located value as `T`. Integral floats such as
/// `1500.0` also satisfy integer targets.
pub fn as_typed<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(normalize_number(value).as_ref()).ok()
}

/// An integral float as the equivalent integer; every other value unchanged.
pub fn normalize_number(value: &Value) -> Cow<'_, Value> {
    match value.as_f64() {
        Some(number)
            if value.is_f64()
                && number.fract() == 0.0
                && number >= i64::MIN as f64
                && number < i64::MAX as f64 =>
        {
            Cow::Owned(Value::from(number as i64))
        }
        _ => Cow::Borrowed(value),
    }
}

pub fn get_i64(doc: &Value, key: &str) -> Option<i64> {
    get(doc, key).and_then(|value| normalize_number(value).as_i64())
}

pub fn get_str<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    get(doc, key).and_then(Value::as_str)
}

pub fn get_array<'a>(doc: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    get(doc, key).and_then(Value::as_array)
}
