//! Strict accessors over a JSON payload.
//!
//! Absent keys and explicit nulls read as "not there". A key that is
//! present with the wrong JSON type is always a mapping error, as is a
//! required key that is not there.

use serde_json::Value;

use crate::error::{Result, SpotifyError};

/// Look up a key, treating `null` as absent.
fn lookup<'a>(source: &'a Value, key: &str) -> Option<&'a Value> {
    source.get(key).filter(|v| !v.is_null())
}

fn missing(key: &str) -> SpotifyError {
    SpotifyError::mapping(format!("missing required field `{}`", key))
}

fn wrong_type(key: &str, expected: &str, found: &Value) -> SpotifyError {
    SpotifyError::mapping(format!(
        "field `{}` should be {}, found {}",
        key,
        expected,
        type_name(found)
    ))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fail unless the value is a JSON object.
pub fn expect_object(source: &Value) -> Result<()> {
    if source.is_object() {
        Ok(())
    } else {
        Err(SpotifyError::mapping(format!(
            "expected an object, found {}",
            type_name(source)
        )))
    }
}

/// Get an ID that may be sent as a string or a number.
pub fn required_id(source: &Value, key: &str) -> Result<String> {
    match lookup(source, key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(wrong_type(key, "a string or number", other)),
        None => Err(missing(key)),
    }
}

pub fn required_str(source: &Value, key: &str) -> Result<String> {
    optional_str(source, key)?.ok_or_else(|| missing(key))
}

pub fn required_u32(source: &Value, key: &str) -> Result<u32> {
    optional_u32(source, key)?.ok_or_else(|| missing(key))
}

pub fn required_array<'a>(source: &'a Value, key: &str) -> Result<&'a [Value]> {
    match lookup(source, key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(wrong_type(key, "an array", other)),
        None => Err(missing(key)),
    }
}

pub fn optional_str(source: &Value, key: &str) -> Result<Option<String>> {
    match lookup(source, key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(key, "a string", other)),
        None => Ok(None),
    }
}

pub fn optional_u64(source: &Value, key: &str) -> Result<Option<u64>> {
    match lookup(source, key) {
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| wrong_type(key, "a non-negative integer", v)),
        None => Ok(None),
    }
}

pub fn optional_u32(source: &Value, key: &str) -> Result<Option<u32>> {
    match optional_u64(source, key)? {
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| SpotifyError::mapping(format!("field `{}` out of range: {}", key, n))),
        None => Ok(None),
    }
}

pub fn optional_bool(source: &Value, key: &str) -> Result<Option<bool>> {
    match lookup(source, key) {
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_type(key, "a boolean", other)),
        None => Ok(None),
    }
}

pub fn optional_object<'a>(source: &'a Value, key: &str) -> Result<Option<&'a Value>> {
    match lookup(source, key) {
        Some(v @ Value::Object(_)) => Ok(Some(v)),
        Some(other) => Err(wrong_type(key, "an object", other)),
        None => Ok(None),
    }
}

/// Get an array, reading an absent key as empty.
pub fn optional_array<'a>(source: &'a Value, key: &str) -> Result<&'a [Value]> {
    match lookup(source, key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(wrong_type(key, "an array", other)),
        None => Ok(Default::default()),
    }
}
