//! Conversion from DynamoDB attribute maps to plain JSON.

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use crate::core::models::MovieRecord;
use crate::errors::MovieError;

/// Converts a DynamoDB number string to a JSON number.
///
/// Integers stay exact; anything a JSON number cannot hold is kept as text.
#[must_use]
pub fn number_to_json(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(Number::from(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Value::Number(Number::from(u));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(raw.to_string()), Value::Number)
}

#[must_use]
pub fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob)),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| number_to_json(n)).collect()),
        AttributeValue::Bs(set) => Value::Array(
            set.iter()
                .map(|blob| Value::String(STANDARD.encode(blob)))
                .collect(),
        ),
        // Variants added to the SDK after this was written
        _ => Value::Null,
    }
}

#[must_use]
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Value {
    let object: Map<String, Value> = item
        .iter()
        .map(|(k, v)| (k.clone(), attribute_to_json(v)))
        .collect();
    Value::Object(object)
}

/// # Errors
///
/// Returns an error if `title` or `releaseYear` hold a type a movie record
/// cannot represent.
pub fn item_to_movie(item: &HashMap<String, AttributeValue>) -> Result<MovieRecord, MovieError> {
    serde_json::from_value(item_to_json(item))
        .map_err(|e| MovieError::StoreUnavailable(format!("undecodable movie item: {e}")))
}
