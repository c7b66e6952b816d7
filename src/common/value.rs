use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use serde_json::{Map, Number, Value};
use std::collections;

/// A stored record: attribute names mapped to attribute values.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// How numeric attribute values are turned into document values.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_document::common::value;
/// use serde_json::json;
///
/// let number = AttributeValue::N("42".to_string());
/// assert_eq!(value::decode_with(&number, value::NumberDecoding::Text), json!("42"));
/// assert_eq!(value::decode_with(&number, value::NumberDecoding::Parsed), json!(42));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NumberDecoding {
    /// Keep the decimal text unchanged, as a string document value.
    #[default]
    Text,
    /// Parse the decimal text into a JSON number.
    ///
    /// Integer text becomes an integer, anything else the nearest float. Integer
    /// text outside the `i64`/`u64` range and text that does not parse are kept
    /// as strings.
    Parsed,
}

impl NumberDecoding {
    fn decode(self, text: &str) -> Value {
        match self {
            Self::Text => Value::String(text.to_string()),
            Self::Parsed => match text.parse::<Number>() {
                Ok(number) if number.is_f64() && is_integer_text(text) => {
                    Value::String(text.to_string())
                }
                Ok(number) => Value::Number(number),
                Err(_) => Value::String(text.to_string()),
            },
        }
    }
}

fn is_integer_text(text: &str) -> bool {
    !text.contains(['.', 'e', 'E'])
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Fetch the fields of a top-level document, which must be a map.
pub(crate) fn as_fields<'a>(document: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    match document {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::InvalidArgument(format!(
            "{what} must be a map, found a {}",
            kind_name(other)
        ))),
    }
}

/// Encode a number as its decimal text.
///
/// Integers use their canonical base-10 form; floats use the shortest text that
/// parses back to the same double and always keep a fractional part or exponent.
pub(crate) fn encode_number(number: &Number) -> types::AttributeValue {
    types::AttributeValue::N(number.to_string())
}

/// Encode a document value into an attribute value.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_document::common::value;
/// use serde_json::json;
///
/// let encoded = value::encode(&json!(["a", 1]));
/// assert_eq!(
///     encoded,
///     AttributeValue::L(vec![
///         AttributeValue::S("a".to_string()),
///         AttributeValue::N("1".to_string()),
///     ])
/// );
/// ```
pub fn encode(value: &Value) -> types::AttributeValue {
    match value {
        Value::Null => types::AttributeValue::Null(true),
        Value::Bool(value) => types::AttributeValue::Bool(*value),
        Value::Number(number) => encode_number(number),
        Value::String(value) => types::AttributeValue::S(value.clone()),
        Value::Array(values) => types::AttributeValue::L(values.iter().map(encode).collect()),
        Value::Object(fields) => types::AttributeValue::M(
            fields
                .iter()
                .map(|(name, value)| (name.clone(), encode(value)))
                .collect(),
        ),
    }
}

/// Encode every top-level field of a map document into an item.
pub fn encode_item(document: &Value) -> Result<Item> {
    let fields = as_fields(document, "item document")?;
    let item = fields
        .iter()
        .map(|(name, value)| (name.clone(), encode(value)))
        .collect();
    Ok(item)
}

/// Decode an attribute value, keeping numbers as their decimal text.
pub fn decode(value: &types::AttributeValue) -> Value {
    decode_with(value, NumberDecoding::Text)
}

/// Decode an attribute value.
///
/// Binary values and sets have no document counterpart and decode to null.
pub fn decode_with(value: &types::AttributeValue, numbers: NumberDecoding) -> Value {
    match value {
        types::AttributeValue::S(text) => Value::String(text.clone()),
        types::AttributeValue::N(text) => numbers.decode(text),
        types::AttributeValue::Bool(value) => Value::Bool(*value),
        types::AttributeValue::Null(_) => Value::Null,
        types::AttributeValue::M(fields) => Value::Object(decode_fields(fields, numbers)),
        types::AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(|value| decode_with(value, numbers))
                .collect(),
        ),
        other => {
            tracing::debug!(attribute = ?other, "unsupported attribute value decoded as null");
            Value::Null
        }
    }
}

fn decode_fields(fields: &Item, numbers: NumberDecoding) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), decode_with(value, numbers)))
        .collect()
}

/// Decode a returned item into a map document; an absent item is an empty map.
pub fn decode_item(item: Option<&Item>, numbers: NumberDecoding) -> Value {
    match item {
        Some(item) => Value::Object(decode_fields(item, numbers)),
        None => Value::Object(Map::new()),
    }
}

/// Decode a page of items into a list document.
pub fn decode_items(items: &[Item], numbers: NumberDecoding) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| Value::Object(decode_fields(item, numbers)))
            .collect(),
    )
}
