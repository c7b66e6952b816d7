use crate::common::value;
use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde_json::Value;

/// Prefix of every value placeholder.
pub const PLACEHOLDER_PREFIX: &str = ":";

/// Placeholder names mapped to their encoded values, in field order.
pub type PlaceholderValues = IndexMap<String, types::AttributeValue>;

/// Placeholder name of a field.
pub fn placeholder(field: &str) -> String {
    format!("{PLACEHOLDER_PREFIX}{field}")
}

/// Build an expression assigning every top-level field to its placeholder.
///
/// Field names are used verbatim; names colliding with store reserved words are
/// not escaped.
///
/// ```rust
/// use dynamodb_document::common::expression;
/// use serde_json::json;
///
/// let expression =
///     expression::build_assign_all_expression(&json!({"name": "x", "age": 3}), "SET").unwrap();
/// assert_eq!(expression, "SET name = :name, age = :age");
/// ```
pub fn build_assign_all_expression(document: &Value, verb: &str) -> Result<String> {
    let fields = value::as_fields(document, "update document")?;
    if fields.is_empty() {
        return Err(Error::InvalidArgument(
            "update document has no fields to assign".to_string(),
        ));
    }
    let assignments: Vec<String> = fields
        .keys()
        .map(|field| format!("{field} = {}", placeholder(field)))
        .collect();
    Ok(format!("{verb} {}", assignments.join(", ")))
}

/// Build the placeholder values of a document: one `:field` entry per top-level field.
pub fn build_placeholder_values(document: &Value) -> Result<PlaceholderValues> {
    let fields = value::as_fields(document, "expression values")?;
    let values = fields
        .iter()
        .map(|(field, value)| (placeholder(field), value::encode(value)))
        .collect();
    Ok(values)
}
