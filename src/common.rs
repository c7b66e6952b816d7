//! Common utilities for DynamoDB document operations.
//!
//! This module provides the pieces shared by read and write operations: the
//! document/attribute value codec, primary keys and expression building.

/// Expression building: assign-all update expressions and placeholder values.
pub mod expression;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

/// Conversion between JSON documents and DynamoDB attribute values.
pub mod value;

use crate::error::Result;

use serde_json::Value;

/// An expression together with the placeholder values it references.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_values: expression::PlaceholderValues,
}

impl ExpressionInput {
    /// `<verb> f1 = :f1, ...` over every top-level field of `document`.
    pub(crate) fn assign_all(document: &Value, verb: &str) -> Result<Self> {
        let expression = expression::build_assign_all_expression(document, verb)?;
        let expression_attribute_values = expression::build_placeholder_values(document)?;
        Ok(Self {
            expression,
            expression_attribute_values,
        })
    }

    /// A caller-written expression whose placeholder values come from `document`.
    pub(crate) fn with_values(expression: String, document: &Value) -> Result<Self> {
        let expression_attribute_values = expression::build_placeholder_values(document)?;
        Ok(Self {
            expression,
            expression_attribute_values,
        })
    }
}
