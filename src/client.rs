//! The store client seam.
//!
//! Operations never talk to the network themselves: they build one of the request
//! types below and hand it to a [`StoreClient`]. The crate implements the trait for
//! [`aws_sdk_dynamodb::Client`]; retries, credentials and transport are the
//! client's business.

#[cfg(test)]
pub(crate) mod memory;

use crate::common::{
    expression::PlaceholderValues,
    key::{KeyClause, KeySelector},
    value::Item,
};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, error, types};
use std::{collections, fmt};
use thiserror::Error;

/// Category of a store failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StoreErrorKind {
    /// The request was rejected before or by the store as malformed.
    Validation,
    /// The store answered with a service error.
    Service,
    /// The request could not be built, sent, or its response read.
    Dispatch,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Service => "service",
            Self::Dispatch => "dispatch",
        };
        f.write_str(name)
    }
}

/// Failure outcome of a store call.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{kind} error: {message}")]
pub struct StoreError {
    /// What kind of failure occurred.
    pub kind: StoreErrorKind,
    /// Human-readable description reported by the store client.
    pub message: String,
}

impl StoreError {
    /// Create a store error.
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn from_sdk<E, R>(sdk_error: error::SdkError<E, R>) -> Self
    where
        E: std::error::Error + 'static,
        R: fmt::Debug,
    {
        let kind = match &sdk_error {
            error::SdkError::ServiceError(_) => StoreErrorKind::Service,
            _ => StoreErrorKind::Dispatch,
        };
        let message = error::DisplayErrorContext(&sdk_error).to_string();
        Self::new(kind, message)
    }
}

/// Read one item by primary key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItemRequest {
    /// The table to read from.
    pub table_name: String,
    /// Key-selection clause, in rendering order.
    pub key: KeyClause,
}

/// Create or replace one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItemRequest {
    /// The table to write to.
    pub table_name: String,
    /// The full item.
    pub item: Item,
}

/// Modify the attributes of one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItemRequest {
    /// The table to write to.
    pub table_name: String,
    /// Key-selection clause, in rendering order.
    pub key: KeyClause,
    /// The update expression, e.g. `SET a = :a`.
    pub update_expression: String,
    /// Values referenced by the update expression.
    pub expression_attribute_values: PlaceholderValues,
}

/// Remove one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItemRequest {
    /// The table to write to.
    pub table_name: String,
    /// Key-selection clause, in rendering order.
    pub key: KeyClause,
}

/// Read the items matching a key condition (one page).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryRequest {
    /// The table to read from.
    pub table_name: String,
    /// Secondary index to query instead of the base table.
    pub index_name: Option<String>,
    /// The key condition, e.g. `pk = :pk`.
    pub key_condition_expression: String,
    /// Values referenced by the key condition.
    pub expression_attribute_values: PlaceholderValues,
}

/// Read every item of a table (one page).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanRequest {
    /// The table to read from.
    pub table_name: String,
}

/// A client able to perform the six store calls.
///
/// Each method is a single attempt; retry, timeout and auth policies belong to the
/// implementation.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch one item; `None` when no item has the key.
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<Item>, StoreError>;

    /// Store one item, replacing any item with the same key.
    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError>;

    /// Apply an update expression to one item.
    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError>;

    /// Delete one item.
    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError>;

    /// Fetch the first page of items matching a key condition.
    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError>;

    /// Fetch the first page of items of a table.
    async fn scan(&self, request: ScanRequest) -> Result<Vec<Item>, StoreError>;
}

fn check_unique_key(key: &KeyClause) -> Result<(), StoreError> {
    let mut names = collections::HashSet::with_capacity(key.len());
    for (name, _) in key {
        if !names.insert(name.as_str()) {
            return Err(StoreError::new(
                StoreErrorKind::Validation,
                format!("duplicate key component `{name}`"),
            ));
        }
    }
    Ok(())
}

fn non_empty(
    values: PlaceholderValues,
) -> Option<collections::HashMap<String, types::AttributeValue>> {
    if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

#[async_trait]
impl StoreClient for Client {
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<Item>, StoreError> {
        let GetItemRequest { table_name, key } = request;
        check_unique_key(&key)?;
        let builder = Client::get_item(self).table_name(table_name);
        let output = key
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.add_key(name, value))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(output.item)
    }

    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError> {
        Client::put_item(self)
            .table_name(request.table_name)
            .set_item(Some(request.item))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(())
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError> {
        let UpdateItemRequest {
            table_name,
            key,
            update_expression,
            expression_attribute_values,
        } = request;
        check_unique_key(&key)?;
        let builder = Client::update_item(self)
            .table_name(table_name)
            .update_expression(update_expression)
            .set_expression_attribute_values(non_empty(expression_attribute_values));
        key.into_iter()
            .fold(builder, |builder, (name, value)| builder.add_key(name, value))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(())
    }

    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError> {
        let DeleteItemRequest { table_name, key } = request;
        check_unique_key(&key)?;
        let builder = Client::delete_item(self).table_name(table_name);
        key.into_iter()
            .fold(builder, |builder, (name, value)| builder.add_key(name, value))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError> {
        let output = Client::query(self)
            .table_name(request.table_name)
            .set_index_name(request.index_name)
            .key_condition_expression(request.key_condition_expression)
            .set_expression_attribute_values(non_empty(request.expression_attribute_values))
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(output.items.unwrap_or_default())
    }

    async fn scan(&self, request: ScanRequest) -> Result<Vec<Item>, StoreError> {
        let output = Client::scan(self)
            .table_name(request.table_name)
            .send()
            .await
            .map_err(StoreError::from_sdk)?;
        Ok(output.items.unwrap_or_default())
    }
}

/// Build a client from the ambient AWS configuration.
///
/// Region, credentials and profile are loaded the same way the AWS CLI loads them
/// (environment, shared config files, instance metadata).
pub async fn make_default_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
