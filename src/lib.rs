#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Document
//!
//! Store and retrieve JSON documents in Amazon DynamoDB.
//!
//! ## Overview
//!
//! DynamoDB does not store free-form JSON: every value travels as a tagged attribute
//! value (`S`, `N`, `BOOL`, `NULL`, `L`, `M`). This library:
//! - Converts `serde_json::Value` documents to attribute values and back, recursively
//! - Builds primary keys from ordered string and number components
//! - Builds `SET` update expressions and their placeholder values from a document
//! - Runs Get, Put, Update, Delete, Query and Scan through a borrowed store client
//!
//! ## Quick Example
//!
//! ```no_run
//! use dynamodb_document::{client, common, table};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = client::make_default_client().await;
//! let orders = table::Table::new(&client, "orders");
//!
//! orders.put(json!({"id": "1", "status": "open", "lines": [{"sku": "a"}]})).await?;
//!
//! let mut key = common::key::PrimaryKey::new();
//! key.add_string_key("id", "1");
//! // Sends "SET status = :status" with {":status": S("done")}
//! orders.update(&key, json!({"status": "done"})).await?;
//!
//! let order = orders.get(&key).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@client`] - The store client trait, its requests and the AWS SDK implementation
//! - [`mod@common`] - Value codec, keys and expression building
//! - [`mod@read`] - Read operations (GetItem, Query, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem)
//! - [`mod@table`] - A table handle exposing all six operations

/// The store client seam and its AWS SDK implementation.
pub mod client;

/// Common utilities for values, keys and expressions.
pub mod common;

/// Error types.
pub mod error;

/// Read operations for retrieving documents from DynamoDB tables.
///
/// This module provides operations for:
/// - Getting individual items by key
/// - Querying items with a key condition
/// - Scanning entire tables
pub mod read;

/// Table handle over a borrowed client.
pub mod table;

/// Write operations for modifying documents in DynamoDB tables.
///
/// This module provides operations for:
/// - Putting new items or replacing existing ones
/// - Updating items by assigning document fields
/// - Deleting items by key
pub mod write;

pub use error::{Error, Result};
