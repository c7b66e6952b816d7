//! Read operations for retrieving documents from DynamoDB tables.
//!
//! This module provides operations for reading data from DynamoDB:
//! - Getting individual items by primary key
//! - Querying items with a key condition
//! - Scanning entire tables
//!
//! Query and Scan read a single page.

/// Common arguments for read operations.
pub mod common;

/// Get item operation for retrieving a single item by primary key.
pub mod get_item;

/// Query operation for retrieving items with a key condition.
pub mod query;

/// Scan operation for retrieving all items from a table.
pub mod scan;
