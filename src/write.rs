//! Write operations for modifying documents in DynamoDB tables.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new items or replacing existing ones
//! - Updating items by assigning every field of a document
//! - Deleting items by primary key

/// Common arguments for write operations.
pub mod common;

/// Delete item operation for removing items from tables.
pub mod delete_item;

/// Put item operation for creating or replacing items.
pub mod put_item;

/// Update item operation for assigning fields of existing items.
pub mod update_item;
