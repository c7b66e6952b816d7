//! In-memory store client used by the operation tests.
//!
//! Understands just enough of the expression language to back the crate's own
//! requests: `SET a = :a, ...` updates and `k = :k AND ...` key conditions.

use crate::client::{
    DeleteItemRequest, GetItemRequest, PutItemRequest, QueryRequest, ScanRequest, StoreClient,
    StoreError, StoreErrorKind, UpdateItemRequest,
};
use crate::common::{expression::PlaceholderValues, key::KeyClause, value::Item};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use std::{collections, sync};

#[derive(Debug, Default)]
struct Table {
    key_names: Vec<String>,
    items: Vec<Item>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryClient {
    tables: sync::Mutex<collections::HashMap<String, Table>>,
    failure: Option<StoreError>,
}

impl MemoryClient {
    pub(crate) fn with_table(self, table_name: &str, key_names: &[&str]) -> Self {
        let table = Table {
            key_names: key_names.iter().map(|name| name.to_string()).collect(),
            items: Vec::new(),
        };
        self.tables
            .lock()
            .unwrap()
            .insert(table_name.to_string(), table);
        self
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(StoreError::new(StoreErrorKind::Service, message)),
            ..Default::default()
        }
    }

    pub(crate) fn items(&self, table_name: &str) -> Vec<Item> {
        self.tables.lock().unwrap()[table_name].items.clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    fn with_table_mut<R>(
        &self,
        table_name: &str,
        f: impl FnOnce(&mut Table) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let table = tables.get_mut(table_name).ok_or_else(|| {
            StoreError::new(
                StoreErrorKind::Service,
                format!("requested resource not found: {table_name}"),
            )
        })?;
        f(table)
    }
}

impl Table {
    fn key_of(&self, key: &KeyClause) -> Result<Item, StoreError> {
        let names: Vec<&str> = key.iter().map(|(name, _)| name.as_str()).collect();
        let expected: Vec<&str> = self.key_names.iter().map(String::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort_unstable();
        if names.len() != expected.len() || sorted != expected_sorted {
            return Err(StoreError::new(
                StoreErrorKind::Validation,
                "the provided key element does not match the schema",
            ));
        }
        Ok(key.iter().cloned().collect())
    }

    fn position(&self, key: &Item) -> Option<usize> {
        self.items
            .iter()
            .position(|item| key.iter().all(|(name, value)| item.get(name) == Some(value)))
    }
}

fn lookup(
    values: &PlaceholderValues,
    placeholder: &str,
) -> Result<types::AttributeValue, StoreError> {
    values.get(placeholder).cloned().ok_or_else(|| {
        StoreError::new(
            StoreErrorKind::Validation,
            format!("undefined expression attribute value {placeholder}"),
        )
    })
}

fn parse_pairs<'a>(
    expression: &'a str,
    separator: &str,
) -> Result<Vec<(&'a str, &'a str)>, StoreError> {
    expression
        .split(separator)
        .map(|pair| {
            pair.split_once(" = ")
                .map(|(name, placeholder)| (name.trim(), placeholder.trim()))
                .ok_or_else(|| {
                    StoreError::new(
                        StoreErrorKind::Validation,
                        format!("invalid expression: {expression}"),
                    )
                })
        })
        .collect()
}

#[async_trait]
impl StoreClient for MemoryClient {
    async fn get_item(&self, request: GetItemRequest) -> Result<Option<Item>, StoreError> {
        self.with_table_mut(&request.table_name, |table| {
            let key = table.key_of(&request.key)?;
            Ok(table.position(&key).map(|index| table.items[index].clone()))
        })
    }

    async fn put_item(&self, request: PutItemRequest) -> Result<(), StoreError> {
        self.with_table_mut(&request.table_name, |table| {
            let key: KeyClause = table
                .key_names
                .iter()
                .filter_map(|name| {
                    request
                        .item
                        .get(name)
                        .map(|value| (name.clone(), value.clone()))
                })
                .collect();
            let key = table.key_of(&key)?;
            match table.position(&key) {
                Some(index) => table.items[index] = request.item,
                None => table.items.push(request.item),
            }
            Ok(())
        })
    }

    async fn update_item(&self, request: UpdateItemRequest) -> Result<(), StoreError> {
        self.with_table_mut(&request.table_name, |table| {
            let key = table.key_of(&request.key)?;
            let assignments = request
                .update_expression
                .strip_prefix("SET ")
                .ok_or_else(|| {
                    StoreError::new(StoreErrorKind::Validation, "only SET is supported")
                })?;
            let mut updates = Vec::new();
            for (name, placeholder) in parse_pairs(assignments, ", ")? {
                let value = lookup(&request.expression_attribute_values, placeholder)?;
                updates.push((name.to_string(), value));
            }
            let index = match table.position(&key) {
                Some(index) => index,
                None => {
                    table.items.push(key);
                    table.items.len() - 1
                }
            };
            table.items[index].extend(updates);
            Ok(())
        })
    }

    async fn delete_item(&self, request: DeleteItemRequest) -> Result<(), StoreError> {
        self.with_table_mut(&request.table_name, |table| {
            let key = table.key_of(&request.key)?;
            if let Some(index) = table.position(&key) {
                table.items.remove(index);
            }
            Ok(())
        })
    }

    async fn query(&self, request: QueryRequest) -> Result<Vec<Item>, StoreError> {
        self.with_table_mut(&request.table_name, |table| {
            let mut conditions = Vec::new();
            for (name, placeholder) in parse_pairs(&request.key_condition_expression, " AND ")? {
                let value = lookup(&request.expression_attribute_values, placeholder)?;
                conditions.push((name.to_string(), value));
            }
            let items = table
                .items
                .iter()
                .filter(|item| {
                    conditions
                        .iter()
                        .all(|(name, value)| item.get(name) == Some(value))
                })
                .cloned()
                .collect();
            Ok(items)
        })
    }

    async fn scan(&self, request: ScanRequest) -> Result<Vec<Item>, StoreError> {
        self.with_table_mut(&request.table_name, |table| Ok(table.items.clone()))
    }
}
