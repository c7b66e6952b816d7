//! A table handle bundling a borrowed client with its table settings.

use crate::{client, common, error, read, write};

use serde_json::Value;

/// Document operations against one table.
///
/// The handle borrows the client, so a single client can serve any number of
/// handles and calls.
///
/// ```rust,no_run
/// use dynamodb_document::{client, common, table};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = client::make_default_client().await;
/// let users = table::Table::new(&client, "users");
/// users.put(json!({"id": "42", "tags": ["a", "b"]})).await?;
///
/// let mut key = common::key::PrimaryKey::new();
/// key.add_string_key("id", "42");
/// let user = users.get(&key).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Table<'c, C: ?Sized> {
    client: &'c C,
    number_decoding: common::value::NumberDecoding,
    table_name: String,
}

impl<'c, C> Table<'c, C>
where
    C: client::StoreClient + ?Sized,
{
    /// Create a handle on `table_name`.
    pub fn new(client: &'c C, table_name: impl Into<String>) -> Self {
        Self {
            client,
            number_decoding: common::value::NumberDecoding::default(),
            table_name: table_name.into(),
        }
    }

    /// Choose how numbers in returned documents are decoded.
    pub fn with_number_decoding(mut self, number_decoding: common::value::NumberDecoding) -> Self {
        self.number_decoding = number_decoding;
        self
    }

    /// The table this handle targets.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn read_args(&self) -> read::common::ReadArgs {
        read::common::ReadArgs {
            number_decoding: self.number_decoding,
            table_name: self.table_name.clone(),
        }
    }

    fn write_args(&self) -> write::common::WriteArgs {
        write::common::WriteArgs {
            table_name: self.table_name.clone(),
        }
    }

    /// Fetch the item with `key`; an empty map document when there is none.
    pub async fn get(&self, key: &common::key::PrimaryKey) -> error::Result<Value> {
        let get_item = read::get_item::GetItem {
            key: key.clone(),
            read_args: self.read_args(),
        };
        get_item.send(self.client).await
    }

    /// Store a map document, replacing any item with the same key.
    pub async fn put(&self, document: Value) -> error::Result<()> {
        let put_item = write::put_item::PutItem {
            item: document,
            write_args: self.write_args(),
        };
        put_item.send(self.client).await
    }

    /// Assign every top-level field of `document` to the item with `key`.
    pub async fn update(&self, key: &common::key::PrimaryKey, document: Value) -> error::Result<()> {
        let update_item = write::update_item::UpdateItem {
            document,
            key: key.clone(),
            write_args: self.write_args(),
        };
        update_item.send(self.client).await
    }

    /// Delete the item with `key`.
    pub async fn delete(&self, key: &common::key::PrimaryKey) -> error::Result<()> {
        let delete_item = write::delete_item::DeleteItem {
            key: key.clone(),
            write_args: self.write_args(),
        };
        delete_item.send(self.client).await
    }

    /// Query with a key condition whose placeholder values are the fields of
    /// `expression_values`; returns a list document.
    pub async fn query(
        &self,
        index_name: Option<&str>,
        key_condition_expression: &str,
        expression_values: Value,
    ) -> error::Result<Value> {
        let query = read::query::Query {
            expression_values,
            index_name: index_name.map(str::to_string),
            key_condition_expression: key_condition_expression.to_string(),
            read_args: self.read_args(),
        };
        query.send(self.client).await
    }

    /// Read the first page of every item; returns a list document.
    pub async fn scan(&self) -> error::Result<Value> {
        let scan = read::scan::Scan {
            read_args: self.read_args(),
        };
        scan.send(self.client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryClient;

    use serde_json::json;

    fn key(id: &str) -> common::key::PrimaryKey {
        let mut key = common::key::PrimaryKey::new();
        key.add_string_key("id", id);
        key
    }

    #[tokio::test]
    async fn test_put_then_get_returns_same_document() {
        let client = MemoryClient::default().with_table("T", &["id"]);
        let table = Table::new(&client, "T");
        let document = json!({"id": "42", "tags": ["a", "b"]});

        table.put(document.clone()).await.unwrap();
        let fetched = table.get(&key("42")).await.unwrap();

        assert_eq!(fetched, document);
    }

    #[tokio::test]
    async fn test_document_lifecycle() {
        let client = MemoryClient::default().with_table("orders", &["id"]);
        let orders = Table::new(&client, "orders")
            .with_number_decoding(common::value::NumberDecoding::Parsed);
        assert_eq!(orders.table_name(), "orders");

        orders
            .put(json!({"id": "1", "status": "open", "total": 12.5, "lines": [{"sku": "a", "qty": 2}]}))
            .await
            .unwrap();
        orders.put(json!({"id": "2", "status": "open"})).await.unwrap();

        orders
            .update(&key("1"), json!({"status": "done"}))
            .await
            .unwrap();
        assert_eq!(
            orders.get(&key("1")).await.unwrap(),
            json!({"id": "1", "status": "done", "total": 12.5, "lines": [{"sku": "a", "qty": 2}]})
        );

        let done = orders
            .query(None, "id = :id", json!({"id": "1"}))
            .await
            .unwrap();
        assert_eq!(done.as_array().map(Vec::len), Some(1));

        orders.delete(&key("1")).await.unwrap();
        assert_eq!(orders.get(&key("1")).await.unwrap(), json!({}));
        assert_eq!(
            orders.scan().await.unwrap(),
            json!([{"id": "2", "status": "open"}])
        );
    }

    #[tokio::test]
    async fn test_one_client_serves_many_tables() {
        let client = MemoryClient::default()
            .with_table("a", &["id"])
            .with_table("b", &["id"]);
        let first = Table::new(&client, "a");
        let second = Table::new(&client, "b");

        first.put(json!({"id": "1", "in": "a"})).await.unwrap();
        second.put(json!({"id": "1", "in": "b"})).await.unwrap();

        assert_eq!(first.get(&key("1")).await.unwrap()["in"], json!("a"));
        assert_eq!(second.get(&key("1")).await.unwrap()["in"], json!("b"));
    }

    #[tokio::test]
    async fn test_store_failures_are_returned() {
        let client = MemoryClient::failing("access denied");
        let table = Table::new(&client, "T");

        assert!(matches!(
            table.put(json!({"id": "1"})).await,
            Err(error::Error::Store(_))
        ));
        assert!(matches!(
            table.update(&key("1"), json!({"a": 1})).await,
            Err(error::Error::Store(_))
        ));
        assert!(matches!(
            table.delete(&key("1")).await,
            Err(error::Error::Store(_))
        ));
        assert!(matches!(table.scan().await, Err(error::Error::Store(_))));
    }
}
