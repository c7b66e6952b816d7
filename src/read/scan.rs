use crate::{client, common, error, read};

use serde_json::Value;

/// Scan operation.
///
/// Reads the first page of every item in the table; on tables holding many entity
/// types this returns a large, mixed result.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let documents = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Read operation arguments (table name, number decoding).
    pub read_args: read::common::ReadArgs,
}

impl From<Scan> for client::ScanRequest {
    fn from(scan: Scan) -> Self {
        Self {
            table_name: scan.read_args.table_name,
        }
    }
}

impl Scan {
    /// Execute the scan operation.
    #[tracing::instrument(
        name = "dynamodb_document.scan",
        skip_all,
        fields(table = %self.read_args.table_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<Value>
    where
        C: client::StoreClient + ?Sized,
    {
        let number_decoding = self.read_args.number_decoding;
        let request: client::ScanRequest = self.into();
        let items = client.scan(request).await?;
        Ok(common::value::decode_items(&items, number_decoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{StoreClient, memory::MemoryClient};

    use serde_json::json;

    fn scan(table_name: &str) -> Scan {
        Scan {
            read_args: read::common::ReadArgs {
                table_name: table_name.to_string(),
                number_decoding: common::value::NumberDecoding::Parsed,
            },
        }
    }

    #[test]
    fn test_scan() {
        let actual: client::ScanRequest = scan("a").into();
        assert_eq!(
            actual,
            client::ScanRequest {
                table_name: "a".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_scan_returns_every_item() {
        let client = MemoryClient::default().with_table("users", &["id"]);
        assert_eq!(scan("users").send(&client).await.unwrap(), json!([]));

        for document in [json!({"id": "1", "n": 1}), json!({"id": "2", "n": 2.5})] {
            client
                .put_item(client::PutItemRequest {
                    table_name: "users".to_string(),
                    item: common::value::encode_item(&document).unwrap(),
                })
                .await
                .unwrap();
        }
        let documents = scan("users").send(&client).await.unwrap();
        assert_eq!(documents, json!([{"id": "1", "n": 1}, {"id": "2", "n": 2.5}]));
    }

    #[tokio::test]
    async fn test_scan_unknown_table_fails() {
        let client = MemoryClient::default();
        let error = scan("missing").send(&client).await.unwrap_err();
        assert!(matches!(
            error,
            error::Error::Store(client::StoreError {
                kind: client::StoreErrorKind::Service,
                ..
            })
        ));
    }
}
