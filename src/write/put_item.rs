use crate::{client, common, error, write};

use serde_json::Value;

/// Put item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "1", "name": "John"}),
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem {
    /// The map document to store; it must contain the table's key attributes.
    pub item: Value,
    /// Additional write operation arguments (table name).
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<PutItem> for client::PutItemRequest {
    type Error = error::Error;

    fn try_from(put_item: PutItem) -> error::Result<Self> {
        let item = common::value::encode_item(&put_item.item)?;
        let request = Self {
            table_name: put_item.write_args.table_name,
            item,
        };
        Ok(request)
    }
}

impl PutItem {
    /// Execute the put item operation.
    #[tracing::instrument(
        name = "dynamodb_document.put_item",
        skip_all,
        fields(table = %self.write_args.table_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<()>
    where
        C: client::StoreClient + ?Sized,
    {
        let request: client::PutItemRequest = self.try_into()?;
        client.put_item(request).await?;
        Ok(())
    }
}
