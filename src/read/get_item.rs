use crate::{client, common, error, read};

use serde_json::Value;

/// Get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut key = common::key::PrimaryKey::new();
/// key.add_string_key("id", "1");
/// let get_item = read::get_item::GetItem {
///     key,
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let document = get_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem {
    /// The primary key of the item to retrieve.
    pub key: common::key::PrimaryKey,
    /// Additional read operation arguments (table name, number decoding).
    pub read_args: read::common::ReadArgs,
}

impl TryFrom<GetItem> for client::GetItemRequest {
    type Error = error::Error;

    fn try_from(get_item: GetItem) -> error::Result<Self> {
        get_item.key.check()?;
        let request = Self {
            table_name: get_item.read_args.table_name,
            key: get_item.key.render_into(common::key::KeyClause::new()),
        };
        Ok(request)
    }
}

impl GetItem {
    /// Execute the get item operation.
    ///
    /// Returns the item as a map document, or an empty map when no item has the key.
    #[tracing::instrument(
        name = "dynamodb_document.get_item",
        skip_all,
        fields(table = %self.read_args.table_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<Value>
    where
        C: client::StoreClient + ?Sized,
    {
        let number_decoding = self.read_args.number_decoding;
        let request: client::GetItemRequest = self.try_into()?;
        let item = client.get_item(request).await?;
        Ok(common::value::decode_item(item.as_ref(), number_decoding))
    }
}
