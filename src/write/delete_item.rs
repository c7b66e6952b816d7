use crate::{client, common, error, write};

/// Delete item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut key = common::key::PrimaryKey::new();
/// key.add_string_key("id", "1");
/// let delete_item = write::delete_item::DeleteItem {
///     key,
///     write_args: write::common::WriteArgs {
///         table_name: "users".to_string(),
///     },
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItem {
    /// The primary key of the item to delete.
    pub key: common::key::PrimaryKey,
    /// Additional write operation arguments (table name).
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<DeleteItem> for client::DeleteItemRequest {
    type Error = error::Error;

    fn try_from(delete_item: DeleteItem) -> error::Result<Self> {
        delete_item.key.check()?;
        let request = Self {
            table_name: delete_item.write_args.table_name,
            key: delete_item.key.render_into(common::key::KeyClause::new()),
        };
        Ok(request)
    }
}

impl DeleteItem {
    /// Execute the delete item operation.
    ///
    /// Deleting a key that holds no item succeeds.
    #[tracing::instrument(
        name = "dynamodb_document.delete_item",
        skip_all,
        fields(table = %self.write_args.table_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<()>
    where
        C: client::StoreClient + ?Sized,
    {
        let request: client::DeleteItemRequest = self.try_into()?;
        client.delete_item(request).await?;
        Ok(())
    }
}
