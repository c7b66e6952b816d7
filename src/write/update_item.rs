use crate::{client, common, error, write};

use serde_json::Value;

/// Verb of the assign-all update expression.
const UPDATE_VERB: &str = "SET";

/// Update item operation.
///
/// Every top-level field of `document` is assigned to the item; attributes the
/// document does not name are left unchanged. A missing item is created.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::{common, write};
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut key = common::key::PrimaryKey::new();
/// key.add_string_key("id", "1");
/// let update_item = write::update_item::UpdateItem {
///     key,
///     document: json!({"status": "done"}),
///     write_args: write::common::WriteArgs {
///         table_name: "orders".to_string(),
///     },
/// };
/// // Sends "SET status = :status" with {":status": S("done")}
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItem {
    /// The map document whose fields are assigned.
    pub document: Value,
    /// The primary key of the item to update.
    pub key: common::key::PrimaryKey,
    /// Additional write operation arguments (table name).
    pub write_args: write::common::WriteArgs,
}

impl TryFrom<UpdateItem> for client::UpdateItemRequest {
    type Error = error::Error;

    fn try_from(update_item: UpdateItem) -> error::Result<Self> {
        update_item.key.check()?;
        let update = common::ExpressionInput::assign_all(&update_item.document, UPDATE_VERB)?;
        let request = Self {
            table_name: update_item.write_args.table_name,
            key: update_item.key.render_into(common::key::KeyClause::new()),
            update_expression: update.expression,
            expression_attribute_values: update.expression_attribute_values,
        };
        Ok(request)
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    #[tracing::instrument(
        name = "dynamodb_document.update_item",
        skip_all,
        fields(table = %self.write_args.table_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<()>
    where
        C: client::StoreClient + ?Sized,
    {
        let request: client::UpdateItemRequest = self.try_into()?;
        client.update_item(request).await?;
        Ok(())
    }
}
