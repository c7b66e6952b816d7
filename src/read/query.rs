use crate::{client, common, error, read};

use serde_json::Value;

/// Query operation.
///
/// The key condition is written by the caller; its placeholder values come from the
/// top-level fields of `expression_values`, each prefixed with `:`.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_document::read;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     key_condition_expression: "pk = :pk".to_string(),
///     expression_values: json!({"pk": "user#1"}),
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let documents = query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// Map document supplying the placeholder values; `null` means none.
    pub expression_values: Value,
    /// Secondary index to query; `None` or an empty name queries the base table.
    pub index_name: Option<String>,
    /// The key condition expression, e.g. `pk = :pk`.
    pub key_condition_expression: String,
    /// Additional read operation arguments (table name, number decoding).
    pub read_args: read::common::ReadArgs,
}

impl TryFrom<Query> for client::QueryRequest {
    type Error = error::Error;

    fn try_from(query: Query) -> error::Result<Self> {
        let key_condition = match &query.expression_values {
            Value::Null => common::ExpressionInput {
                expression: query.key_condition_expression,
                ..Default::default()
            },
            values => {
                common::ExpressionInput::with_values(query.key_condition_expression, values)?
            }
        };
        let index_name = query.index_name.filter(|index_name| !index_name.is_empty());
        let request = Self {
            table_name: query.read_args.table_name,
            index_name,
            key_condition_expression: key_condition.expression,
            expression_attribute_values: key_condition.expression_attribute_values,
        };
        Ok(request)
    }
}

impl Query {
    /// Execute the query operation.
    ///
    /// Only the first page is read. Returns a list document, empty when nothing matches.
    #[tracing::instrument(
        name = "dynamodb_document.query",
        skip_all,
        fields(table = %self.read_args.table_name, index = ?self.index_name),
        err
    )]
    pub async fn send<C>(self, client: &C) -> error::Result<Value>
    where
        C: client::StoreClient + ?Sized,
    {
        let number_decoding = self.read_args.number_decoding;
        let request: client::QueryRequest = self.try_into()?;
        let items = client.query(request).await?;
        Ok(common::value::decode_items(&items, number_decoding))
    }
}
