/// Arguments common to all write operations (Put, Update, Delete).
///
/// ```rust
/// use dynamodb_document::write;
///
/// let write_args = write::common::WriteArgs {
///     table_name: "users".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct WriteArgs {
    /// The name of the table to write to.
    pub table_name: String,
}
