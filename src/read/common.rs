use crate::common::value;

/// Arguments common to all read operations (GetItem, Query, Scan).
///
/// ```rust
/// use dynamodb_document::{common::value, read};
///
/// let read_args = read::common::ReadArgs {
///     table_name: "users".to_string(),
///     number_decoding: value::NumberDecoding::Parsed,
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// How numbers in returned items are decoded.
    ///
    /// Defaults to keeping the decimal text, which never loses precision.
    pub number_decoding: value::NumberDecoding,
    /// The name of the table to read from.
    pub table_name: String,
}
