//! Error types returned by every operation of the crate.

use crate::client;

use thiserror::Error;

/// Errors that can occur while building, dispatching or decoding an operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value violated a precondition (e.g. a top-level document that is not a map).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store client reported a failure.
    #[error("store error: {0}")]
    Store(#[from] client::StoreError),

    /// A typed key could not be serialized into an attribute value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_dynamo::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
