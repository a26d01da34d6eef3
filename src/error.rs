use thiserror::Error;

/// Errors surfaced while building or decoding a [`Resource`](crate::Resource)
#[derive(Debug, Error)]
pub enum Error {
    /// a constructor argument was rejected
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// the input was not valid JSON, or did not have the shape of a resource record
    #[error("unable to parse resource: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) const NAME_CONTAINS_SLASHES: &str = "Resource names cannot contain slashes";

/// `Result` specialized to this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
