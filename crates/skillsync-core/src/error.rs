//! Error types.
//!
//! `ApiError` covers every way a store call can fail. Callers are not
//! expected to branch on the variant: the binder only distinguishes success
//! from failure, the variants exist for messages and logs.

use thiserror::Error;

/// Errors that can occur when talking to the assessments endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape the operation expects.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// An explicitly configured request timeout elapsed.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A non-HTTP store refused the operation.
    #[error("store error: {0}")]
    Backend(String),
}

/// A quick-add submission that cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown skill level: {0}")]
    InvalidLevel(String),
}

/// Failure of a user-triggered binder action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
