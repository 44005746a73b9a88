//! Error types for the API client.

use crate::query::ParamKind;

/// Errors that can occur when building or dispatching API requests.
///
/// HTTP-level failures (4xx/5xx) are deliberately *not* represented here:
/// the remote API's error responses are themselves under test, so they come
/// back as ordinary [`crate::ApiResponse`] values with status and body intact.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed with an empty or malformed base URL.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A request was built with invalid input, e.g. an empty path.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A parameter object's runtime value did not match the kind declared
    /// in its [`crate::ParamSpec`] table. This is a programming error in
    /// the table or the `QueryParams` impl, not a user error.
    #[error("field `{field}` does not match its declared kind {expected:?} (got {actual:?})")]
    InvalidFieldKind {
        field: &'static str,
        expected: ParamKind,
        /// `None` means the parameter object did not supply the field at all.
        actual: Option<ParamKind>,
    },
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The request failed at the transport level (connection refused,
    /// DNS failure, body read error).
    #[error("request failed")]
    RequestFailed,
    /// A success response carried a body that does not match the expected model.
    #[error("failed to deserialize response body")]
    Deserialize(#[from] serde_json::Error),
}
