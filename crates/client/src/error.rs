//! Client error types.

use thiserror::Error;

/// Errors surfaced by client operations.
///
/// Nothing here is retried internally; every failure propagates unchanged to
/// the caller of the top-level operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The account has never been authorized on this client.
    #[error("account is not authorized; call authorize_account first")]
    Unauthenticated,

    /// The authorize endpoint rejected the credentials or was unreachable.
    #[error("authorization failed: {0}")]
    Authentication(String),

    /// A local file could not be opened or read.
    #[error("file access error: {0}")]
    FileAccess(#[from] std::io::Error),

    /// Transport failure before the service produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success response from an authenticated endpoint, body verbatim.
    #[error("API error ({status}): {body}")]
    RemoteApi {
        /// HTTP status code.
        status: u16,
        /// The service's error body, unparsed.
        body: String,
    },

    /// A success response whose body did not match the wire contract.
    #[error("unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Lookup by name found nothing.
    #[error("bucket not found: {0}")]
    NotFound(String),

    /// Client construction or URL building failed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
