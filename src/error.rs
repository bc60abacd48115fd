//! Error types for the cart client
//!
//! Failures follow a two-tier taxonomy: anything that goes wrong while
//! performing the network exchange or decoding the response body is a
//! [`TransportError`], and every public operation surfaces exactly one
//! variant, [`Error::OperationFailed`], which renders a fixed generic
//! message while keeping the underlying cause reachable through
//! [`std::error::Error::source`].

use thiserror::Error;

/// Result type alias for operations that can fail with a cart client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the cart client.
#[derive(Debug, Error)]
pub enum Error {
    /// A cart operation did not complete.
    ///
    /// This is the only error a request-issuing operation ever surfaces,
    /// regardless of whether the remote rejected the request, the network
    /// was unreachable, or the response body was not JSON. The display
    /// message is intentionally fixed; the original failure is available
    /// via [`Error::cause`] or [`std::error::Error::source`], and is also
    /// written to the log channel when error logging is enabled.
    #[error("cart request failed")]
    OperationFailed {
        /// Name of the operation that failed.
        operation: &'static str,
        /// The underlying transport or decode failure.
        #[source]
        source: TransportError,
    },

    /// The configured base URL could not be parsed or uses an unsupported
    /// scheme.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid HTTP header name.
    #[error("invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),
}

impl Error {
    /// The name of the failed operation, if this is an operation failure.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::OperationFailed { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// The underlying transport failure, if this is an operation failure.
    pub fn cause(&self) -> Option<&TransportError> {
        match self {
            Error::OperationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Internal failure while performing an HTTP exchange.
///
/// Never surfaced directly: operations convert every `TransportError` into
/// [`Error::OperationFailed`] at the boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be constructed from the base URL and path.
    #[error("invalid request URL: {0}")]
    Url(String),

    /// Network or connection failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// The remote answered with a non-success status code.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The request or response body could not be encoded/decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TransportError {
    /// HTTP status code, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
