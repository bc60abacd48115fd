//! HTTP transport layer
//!
//! A thin wrapper over `reqwest` that performs exactly one exchange per
//! request: no retries, no middleware, no backoff. Failures at this layer
//! are [`TransportError`](crate::TransportError)s; operations convert them
//! into the surfaced error at the resource boundary.

pub use request::RequestBuilder;
pub use response::Response;
pub(crate) use transport::Transport;

mod request;
mod response;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
