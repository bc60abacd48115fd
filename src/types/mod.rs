//! Request payload types for the cart endpoints
//!
//! Every optional field is an `Option` serialized with explicit presence
//! checks: a field appears in the outgoing body exactly when the caller
//! supplied it, and falsy-but-meaningful values (quantity 0, empty strings)
//! are always sent.

pub use cart::{CartChange, CartUpdate, LineItem, LineTarget};
pub use shipping::ShippingAddress;

mod cart;
mod shipping;

/// Opaque JSON value returned by the remote cart API.
///
/// The client parses response bodies as JSON and passes them through
/// verbatim; it never interprets their shape.
pub type ApiResponse = serde_json::Value;
