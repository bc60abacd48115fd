//! Cart API endpoint groups
//!
//! Operations are organized by resource: [`Cart`] for the cart itself and
//! [`ShippingRates`] for rate computation.

pub mod cart;
pub mod shipping;

pub use cart::Cart;
pub use shipping::ShippingRates;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
