//! Shipping-rate operations
//!
//! Rate computation is asynchronous on the remote side: `prepare` triggers
//! it, `poll` fetches whatever has been computed so far. The client does
//! not sequence the two; callers decide when to poll.

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Method,
    types::{ApiResponse, ShippingAddress},
};

/// Shipping rates API resource.
#[derive(Clone)]
pub struct ShippingRates {
    client: Client,
}

impl ShippingRates {
    /// Create a new ShippingRates resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Trigger shipping-rate computation for a destination.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use cartkit::{Client, ShippingAddress};
    /// # async fn example(client: Client) -> cartkit::Result<()> {
    /// let address = ShippingAddress::new("K1N 5H3", "Canada", "Ontario");
    /// client.shipping_rates().prepare(&address).await?;
    /// let rates = client.shipping_rates().poll(&address).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn prepare(&self, address: &ShippingAddress) -> Result<ApiResponse> {
        self.client
            .execute_bare(
                "prepare_shipping_rates",
                Method::POST,
                "/cart/prepare_shipping_rates.json",
                &address.query_pairs(),
                true,
            )
            .await
    }

    /// Poll for rates previously triggered with [`prepare`](Self::prepare).
    pub async fn poll(&self, address: &ShippingAddress) -> Result<ApiResponse> {
        self.client
            .execute_bare(
                "poll_shipping_rates",
                Method::GET,
                "/cart/async_shipping_rates.json",
                &address.query_pairs(),
                false,
            )
            .await
    }
}

impl Resource for ShippingRates {
    fn client(&self) -> &Client {
        &self.client
    }
}
