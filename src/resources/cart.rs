//! Cart operations
//!
//! Each method issues exactly one request against the cart endpoints and
//! returns the remote's JSON response verbatim. No ordering is enforced or
//! assumed between calls; concurrent mutations are resolved by the remote's
//! own session semantics.

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Method,
    types::{ApiResponse, CartChange, CartUpdate, LineItem},
};
use serde::Serialize;

#[derive(Serialize)]
struct AddItemsBody {
    items: Vec<LineItem>,
}

/// Cart API resource.
#[derive(Clone)]
pub struct Cart {
    client: Client,
}

impl Cart {
    /// Create a new Cart resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Add a single item to the cart.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use cartkit::{Client, LineItem};
    /// # async fn example(client: Client) -> cartkit::Result<()> {
    /// let cart = client.cart().add_item(LineItem::new(39887860530).quantity(2)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_item(&self, item: LineItem) -> Result<ApiResponse> {
        self.add("add_item", vec![item]).await
    }

    /// Add several items to the cart in one request.
    pub async fn add_items(&self, items: Vec<LineItem>) -> Result<ApiResponse> {
        self.add("add_items", items).await
    }

    async fn add(&self, operation: &'static str, items: Vec<LineItem>) -> Result<ApiResponse> {
        let body = AddItemsBody { items };
        self.client
            .execute_json(operation, Method::POST, "/cart/add.js", &body)
            .await
    }

    /// Apply a [`CartChange`] to the cart.
    ///
    /// This is the full-control form of the three `change_item_by_*`
    /// façades; use it when the change carries properties or a selling
    /// plan.
    pub async fn change_item(&self, change: CartChange) -> Result<ApiResponse> {
        self.change("change_item", change).await
    }

    /// Change the quantity of a specific line, addressed by its unique
    /// line-item key.
    pub async fn change_item_by_key(
        &self,
        key: impl Into<String>,
        quantity: u32,
    ) -> Result<ApiResponse> {
        self.change("change_item_by_key", CartChange::by_key(key, quantity))
            .await
    }

    /// Change the quantity of the line at a 1-based position in the cart.
    pub async fn change_item_by_index(&self, line: u32, quantity: u32) -> Result<ApiResponse> {
        self.change("change_item_by_index", CartChange::by_index(line, quantity))
            .await
    }

    /// Change the quantity of every line matching a variant identifier.
    pub async fn change_item_by_variant(
        &self,
        variant_id: u64,
        quantity: u32,
    ) -> Result<ApiResponse> {
        self.change(
            "change_item_by_variant",
            CartChange::by_variant(variant_id, quantity),
        )
        .await
    }

    async fn change(&self, operation: &'static str, change: CartChange) -> Result<ApiResponse> {
        self.client
            .execute_json(operation, Method::POST, "/cart/change.js", &change)
            .await
    }

    /// Fetch the full cart snapshot.
    pub async fn get(&self) -> Result<ApiResponse> {
        self.client
            .execute_bare("get_cart", Method::GET, "/cart.js", &[], false)
            .await
    }

    /// Update the cart note and/or attributes.
    ///
    /// Fields absent from the update are left untouched by the remote.
    pub async fn update(&self, update: CartUpdate) -> Result<ApiResponse> {
        self.client
            .execute_json("update_cart", Method::POST, "/cart/update.js", &update)
            .await
    }

    /// Remove all items from the cart.
    pub async fn clear(&self) -> Result<ApiResponse> {
        self.client
            .execute_bare("clear_cart", Method::POST, "/cart/clear.js", &[], true)
            .await
    }
}

impl Resource for Cart {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_resource_creation() {
        let client = Client::new("https://shop.example.com");
        let cart = client.cart();
        let _ = cart.client();
    }

    #[test]
    fn test_add_items_body_shape() {
        let body = AddItemsBody {
            items: vec![LineItem::new(1), LineItem::new(2).quantity(3)],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "items": [
                    {"id": 1, "quantity": 1},
                    {"id": 2, "quantity": 3},
                ]
            })
        );
    }
}
