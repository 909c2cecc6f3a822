//! The caller's server-side cart.
//!
//! The backend keys lines by `productId`: posting a line for a product
//! already in the cart only changes its quantity. The stored price stays.

use reqwest::Method;
use tracing::debug;

use cemention_core::{Cart, CartLine};

use super::ApiClient;
use crate::error::ClientResult;

/// `/cart` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CartApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CartApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        CartApi { client }
    }

    pub async fn get(&self) -> ClientResult<Cart> {
        let url = self.client.endpoint(&["cart"])?;
        self.client.send(self.client.authed(Method::GET, url)?).await
    }

    /// Adds `line`, or sets the quantity of the line for the same product.
    pub async fn upsert(&self, line: &CartLine) -> ClientResult<Cart> {
        debug!(
            product_id = %line.product_id,
            quantity = line.quantity,
            price = %line.price,
            "Upserting cart line"
        );
        let url = self.client.endpoint(&["cart"])?;
        self.client
            .send(self.client.authed(Method::POST, url)?.json(line))
            .await
    }

    pub async fn remove(&self, product_id: &str) -> ClientResult<()> {
        let url = self.client.endpoint(&["cart", product_id])?;
        self.client
            .send_message(self.client.authed(Method::DELETE, url)?)
            .await
    }

    pub async fn clear(&self) -> ClientResult<()> {
        let url = self.client.endpoint(&["cart"])?;
        self.client
            .send_message(self.client.authed(Method::DELETE, url)?)
            .await
    }
}
