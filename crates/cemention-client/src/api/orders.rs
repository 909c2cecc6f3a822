//! # Orders
//!
//! Customers see their own orders; admins see every order and move them
//! through their status.
//!
//! ## Status Updates
//! The new status travels as a query parameter:
//! `PUT /orders/{id}?status=approved`.

use reqwest::Method;
use tracing::info;

use cemention_core::{CoreError, NewOrder, Order, OrderStatus};

use super::ApiClient;
use crate::error::ClientResult;

/// `/orders` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        OrdersApi { client }
    }

    /// Places an order. The backend empties the cart on success.
    pub async fn place(&self, order: &NewOrder) -> ClientResult<Order> {
        let url = self.client.endpoint(&["orders"])?;
        let placed: Order = self
            .client
            .send(self.client.authed(Method::POST, url)?.json(order))
            .await?;

        info!(
            order_id = %placed.id,
            total = %placed.total_amount,
            method = %placed.payment_method,
            "Order placed"
        );
        Ok(placed)
    }

    /// The caller's orders, or all orders for an admin.
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        let url = self.client.endpoint(&["orders"])?;
        self.client.send(self.client.authed(Method::GET, url)?).await
    }

    /// Finds an order by full id or by its 8-character reference.
    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        let wanted = id.trim();
        self.list()
            .await?
            .into_iter()
            .find(|o| o.id == wanted || o.reference().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::OrderNotFound(wanted.to_string()).into())
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        let mut url = self.client.endpoint(&["orders", id])?;
        url.query_pairs_mut().append_pair("status", status.as_str());

        self.client
            .send_message(self.client.authed(Method::PUT, url)?)
            .await?;

        info!(order_id = %id, status = %status, "Order status updated");
        Ok(())
    }
}
