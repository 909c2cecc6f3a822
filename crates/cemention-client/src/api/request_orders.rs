//! Bulk order inquiries. These carry no prices.

use reqwest::Method;
use tracing::info;

use cemention_core::{OrderStatus, RequestOrder, RequestOrderDraft};

use super::ApiClient;
use crate::error::ClientResult;

/// `/request-orders` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RequestOrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RequestOrdersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        RequestOrdersApi { client }
    }

    pub async fn create(&self, draft: &RequestOrderDraft) -> ClientResult<RequestOrder> {
        let url = self.client.endpoint(&["request-orders"])?;
        let created: RequestOrder = self
            .client
            .send(self.client.authed(Method::POST, url)?.json(draft))
            .await?;

        info!(request_id = %created.id, quantity = created.quantity, "Request order submitted");
        Ok(created)
    }

    pub async fn list(&self) -> ClientResult<Vec<RequestOrder>> {
        let url = self.client.endpoint(&["request-orders"])?;
        self.client.send(self.client.authed(Method::GET, url)?).await
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        let mut url = self.client.endpoint(&["request-orders", id])?;
        url.query_pairs_mut().append_pair("status", status.as_str());

        self.client
            .send_message(self.client.authed(Method::PUT, url)?)
            .await?;

        info!(request_id = %id, status = %status, "Request order status updated");
        Ok(())
    }
}
