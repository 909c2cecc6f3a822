//! # Products
//!
//! Catalog reads are public; writes need an admin token.

use reqwest::Method;
use tracing::{debug, info};

use cemention_core::{CoreError, Product, ProductDraft};

use super::ApiClient;
use crate::error::ClientResult;

/// `/products` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ProductsApi { client }
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        let url = self.client.endpoint(&["products"])?;
        let products: Vec<Product> = self
            .client
            .send(self.client.request(Method::GET, url))
            .await?;

        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    /// Finds one product.
    ///
    /// The backend has no single-product read, so this scans the catalog.
    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.list()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
    }

    pub async fn create(&self, draft: &ProductDraft) -> ClientResult<Product> {
        let url = self.client.endpoint(&["products"])?;
        let product: Product = self
            .client
            .send(self.client.authed(Method::POST, url)?.json(draft))
            .await?;

        info!(product_id = %product.id, brand = %product.brand, "Product created");
        Ok(product)
    }

    /// Replaces every editable field of product `id`.
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> ClientResult<Product> {
        let url = self.client.endpoint(&["products", id])?;
        let product: Product = self
            .client
            .send(self.client.authed(Method::PUT, url)?.json(draft))
            .await?;

        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let url = self.client.endpoint(&["products", id])?;
        self.client
            .send_message(self.client.authed(Method::DELETE, url)?)
            .await?;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
