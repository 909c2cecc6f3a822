//! # REST API
//!
//! Typed access to the storefront backend.
//!
//! ## Resource Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Storefront / CLI                                                      │
//! │       │                                                                 │
//! │       │  api.products().list()                                         │
//! │       ▼                                                                 │
//! │  ProductsApi<'_>  ──borrows──►  ApiClient                              │
//! │  ├── list()                      ├── reqwest::Client (timeout)         │
//! │  ├── create(draft)               ├── base URL  <backend>/api           │
//! │  ├── update(id, draft)           └── bearer token (optional)           │
//! │  └── delete(id)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTP JSON  ──non-2xx──►  ClientError::from_status(code, {"detail"})   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Resources
//!
//! - [`AuthApi`] - register, login, current user
//! - [`ProductsApi`] - catalog and admin product management
//! - [`CartApi`] - the server-side cart
//! - [`OrdersApi`] - placed orders
//! - [`RequestOrdersApi`] - bulk order inquiries
//! - [`AdminApi`] - user management

pub mod admin;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;
pub mod request_orders;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use cart::CartApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use request_orders::RequestOrdersApi;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// `{"message": "..."}` bodies returned by delete and status updates.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

/// HTTP client for the storefront backend.
///
/// ## Usage
/// ```rust,ignore
/// let mut api = ApiClient::new(&config)?;
/// let session = api.auth().login(&credentials).await?;
/// api.set_token(Some(session.token.clone()));
///
/// let cart = api.cart().get().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the backend named in `config`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("cemention/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ApiClient {
            http,
            base: config.api_base_url()?,
            token: None,
        })
    }

    /// Attaches a bearer token to every following request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // =========================================================================
    // Resources
    // =========================================================================

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn cart(&self) -> CartApi<'_> {
        CartApi::new(self)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    pub fn request_orders(&self) -> RequestOrdersApi<'_> {
        RequestOrdersApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    /// `<base>/<segments...>`, each segment percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// A request that may go out without a token.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(method = %method, url = %url, "API request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// A request that needs a logged-in session.
    pub(crate) fn authed(&self, method: Method, url: Url) -> ClientResult<RequestBuilder> {
        if self.token.is_none() {
            return Err(ClientError::NotLoggedIn);
        }
        Ok(self.request(method, url))
    }

    /// Sends `request` and decodes a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "API request failed");
            return Err(ClientError::from_status(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sends `request`, expecting a `{"message"}` body.
    pub(crate) async fn send_message(&self, request: RequestBuilder) -> ClientResult<()> {
        let reply: MessageResponse = self.send(request).await?;
        debug!(message = %reply.message, "API acknowledged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client();
        assert_eq!(
            api.endpoint(&["products", "abc-123"]).unwrap().as_str(),
            "http://localhost:8000/api/products/abc-123"
        );
        assert_eq!(
            api.endpoint(&["request-orders"]).unwrap().as_str(),
            "http://localhost:8000/api/request-orders"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let url = client().endpoint(&["cart", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/cart/a%2Fb%20c");
    }

    #[test]
    fn test_authed_requires_token() {
        let api = client();
        let url = api.endpoint(&["cart"]).unwrap();
        assert!(matches!(api.authed(Method::GET, url.clone()), Err(ClientError::NotLoggedIn)));

        let api = api.with_token("jwt");
        assert!(api.authed(Method::GET, url).is_ok());
        assert_eq!(api.token(), Some("jwt"));
    }
}
