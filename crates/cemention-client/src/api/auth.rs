//! Registration, login, and the current user.

use reqwest::Method;
use tracing::info;

use cemention_core::{Credentials, Registration, User};

use super::ApiClient;
use crate::error::ClientResult;
use crate::session::Session;

/// `/auth/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        AuthApi { client }
    }

    /// Creates an account and returns its first session.
    pub async fn register(&self, form: &Registration) -> ClientResult<Session> {
        let url = self.client.endpoint(&["auth", "register"])?;
        let session: Session = self
            .client
            .send(self.client.request(Method::POST, url).json(form))
            .await?;

        info!(user_id = %session.user.id, role = %session.user.role, "Registered");
        Ok(session)
    }

    /// Exchanges credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Session> {
        let url = self.client.endpoint(&["auth", "login"])?;
        let session: Session = self
            .client
            .send(self.client.request(Method::POST, url).json(credentials))
            .await?;

        info!(user_id = %session.user.id, role = %session.user.role, "Logged in");
        Ok(session)
    }

    /// The user the current token belongs to.
    pub async fn me(&self) -> ClientResult<User> {
        let url = self.client.endpoint(&["auth", "me"])?;
        self.client.send(self.client.authed(Method::GET, url)?).await
    }
}
