//! Admin-only user management.

use reqwest::Method;
use tracing::info;

use cemention_core::{Role, User};

use super::ApiClient;
use crate::error::ClientResult;

/// `/admin/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        AdminApi { client }
    }

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        let url = self.client.endpoint(&["admin", "users"])?;
        self.client.send(self.client.authed(Method::GET, url)?).await
    }

    /// Changes a user's role, which changes the prices they see.
    pub async fn set_role(&self, user_id: &str, role: Role) -> ClientResult<()> {
        let mut url = self.client.endpoint(&["admin", "users", user_id])?;
        url.query_pairs_mut().append_pair("role", role.as_str());

        self.client
            .send_message(self.client.authed(Method::PUT, url)?)
            .await?;

        info!(user_id = %user_id, role = %role, "User role updated");
        Ok(())
    }
}
