//! User directory endpoint.

use crate::http::PrivateHttpClient;
use async_trait::async_trait;
use learnx_core::account::{AccountSource, RawUser};
use learnx_core::error::Result;

const USERS_PATH: &str = "/user";

/// [`AccountSource`] backed by `GET /user`.
#[derive(Clone)]
pub struct AccountsApi {
    http: PrivateHttpClient,
}

impl AccountsApi {
    pub fn new(http: PrivateHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AccountSource for AccountsApi {
    async fn list_users(&self) -> Result<Vec<RawUser>> {
        let users = self
            .http
            .get_envelope::<Vec<RawUser>>(USERS_PATH)
            .await?
            .into_data()?;
        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }
}
