//! Role-change request endpoints.

use crate::http::PrivateHttpClient;
use async_trait::async_trait;
use learnx_core::error::Result;
use learnx_core::role_request::{RoleChangeRequest, RoleDecision, RoleRequestGateway};

const REQUESTS_PATH: &str = "/roles/request";

/// [`RoleRequestGateway`] over the `/roles` endpoints.
#[derive(Clone)]
pub struct RoleRequestsApi {
    http: PrivateHttpClient,
}

impl RoleRequestsApi {
    pub fn new(http: PrivateHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoleRequestGateway for RoleRequestsApi {
    async fn list_requests(&self) -> Result<Vec<RoleChangeRequest>> {
        self.http
            .get_envelope::<Vec<RoleChangeRequest>>(REQUESTS_PATH)
            .await?
            .into_data()
    }

    async fn decide(&self, id: i64, decision: RoleDecision) -> Result<()> {
        self.http.post_action(&decision.endpoint(id)).await
    }
}
