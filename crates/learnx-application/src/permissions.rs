//! Permissions page use case: the role-change request queue.

use learnx_core::error::{AdminError, Result};
use learnx_core::listing::{Pager, ROWS_PER_PAGE_OPTIONS};
use learnx_core::role_request::{
    RoleChangeRequest, RoleDecision, RoleRequestGateway, apply_decision,
};
use std::sync::Arc;

/// Rows shown per page until the user picks another size.
pub const DEFAULT_REQUEST_ROWS: usize = ROWS_PER_PAGE_OPTIONS[1];

/// Loads role-change requests and approves or rejects them.
///
/// A decision is validated locally, submitted to the server and then applied
/// to the single affected record; the list is not fetched again.
pub struct PermissionsUseCase {
    gateway: Arc<dyn RoleRequestGateway>,
    requests: Vec<RoleChangeRequest>,
    pager: Pager,
}

impl PermissionsUseCase {
    pub fn new(gateway: Arc<dyn RoleRequestGateway>) -> Self {
        Self::with_rows_per_page(gateway, DEFAULT_REQUEST_ROWS)
    }

    pub fn with_rows_per_page(gateway: Arc<dyn RoleRequestGateway>, rows_per_page: usize) -> Self {
        Self {
            gateway,
            requests: Vec::new(),
            pager: Pager::new(rows_per_page),
        }
    }

    /// Fetches every request. The previous list survives a failure.
    pub async fn load(&mut self) -> Result<usize> {
        match self.gateway.list_requests().await {
            Ok(requests) => {
                tracing::debug!("Loaded {} role requests", requests.len());
                self.requests = requests;
                Ok(self.requests.len())
            }
            Err(e) => {
                tracing::warn!("Failed to load role requests: {}", e);
                Err(e)
            }
        }
    }

    /// Approves a pending request and returns it with its new status.
    pub async fn accept(&mut self, id: i64) -> Result<RoleChangeRequest> {
        self.decide(id, RoleDecision::Approve).await
    }

    /// Rejects a pending request and returns it with its new status.
    pub async fn reject(&mut self, id: i64) -> Result<RoleChangeRequest> {
        self.decide(id, RoleDecision::Reject).await
    }

    async fn decide(&mut self, id: i64, decision: RoleDecision) -> Result<RoleChangeRequest> {
        self.find(id)
            .ok_or_else(|| AdminError::not_found("role request", id.to_string()))?
            .check_transition(decision)?;

        if let Err(e) = self.gateway.decide(id, decision).await {
            tracing::warn!("Failed to {} role request {}: {}", decision, id, e);
            return Err(e);
        }

        let updated = apply_decision(&mut self.requests, id, decision)?;
        tracing::debug!("Role request {} is now {}", id, updated.status);
        Ok(updated)
    }

    pub fn find(&self, id: i64) -> Option<&RoleChangeRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    pub fn requests(&self) -> &[RoleChangeRequest] {
        &self.requests
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pager.set_rows_per_page(rows_per_page);
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[RoleChangeRequest] {
        self.pager.slice(&self.requests)
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.requests.len())
    }
}
