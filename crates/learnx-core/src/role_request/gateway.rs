//! Role-request gateway trait.

use super::model::{RoleChangeRequest, RoleDecision};
use crate::error::Result;
use async_trait::async_trait;

/// Remote side of the permissions workflow.
///
/// Implementations perform the request only; keeping the local list in sync
/// is the caller's job.
#[async_trait]
pub trait RoleRequestGateway: Send + Sync {
    /// Lists every role-change request.
    async fn list_requests(&self) -> Result<Vec<RoleChangeRequest>>;

    /// Submits an approval or rejection for the request with `id`.
    async fn decide(&self, id: i64, decision: RoleDecision) -> Result<()>;
}
