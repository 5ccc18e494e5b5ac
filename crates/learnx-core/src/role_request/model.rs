//! Role-change request models.

use crate::date::ApiDateTime;
use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a role-change request.
///
/// `Pending` is the only non-terminal state. Codes this client does not know
/// decode to `Unknown`, which offers no actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
            RequestStatus::Unknown => "UNKNOWN",
        }
    }

    /// Whether accept/reject actions are still offered.
    pub fn is_actionable(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            RequestStatus::Pending => StatusTone::Warning,
            RequestStatus::Approved => StatusTone::Success,
            RequestStatus::Rejected => StatusTone::Error,
            RequestStatus::Unknown => StatusTone::Neutral,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Colour family used to render a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Success,
    Error,
    Neutral,
}

/// The two one-way transitions out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleDecision {
    Approve,
    Reject,
}

impl RoleDecision {
    pub fn target_status(&self) -> RequestStatus {
        match self {
            RoleDecision::Approve => RequestStatus::Approved,
            RoleDecision::Reject => RequestStatus::Rejected,
        }
    }

    /// Action endpoint, relative to the API base.
    pub fn endpoint(&self, id: i64) -> String {
        match self {
            RoleDecision::Approve => format!("/roles/handle-change-role/{}", id),
            RoleDecision::Reject => format!("/roles/handle-reject/{}", id),
        }
    }
}

impl fmt::Display for RoleDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleDecision::Approve => f.write_str("approve"),
            RoleDecision::Reject => f.write_str("reject"),
        }
    }
}

/// Summary of the requesting user embedded in each request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUser {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

impl RequestUser {
    /// Avatar fallback: the uppercased first letter of the name.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// One row of the permissions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChangeRequest {
    pub id: i64,
    pub new_role: String,
    pub old_role: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: ApiDateTime,
    #[serde(default)]
    pub updated_at: Option<ApiDateTime>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
    pub user: RequestUser,
}

impl RoleChangeRequest {
    /// Checks that `decision` is allowed from the current status.
    pub fn check_transition(&self, decision: RoleDecision) -> Result<()> {
        if self.status.is_actionable() {
            Ok(())
        } else {
            Err(AdminError::InvalidTransition {
                id: self.id,
                from: self.status.to_string(),
                to: decision.target_status().to_string(),
            })
        }
    }
}

/// Patches the single request with `id` to the decision's target status.
///
/// Every other record is left untouched. Returns the updated record.
pub fn apply_decision(
    requests: &mut [RoleChangeRequest],
    id: i64,
    decision: RoleDecision,
) -> Result<RoleChangeRequest> {
    let request = requests
        .iter_mut()
        .find(|request| request.id == id)
        .ok_or_else(|| AdminError::not_found("role request", id.to_string()))?;
    request.check_transition(decision)?;
    request.status = decision.target_status();
    Ok(request.clone())
}
