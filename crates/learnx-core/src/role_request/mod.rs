//! Role-change request domain module.
//!
//! # Module Structure
//!
//! - `model`: Request records, status, and the accept/reject state machine
//! - `gateway`: Trait for listing requests and submitting decisions

mod gateway;
mod model;

pub use gateway::RoleRequestGateway;
pub use model::{
    RequestStatus, RequestUser, RoleChangeRequest, RoleDecision, StatusTone, apply_decision,
};
