//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: Signed-in user profile
//! - `role`: Server-side role codes and their display labels

mod model;
mod role;

// Re-export public API
pub use model::UserProfile;
pub use role::{Role, role_label};
