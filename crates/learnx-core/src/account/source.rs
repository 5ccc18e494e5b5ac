//! Account source trait.

use super::model::RawUser;
use crate::error::Result;
use async_trait::async_trait;

/// Where the user directory comes from.
///
/// Decouples the accounts use case from the HTTP client so it can be
/// exercised against in-memory fixtures.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Fetches every user record visible to the signed-in administrator.
    async fn list_users(&self) -> Result<Vec<RawUser>>;
}
