//! Gate in front of every dashboard screen.

use learnx_core::error::{AdminError, Result};
use learnx_core::session::SessionStore;
use learnx_core::user::UserProfile;
use std::sync::Arc;

/// Admits callers only while a profile is cached.
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the cached profile, or `NotAuthenticated` so the caller can
    /// send the user to sign in.
    pub async fn require_user(&self) -> Result<UserProfile> {
        match self.store.current_user().await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!("No cached user, sign-in required");
                Err(AdminError::NotAuthenticated)
            }
        }
    }
}
