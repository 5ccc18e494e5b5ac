//! Session store trait.
//!
//! Defines the single interface through which tokens and the cached profile
//! are read and written.

use super::model::Session;
use crate::error::Result;
use crate::user::UserProfile;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Persistent home of the current session.
///
/// Implementations must not cache reads: every call reflects what is stored
/// right now, so a sign-out in another process is seen by the next request.
///
/// Tokens and profile are stored independently (cookies and local storage in
/// the browser this mirrors), which is why they are exposed separately.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the bearer token, if any.
    async fn access_token(&self) -> Result<Option<String>>;

    /// Returns the refresh token, if any.
    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Returns the cached profile, if any.
    async fn current_user(&self) -> Result<Option<UserProfile>>;

    /// Persists tokens and profile of a freshly accepted sign-in.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Replaces the cached profile, leaving the tokens alone.
    async fn update_user(&self, user: &UserProfile) -> Result<()>;

    /// Removes tokens and profile. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;

    /// Returns the complete session when tokens and profile are all present.
    async fn load(&self) -> Result<Option<Session>> {
        let access_token = self.access_token().await?;
        let refresh_token = self.refresh_token().await?;
        let user = self.current_user().await?;
        Ok(match (access_token, refresh_token, user) {
            (Some(access_token), Some(refresh_token), Some(user)) => {
                Some(Session::new(access_token, refresh_token, user))
            }
            _ => None,
        })
    }
}

#[derive(Debug, Default)]
struct MemorySlots {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<UserProfile>,
}

/// In-process session store.
///
/// Used by tests and by embedders that keep the session for the lifetime of
/// the process only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: RwLock<MemorySlots>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            slots: RwLock::new(MemorySlots {
                access_token: Some(session.access_token),
                refresh_token: Some(session.refresh_token),
                user: Some(session.user),
            }),
        }
    }

    /// Overwrites only the access token.
    pub async fn set_access_token(&self, token: Option<String>) {
        self.slots.write().await.access_token = token;
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.slots.read().await.access_token.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.slots.read().await.refresh_token.clone())
    }

    async fn current_user(&self) -> Result<Option<UserProfile>> {
        Ok(self.slots.read().await.user.clone())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.access_token = Some(session.access_token.clone());
        slots.refresh_token = Some(session.refresh_token.clone());
        slots.user = Some(session.user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &UserProfile) -> Result<()> {
        self.slots.write().await.user = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slots.write().await = MemorySlots::default();
        Ok(())
    }
}
