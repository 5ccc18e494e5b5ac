//! Authentication capabilities.
//!
//! Each capability is its own trait. A strategy implements only the ones it
//! supports, so asking the password strategy for an OAuth sign-in is a
//! compile error instead of a runtime "not implemented" reply.

use crate::error::Result;
use crate::user::UserProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Credentials for the password flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInWithPasswordParams {
    pub email: String,
    pub password: String,
}

impl SignInWithPasswordParams {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Identity providers an OAuth strategy may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OAuthProvider {
    Google,
    Database,
}

/// Input for password reset and update flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordParams {
    pub email: String,
}

/// Core capability every dashboard strategy provides.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Authenticates and persists a session on acceptance.
    ///
    /// Returns the cached profile of the accepted user.
    async fn sign_in_with_password(&self, params: SignInWithPasswordParams) -> Result<UserProfile>;

    /// Returns the locally cached profile without contacting the server.
    async fn get_user(&self) -> Result<Option<UserProfile>>;

    /// Forgets the local session.
    async fn sign_out(&self) -> Result<()>;
}

/// Social sign-in capability.
#[async_trait]
pub trait OAuthSignIn: Send + Sync {
    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<UserProfile>;
}

/// Password recovery capability.
#[async_trait]
pub trait PasswordRecovery: Send + Sync {
    async fn reset_password(&self, params: ResetPasswordParams) -> Result<()>;

    async fn update_password(&self, params: ResetPasswordParams) -> Result<()>;
}
