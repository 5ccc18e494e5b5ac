//! Password sign-in against `/auth/authenticate`.

use crate::http::HttpClient;
use async_trait::async_trait;
use learnx_core::auth::{AuthStrategy, SignInWithPasswordParams};
use learnx_core::error::{AdminError, Result};
use learnx_core::session::{Session, SessionStore};
use learnx_core::user::{Role, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const AUTHENTICATE_PATH: &str = "/auth/authenticate";

#[derive(Debug, Serialize)]
struct AuthenticateRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    avatar: String,
    #[serde(default)]
    role: String,
}

/// The password strategy of the dashboard.
///
/// Only administrators are admitted; any other role is turned away after a
/// successful authentication without touching the session store.
pub struct PasswordAuthClient {
    http: HttpClient,
    store: Arc<dyn SessionStore>,
}

impl PasswordAuthClient {
    pub fn new(http: HttpClient, store: Arc<dyn SessionStore>) -> Self {
        Self { http, store }
    }

    async fn authenticate(&self, params: &SignInWithPasswordParams) -> Result<AuthResponse> {
        let body = AuthenticateRequest {
            email: &params.email,
            password: &params.password,
        };
        self.http
            .post_envelope::<_, AuthResponse>(AUTHENTICATE_PATH, &body)
            .await?
            .into_data()
    }
}

#[async_trait]
impl AuthStrategy for PasswordAuthClient {
    async fn sign_in_with_password(&self, params: SignInWithPasswordParams) -> Result<UserProfile> {
        let auth = match self.authenticate(&params).await {
            Ok(auth) => auth,
            Err(e) => {
                tracing::error!("Sign in with password error: {}", e);
                return Err(AdminError::sign_in_failed());
            }
        };

        if Role::from_code(&auth.role) != Some(Role::Admin) {
            tracing::warn!("Rejected sign-in for {} with role {}", auth.email, auth.role);
            return Err(AdminError::no_permission());
        }

        let user = UserProfile::new(auth.full_name, auth.email, auth.avatar, auth.role);
        self.store
            .save(&Session::new(auth.access_token, auth.refresh_token, user.clone()))
            .await?;
        tracing::debug!("User logged in: {}", user.display_name());
        Ok(user)
    }

    async fn get_user(&self) -> Result<Option<UserProfile>> {
        self.store.current_user().await
    }

    async fn sign_out(&self) -> Result<()> {
        self.store.clear().await
    }
}
