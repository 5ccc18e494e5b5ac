//! Profile page use case.
//!
//! The API has no profile endpoint, so edits are written back to the locally
//! cached profile only.

use learnx_core::error::{AdminError, Result};
use learnx_core::session::SessionStore;
use learnx_core::user::{UserProfile, role_label};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Editable account details of the signed-in user.
///
/// The role is shown but cannot be changed from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    role: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            role: profile.role.clone().unwrap_or_default(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn role_label(&self) -> String {
        role_label(&self.role)
    }

    /// Checks the editable fields.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(AdminError::validation("Full name is required"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AdminError::validation("Email is required"));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(AdminError::validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }
}

pub struct ProfileUseCase {
    store: Arc<dyn SessionStore>,
}

impl ProfileUseCase {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The cached profile, without a network call.
    pub async fn current(&self) -> Result<Option<UserProfile>> {
        self.store.current_user().await
    }

    /// A form pre-filled with the cached profile.
    pub async fn form(&self) -> Result<ProfileForm> {
        let profile = self
            .current()
            .await?
            .ok_or(AdminError::NotAuthenticated)?;
        Ok(ProfileForm::from_profile(&profile))
    }

    /// Validates `form` and writes its name and email into the cached
    /// profile. Role, avatar and any other stored fields are kept.
    pub async fn save(&self, form: &ProfileForm) -> Result<UserProfile> {
        form.validate()?;
        let mut profile = self
            .current()
            .await?
            .ok_or(AdminError::NotAuthenticated)?;

        profile.full_name = Some(form.full_name.trim().to_string());
        profile.email = Some(form.email.trim().to_string());
        self.store.update_user(&profile).await?;
        tracing::debug!("Profile details saved for {}", profile.display_name());
        Ok(profile)
    }
}
