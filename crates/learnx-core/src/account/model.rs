//! Account models.

use crate::date::ApiDateTime;
use crate::error::{AdminError, Result};
use crate::user::role_label;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A granted authority as serialized by the backend's security layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub authority: String,
}

/// User record exactly as `GET /user` returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
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
    pub created_at: ApiDateTime,
    #[serde(default)]
    pub updated_at: Option<ApiDateTime>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub authorities: Vec<Authority>,
    #[serde(default = "default_true")]
    pub account_non_expired: bool,
    #[serde(default = "default_true")]
    pub account_non_locked: bool,
    #[serde(default = "default_true")]
    pub credentials_non_expired: bool,
}

fn default_true() -> bool {
    true
}

/// Activity state shown next to each account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Enabled and not locked or expired.
    Active,
    /// Locked, or the account or its credentials expired.
    Inactive,
    /// Not yet enabled; the user has not finished verification.
    Pending,
}

impl AccountStatus {
    pub fn key(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Hoạt động",
            AccountStatus::Inactive => "Không hoạt động",
            AccountStatus::Pending => "Chờ xác thực",
        }
    }

    /// Derives the status from the raw account flags.
    pub fn of(user: &RawUser) -> Self {
        if !user.enabled {
            AccountStatus::Pending
        } else if !user.account_non_locked
            || !user.account_non_expired
            || !user.credentials_non_expired
        {
            AccountStatus::Inactive
        } else {
            AccountStatus::Active
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AccountStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            "pending" => Ok(AccountStatus::Pending),
            other => Err(AdminError::validation(format!(
                "unknown account status '{}'",
                other
            ))),
        }
    }
}

/// View model for one row of the accounts table.
///
/// `role` already holds the display label, not the wire code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub avatar_url: Option<String>,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub status: AccountStatus,
}

impl From<RawUser> for Account {
    fn from(user: RawUser) -> Self {
        let status = AccountStatus::of(&user);
        Self {
            id: user.id.to_string(),
            avatar_url: user.avatar_url,
            full_name: user.full_name,
            email: user.email,
            role: role_label(&user.role),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "id": 42,
        "fullName": "Anna Lee",
        "email": "a@x.com",
        "avatarUrl": "https://cdn/x.png",
        "role": "STUDENT",
        "createdAt": [2025, 2, 1, 10, 0, 0],
        "updatedAt": null,
        "username": "a@x.com",
        "enabled": true,
        "authorities": [{"authority": "STUDENT"}],
        "accountNonExpired": true,
        "accountNonLocked": true,
        "credentialsNonExpired": true
    }"#;

    #[test]
    fn projects_raw_user_into_account() {
        let raw: RawUser = serde_json::from_str(RAW).unwrap();
        assert_eq!(raw.authorities[0].authority, "STUDENT");
        assert!(raw.updated_at.is_none());

        let account = Account::from(raw);
        assert_eq!(account.id, "42");
        assert_eq!(account.role, "Sinh viên");
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.avatar_url.as_deref(), Some("https://cdn/x.png"));
    }

    #[test]
    fn unknown_role_code_is_kept_verbatim() {
        let mut raw: RawUser = serde_json::from_str(RAW).unwrap();
        raw.role = "GUEST".to_string();
        assert_eq!(Account::from(raw).role, "GUEST");
    }

    #[test]
    fn status_follows_account_flags() {
        let mut raw: RawUser = serde_json::from_str(RAW).unwrap();
        raw.account_non_locked = false;
        assert_eq!(AccountStatus::of(&raw), AccountStatus::Inactive);

        raw.enabled = false;
        assert_eq!(AccountStatus::of(&raw), AccountStatus::Pending);
    }

    #[test]
    fn minimal_records_decode_with_defaults() {
        let raw: RawUser = serde_json::from_str(r#"{"id": 1, "role": "ADMIN"}"#).unwrap();
        assert!(raw.enabled);
        assert!(raw.created_at.is_missing());
        assert_eq!(Account::from(raw).status, AccountStatus::Active);
    }
}
