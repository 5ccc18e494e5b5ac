//! UserProfile domain model.

use super::role::Role;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the signed-in user as cached by the session store.
///
/// Only the display fields are typed; anything else the server or an older
/// client wrote is kept in `extra` so a round trip through the store is
/// lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            avatar_url: Some(avatar_url.into()),
            role: Some(role.into()),
            extra: Map::new(),
        }
    }

    /// Whether the cached role is the administrative one.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().and_then(Role::from_code) == Some(Role::Admin)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let json = r#"{"fullName":"Ada","email":"ada@x.com","role":"ADMIN","theme":"dark"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.extra.get("theme"), Some(&Value::from("dark")));
        assert!(profile.avatar_url.is_none());

        let back: Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["theme"], "dark");
        assert_eq!(back["fullName"], "Ada");
    }

    #[test]
    fn admin_detection_uses_wire_code() {
        assert!(UserProfile::new("A", "a@x.com", "", "ADMIN").is_admin());
        assert!(!UserProfile::new("B", "b@x.com", "", "TEACHER").is_admin());
        assert!(!UserProfile::default().is_admin());
    }
}
