//! Role codes and their localized labels.

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of roles the backend assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// Wire code, e.g. `ADMIN`.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }

    /// Localized label shown in account tables.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Quản trị viên",
            Role::Teacher => "Giảng viên",
            Role::Student => "Sinh viên",
        }
    }

    /// Looks up a role by its wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = AdminError;

    /// Accepts either the wire code or the filter key, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AdminError::validation(format!("unknown role '{}'", s)))
    }
}

/// Maps a server role code to its display label.
///
/// Unrecognized codes pass through unchanged.
pub fn role_label(code: &str) -> String {
    Role::from_code(code)
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| code.to_string())
}
