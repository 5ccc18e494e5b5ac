//! Error types for the LearnX admin toolkit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message returned for any failed password sign-in.
///
/// The underlying cause is logged but never handed back to the caller.
pub const SIGN_IN_FAILED_MESSAGE: &str = "An unknown error occurred";

/// Message returned when a non-administrator signs in successfully.
pub const NO_PERMISSION_MESSAGE: &str = "You have no permission to access this pages!";

/// A shared error type for every LearnX admin crate.
///
/// Variants follow the failure taxonomy of the admin API: transport failures
/// (`Transport`, `Http`), envelope-level business failures (`Envelope`) and
/// domain policy rejections (`PermissionDenied`). The remaining variants cover
/// local concerns such as storage, configuration and validation.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdminError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The envelope came back with `success: false` or without data
    #[error("API error{}: {message}", .code.map(|c| format!(" ({})", c)).unwrap_or_default())]
    Envelope { code: Option<i64>, message: String },

    /// Password sign-in failed for a reason that is not exposed to the caller
    #[error("Sign-in failed: {0}")]
    SignIn(String),

    /// Authentication succeeded but the account may not use this dashboard
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// No session is stored locally
    #[error("Not signed in")]
    NotAuthenticated,

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A role-change request was asked to leave a terminal state
    #[error("Request {id} cannot move from {from} to {to}")]
    InvalidTransition { id: i64, from: String, to: String },

    /// User supplied input was rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an Envelope error
    pub fn envelope(code: Option<i64>, message: impl Into<String>) -> Self {
        Self::Envelope {
            code,
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The generic sign-in failure carrying only the fixed message.
    pub fn sign_in_failed() -> Self {
        Self::SignIn(SIGN_IN_FAILED_MESSAGE.to_string())
    }

    /// The policy rejection for authenticated non-administrators.
    pub fn no_permission() -> Self {
        Self::PermissionDenied(NO_PERMISSION_MESSAGE.to_string())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the failure happened on the wire (no response or non-2xx).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Http { .. })
    }

    /// Check if the server rejected our credentials.
    ///
    /// A 401 means the stored token is no longer accepted; there is no
    /// refresh flow, so the only recovery is signing in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::Http { status: 401, .. })
    }

    /// Check if this is a policy rejection
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AdminError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for AdminError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, AdminError>`.
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_display_includes_code_when_present() {
        let with_code = AdminError::envelope(Some(404), "user not found");
        assert_eq!(with_code.to_string(), "API error (404): user not found");

        let without_code = AdminError::envelope(None, "boom");
        assert_eq!(without_code.to_string(), "API error: boom");
    }

    #[test]
    fn unauthorized_covers_missing_session_and_401() {
        assert!(AdminError::NotAuthenticated.is_unauthorized());
        assert!(
            AdminError::Http {
                status: 401,
                body: String::new()
            }
            .is_unauthorized()
        );
        assert!(
            !AdminError::Http {
                status: 500,
                body: String::new()
            }
            .is_unauthorized()
        );
    }

    #[test]
    fn sign_in_failure_uses_fixed_message() {
        assert_eq!(
            AdminError::sign_in_failed(),
            AdminError::SignIn(SIGN_IN_FAILED_MESSAGE.to_string())
        );
        assert!(AdminError::no_permission().is_permission_denied());
    }

    #[test]
    fn io_error_converts() {
        let err: AdminError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AdminError::Io { .. }));
    }
}
