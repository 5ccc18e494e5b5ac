//! Unified path management for learnx-admin files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/learnx-admin/          # Config directory
//! ├── config.toml                  # Application configuration
//! ├── session/                     # Signed-in session
//! │   ├── cookies.json             # access_token, refresh_token
//! │   └── local_storage.json       # logged_user
//! └── logs/                        # Application logs
//!     └── learnx-admin.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "learnx-admin";

/// Environment variable that relocates the whole tree.
pub const CONFIG_DIR_ENV: &str = "LEARNX_CONFIG_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for learnx_core::AdminError {
    fn from(err: PathError) -> Self {
        learnx_core::AdminError::config(err.to_string())
    }
}

/// Resolved locations of every file the toolkit reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnxPaths {
    root: PathBuf,
}

impl LearnxPaths {
    /// Uses `root` when given, else `$LEARNX_CONFIG_DIR`, else the platform
    /// config directory (XDG on Linux).
    pub fn new(root: Option<&Path>) -> Result<Self, PathError> {
        if let Some(root) = root {
            return Ok(Self::at(root));
        }
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(PathError::HomeDirNotFound)?;
        Ok(Self::at(base.join(APP_DIR_NAME)))
    }

    /// Uses exactly `root`, ignoring the environment.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn session_dir(&self) -> PathBuf {
        self.root.join("session")
    }

    /// Token store, the counterpart of browser cookies.
    pub fn cookies_file(&self) -> PathBuf {
        self.session_dir().join("cookies.json")
    }

    /// Profile store, the counterpart of browser local storage.
    pub fn local_storage_file(&self) -> PathBuf {
        self.session_dir().join("local_storage.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
