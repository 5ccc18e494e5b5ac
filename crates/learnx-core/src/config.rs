//! Application configuration model.
//!
//! Loaded from `config.toml`; every field has a default so a missing or
//! partial file still yields a usable configuration.

use crate::listing::ROWS_PER_PAGE_OPTIONS;
use serde::{Deserialize, Serialize};

/// Production API origin, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://learnx-spring-app-86563bbf71fb.herokuapp.com/api/v1";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    pub log_level: LogLevel,
    pub api: ApiConfig,
    pub site: SiteConfig,
    pub accounts: TableConfig,
    pub permissions: TableConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            api: ApiConfig::default(),
            site: SiteConfig::default(),
            accounts: TableConfig {
                rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
            },
            permissions: TableConfig {
                rows_per_page: ROWS_PER_PAGE_OPTIONS[1],
            },
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait as long as the
    /// transport allows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub theme_color: String,
    pub logo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Learn-X".to_string(),
            description: String::new(),
            theme_color: "#090a0b".to_string(),
            logo: "./assets/utez-logo-emblem.svg".to_string(),
        }
    }
}

/// Log level directive handed to the tracing filter, e.g. `info` or
/// `learnx_interaction=debug`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL.to_string())
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: ROWS_PER_PAGE_OPTIONS[1],
        }
    }
}
