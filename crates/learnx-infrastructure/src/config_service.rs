//! Configuration service implementation.
//!
//! Loads [`AdminConfig`] from `config.toml` under the config directory and
//! applies `LEARNX_*` environment overrides on top.

use crate::paths::LearnxPaths;
use learnx_core::config::{AdminConfig, LogLevel};
use learnx_core::error::{AdminError, Result};
use learnx_core::listing::ROWS_PER_PAGE_OPTIONS;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Overrides `api.base_url`.
pub const BASE_URL_ENV: &str = "LEARNX_API_BASE_URL";
/// Overrides `log_level`.
pub const LOG_LEVEL_ENV: &str = "LEARNX_LOG_LEVEL";

/// Loads and caches the admin configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: LearnxPaths,
    config: Arc<RwLock<Option<AdminConfig>>>,
}

impl ConfigService {
    pub fn new(paths: LearnxPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.paths.config_file()
    }

    /// Returns the configuration with process environment overrides applied.
    pub fn get_config(&self) -> Result<AdminConfig> {
        self.get_config_with(|key| std::env::var(key).ok())
    }

    /// Returns the configuration, resolving overrides through `lookup`.
    ///
    /// The first successful load is cached until [`invalidate_cache`] is
    /// called.
    ///
    /// [`invalidate_cache`]: ConfigService::invalidate_cache
    pub fn get_config_with<F>(&self, lookup: F) -> Result<AdminConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cached) = self.read_cache()? {
            return Ok(cached);
        }

        let mut loaded = self.load_file()?;
        apply_overrides(&mut loaded, lookup);
        validate(&loaded)?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| AdminError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Writes a default `config.toml`.
    ///
    /// An existing file is kept unless `force` is set. Returns the path and
    /// whether a file was written.
    pub fn init(&self, force: bool) -> Result<(PathBuf, bool)> {
        let path = self.config_path();
        if path.exists() && !force {
            return Ok((path, false));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&AdminConfig::default())?;
        fs::write(&path, content)?;
        self.invalidate_cache();
        tracing::info!("Wrote default configuration to {}", path.display());
        Ok((path, true))
    }

    fn read_cache(&self) -> Result<Option<AdminConfig>> {
        let read_lock = self
            .config
            .read()
            .map_err(|_| AdminError::internal("config cache lock poisoned"))?;
        Ok(read_lock.clone())
    }

    fn load_file(&self) -> Result<AdminConfig> {
        let path = self.config_path();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(AdminConfig::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            AdminError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }
}

/// Rejects page sizes the listings cannot offer.
fn validate(config: &AdminConfig) -> Result<()> {
    let sections = [
        ("accounts", config.accounts.rows_per_page),
        ("permissions", config.permissions.rows_per_page),
    ];
    for (section, rows) in sections {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            return Err(AdminError::config(format!(
                "{}.rows_per_page must be one of {:?}, got {}",
                section, ROWS_PER_PAGE_OPTIONS, rows
            )));
        }
    }
    Ok(())
}

/// Applies non-empty `LEARNX_*` values returned by `lookup`.
pub fn apply_overrides<F>(config: &mut AdminConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(base_url) = non_empty(BASE_URL_ENV) {
        config.api.base_url = base_url;
    }
    if let Some(level) = non_empty(LOG_LEVEL_ENV) {
        config.log_level = LogLevel(level);
    }
}
