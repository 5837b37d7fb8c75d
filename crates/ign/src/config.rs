//! Application configuration
//!
//! Not to be confused with the declarative documents the bootstrap resolves:
//! this is the configuration of the shell itself (name, paths, logging).
//! Sources merge in order - defaults, then a TOML file, then `IGN_`-prefixed
//! environment variables - via Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ign_bootstrap::DispatchPolicy;
use ign_domain::{Error, Result};

use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL,
    SETTINGS_CANDIDATES, SETTINGS_ENV_VAR,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application identity
    #[serde(default)]
    pub app: AppSection,
    /// Filesystem locations of the declarative documents
    #[serde(default)]
    pub paths: PathsSection,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Event dispatch configuration
    #[serde(default)]
    pub events: EventsSection,
}

/// Application name and version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    /// Name shown by the runner's command list
    pub name: String,
    /// Version shown by the runner's command list
    pub version: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "ign".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Where the declarative documents live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    /// Directory holding contracts/services/events/commands documents
    pub config_dir: PathBuf,
    /// Explicit settings file; when absent, discovery applies
    pub settings_file: Option<PathBuf>,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            settings_file: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Event dispatch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsSection {
    /// What to do when a listener invocation fails mid-dispatch
    pub on_listener_error: ListenerErrorPolicy,
}

/// Config-facing mirror of [`DispatchPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerErrorPolicy {
    /// Abort remaining dispatch on the first failure
    #[default]
    FailFast,
    /// Log the failure and keep invoking sibling listeners
    ContinueOnError,
}

impl From<ListenerErrorPolicy> for DispatchPolicy {
    fn from(policy: ListenerErrorPolicy) -> Self {
        match policy {
            ListenerErrorPolicy::FailFast => DispatchPolicy::FailFast,
            ListenerErrorPolicy::ContinueOnError => DispatchPolicy::ContinueOnError,
        }
    }
}

/// Configuration loader service
#[derive(Clone, Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that probes `ign.toml` in the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. `IGN_`-prefixed environment variables (e.g. `IGN_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        if config_path.exists() {
            figment = figment.merge(Toml::file(&config_path));
            debug!(path = %config_path.display(), "application config loaded");
        }

        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("_"));

        figment.extract().map_err(|e| {
            Error::configuration_with_source("failed to extract application configuration", e)
        })
    }
}

/// Locate the settings file to flatten into the parameter registry
///
/// Precedence: an explicit path from configuration, the `IGN_SETTINGS`
/// environment variable, then `settings.yml` / `settings.yml.dist` under the
/// working directory. Absence is not an error - the settings phase is simply
/// skipped.
pub fn find_settings_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = env::var(SETTINGS_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    SETTINGS_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}
