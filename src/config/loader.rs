//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default news API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://newsapi.org/v2";

/// Results requested per feed or search.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Quiet period before typed search text is committed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 600;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/newsdesk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// News API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the news API (without trailing slash).
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Results per feed or search.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Search debounce quiet period in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Theme preference: "system", "light" or "dark".
    #[serde(default)]
    pub theme: Option<String>,

    /// Categories combined into the home feed.
    #[serde(default)]
    pub home_categories: Option<Vec<String>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// News API key. `None` is allowed here; pages report it when they try to fetch.
    pub api_key: Option<String>,
    /// Base URL of the news API.
    pub api_base_url: String,
    /// Results per feed or search.
    pub page_size: u32,
    /// Search debounce quiet period in milliseconds.
    pub debounce_ms: u64,
    /// Theme preference name.
    pub theme: String,
    /// Categories combined into the home feed.
    pub home_categories: Vec<String>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key itself; configs get logged at startup.
        f.debug_struct("ResolvedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base_url", &self.api_base_url)
            .field("page_size", &self.page_size)
            .field("debounce_ms", &self.debounce_ms)
            .field("theme", &self.theme)
            .field("home_categories", &self.home_categories)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme: "system".to_string(),
            home_categories: crate::model::DEFAULT_HOME_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/newsdesk/newsdesk.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("newsdesk").join("newsdesk.log")
    } else {
        PathBuf::from("newsdesk.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/newsdesk/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("newsdesk").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `NEWSDESK_CONFIG` environment variable
/// 3. Default path `~/.config/newsdesk/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("NEWSDESK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `NEWS_API_KEY`, then `NEWSDESK_API_KEY` (the latter wins when both are set)
/// - `NEWSDESK_API_BASE_URL`
/// - `NEWSDESK_THEME`
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    for var in ["NEWS_API_KEY", "NEWSDESK_API_KEY"] {
        if let Some(key) = non_empty_env(var) {
            config.api_key = Some(key);
        }
    }

    if let Some(url) = non_empty_env("NEWSDESK_API_BASE_URL") {
        config.api_base_url = url;
    }

    if let Some(theme) = non_empty_env("NEWSDESK_THEME") {
        config.theme = theme;
    }

    config
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// A blank `api_key` counts as unset.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_key: config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or(defaults.api_key),
        api_base_url: config
            .api_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        theme: config.theme.unwrap_or(defaults.theme),
        home_categories: config
            .home_categories
            .filter(|cats| !cats.is_empty())
            .unwrap_or(defaults.home_categories),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_key_override: Option<String>,
    theme_override: Option<String>,
) -> ResolvedConfig {
    if let Some(key) = api_key_override.filter(|k| !k.trim().is_empty()) {
        config.api_key = Some(key);
    }

    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
