//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// Corresponds to `~/.config/pane-search/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Remote-control command prefix, e.g. `["kitty", "@"]`.
    #[serde(default)]
    pub remote_command: Option<Vec<String>>,

    /// Address of the kitty remote-control socket (`--to`).
    #[serde(default)]
    pub listen_on: Option<String>,

    /// Shrink the overlay window to a single row on startup.
    #[serde(default)]
    pub shrink_window: Option<bool>,

    /// Where the last query and mode are persisted.
    #[serde(default)]
    pub state_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Remote-control command prefix. Never empty after merging.
    pub remote_command: Vec<String>,
    /// Remote-control socket address, if any.
    pub listen_on: Option<String>,
    /// Shrink the overlay window on startup.
    pub shrink_window: bool,
    /// Persisted session state file.
    pub state_file: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            remote_command: default_remote_command(),
            listen_on: None,
            shrink_window: true,
            state_file: default_state_file(),
            log_file_path: default_log_path(),
        }
    }
}

/// `kitty @`, the stock remote-control entry point.
pub fn default_remote_command() -> Vec<String> {
    vec!["kitty".to_string(), "@".to_string()]
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pane-search/pane-search.log` on Linux,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pane-search").join("pane-search.log")
    } else {
        PathBuf::from("pane-search.log")
    }
}

/// Resolve default state file path (`~/.cache/pane-search/search.json`).
pub fn default_state_file() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("pane-search").join("search.json")
    } else {
        PathBuf::from("pane-search-state.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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
/// Returns `~/.config/pane-search/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pane-search").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PANE_SEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/pane-search/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PANE_SEARCH_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// An empty `remote_command` array counts as unset.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        remote_command: config
            .remote_command
            .filter(|cmd| !cmd.is_empty())
            .unwrap_or(defaults.remote_command),
        listen_on: config.listen_on.or(defaults.listen_on),
        shrink_window: config.shrink_window.unwrap_or(defaults.shrink_window),
        state_file: config.state_file.unwrap_or(defaults.state_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PANE_SEARCH_STATE_FILE`: Override the state file
/// - `PANE_SEARCH_LISTEN_ON`: Override the remote-control socket
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(state_file) = std::env::var("PANE_SEARCH_STATE_FILE") {
        if !state_file.is_empty() {
            config.state_file = PathBuf::from(state_file);
        }
    }

    if let Ok(listen_on) = std::env::var("PANE_SEARCH_LISTEN_ON") {
        if !listen_on.is_empty() {
            config.listen_on = Some(listen_on);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    listen_on_override: Option<String>,
) -> ResolvedConfig {
    if let Some(listen_on) = listen_on_override {
        config.listen_on = Some(listen_on);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
