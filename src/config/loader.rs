//! Configuration file loading with precedence handling.

use crate::engine::{EngineConfig, TileLayout};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FAVTILES_CONFIG";

/// Environment variable overriding the pin limit.
pub const PIN_LIMIT_ENV_VAR: &str = "FAVTILES_PIN_LIMIT";

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
/// Corresponds to `~/.config/favtiles/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Slots that can hold an explicit pin.
    #[serde(default)]
    pub pin_limit: Option<usize>,

    /// Soft limit on loaded contacts.
    #[serde(default)]
    pub tiles_soft_limit: Option<usize>,

    /// Tiles per tiled row.
    #[serde(default)]
    pub column_count: Option<usize>,

    /// Maximum tiled rows.
    #[serde(default)]
    pub max_tiled_rows: Option<usize>,

    /// Label for contacts without a display name.
    #[serde(default)]
    pub missing_name_label: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pin limit.
    pub pin_limit: usize,
    /// Soft limit on loaded contacts.
    pub tiles_soft_limit: usize,
    /// Tiles per tiled row.
    pub column_count: usize,
    /// Maximum tiled rows.
    pub max_tiled_rows: usize,
    /// Label for nameless contacts.
    pub missing_name_label: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pin_limit: EngineConfig::DEFAULT_PIN_LIMIT,
            tiles_soft_limit: EngineConfig::DEFAULT_TILES_SOFT_LIMIT,
            column_count: TileLayout::DEFAULT_COLUMN_COUNT,
            max_tiled_rows: TileLayout::DEFAULT_MAX_TILED_ROWS,
            missing_name_label: EngineConfig::DEFAULT_MISSING_NAME_LABEL.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Engine settings derived from this config.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            pin_limit: self.pin_limit,
            tiles_soft_limit: self.tiles_soft_limit,
            layout: TileLayout::new(self.column_count, self.max_tiled_rows),
            missing_name_label: self.missing_name_label.clone(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/favtiles/favtiles.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("favtiles").join("favtiles.log")
    } else {
        PathBuf::from("favtiles.log")
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
/// Returns `~/.config/favtiles/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("favtiles").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FAVTILES_CONFIG` environment variable
/// 3. Default path `~/.config/favtiles/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
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
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        pin_limit: config.pin_limit.unwrap_or(defaults.pin_limit),
        tiles_soft_limit: config.tiles_soft_limit.unwrap_or(defaults.tiles_soft_limit),
        column_count: config.column_count.unwrap_or(defaults.column_count),
        max_tiled_rows: config.max_tiled_rows.unwrap_or(defaults.max_tiled_rows),
        missing_name_label: config
            .missing_name_label
            .unwrap_or(defaults.missing_name_label),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FAVTILES_PIN_LIMIT`: Override pin limit (ignored with a warning if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(PIN_LIMIT_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(pin_limit) => config.pin_limit = pin_limit,
            Err(err) => warn!(value = %raw, error = %err, "Ignoring invalid {}", PIN_LIMIT_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    pin_limit_override: Option<usize>,
    columns_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(pin_limit) = pin_limit_override {
        config.pin_limit = pin_limit;
    }

    if let Some(columns) = columns_override {
        config.column_count = columns;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
