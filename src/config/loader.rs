//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.presence-roster.toml` in the working directory
//! 4. `~/.config/presence-roster/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{self, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::env::Env;
use crate::models::ApiVersion;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value in config file {path}: {message}")]
    InvalidValue { path: PathBuf, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Users endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the presence API, without a trailing path.
    pub base_url: String,
    pub version: ApiVersion,
    /// Bypass HTTP caches for the users request. Unset means "only on v2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_request_cache: Option<bool>,
    /// Show avatars on options. Unset means "only on v2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatars: Option<bool>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: ApiVersion::default(),
            disable_request_cache: None,
            avatars: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ApiConfig {
    /// Effective cache flag after applying the per-version default.
    pub fn disable_request_cache(&self) -> bool {
        self.disable_request_cache
            .unwrap_or(self.version == ApiVersion::V2)
    }

    /// Effective avatar flag after applying the per-version default.
    pub fn avatars(&self) -> bool {
        self.avatars.unwrap_or(self.version.supports_avatar())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the users listing.
    pub fn users_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.version.users_path()
        )
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `presence_roster=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// One config file as written on disk.
///
/// Every field is optional so that a value spelled out in a file, even one
/// equal to the built-in default, still overrides the layers below it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub api: ApiLayer,
    pub log: LogLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiLayer {
    pub base_url: Option<String>,
    pub version: Option<ApiVersion>,
    pub disable_request_cache: Option<bool>,
    pub avatars: Option<bool>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogLayer {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, working-directory config, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.apply_layer(global);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.apply_layer(local);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Read one config file as a layer.
    ///
    /// A zero `timeout_secs` is rejected, as on the CLI and env layers.
    pub fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if layer.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                message: "api.timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(layer)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Overlay a file layer; every value the layer sets wins.
    pub fn apply_layer(&mut self, layer: ConfigLayer) {
        let ConfigLayer { api, log } = layer;
        if let Some(base_url) = api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(version) = api.version {
            self.api.version = version;
        }
        if api.disable_request_cache.is_some() {
            self.api.disable_request_cache = api.disable_request_cache;
        }
        if api.avatars.is_some() {
            self.api.avatars = api.avatars;
        }
        if let Some(secs) = api.timeout_secs {
            self.api.timeout_secs = secs;
        }
        if let Some(level) = log.level {
            self.log.level = level;
        }
        if let Some(format) = log.format {
            self.log.format = format;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Invalid values are ignored with a warning. This runs before the
    /// subscriber is installed, so warnings go straight to stderr.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Ok(val) = env.var(constants::ENV_API_VERSION) {
            match val.parse::<ApiVersion>() {
                Ok(version) => self.api.version = version,
                Err(_) => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_API_VERSION
                ),
            }
        }
        match env.flag(constants::ENV_NO_CACHE) {
            Some(Ok(no_cache)) => self.api.disable_request_cache = Some(no_cache),
            Some(Err(val)) => eprintln!(
                "Warning: ignoring invalid {} value: {val}",
                constants::ENV_NO_CACHE
            ),
            None => {}
        }
        if let Ok(val) = env.var(constants::ENV_TIMEOUT) {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_TIMEOUT
                ),
            }
        }
        if let Ok(val) = env.var(constants::ENV_LOG) {
            self.log.level = val;
        }
    }
}
