//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CODEREVIEW_API_URL";

/// Base URL used when neither the config file nor the environment sets one
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Development API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: callers usually load config before tracing is
    /// installed, so they report the outcome with [`LoadedConfig::log`].
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("codereview").join("config.toml")),
            Some(PathBuf::from("/etc/codereview/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths` that parses
    ///
    /// Files that exist but fail to load are skipped and kept in
    /// `LoadedConfig::errors`.
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV) {
            self.api.base_url = url;
        }

        if let Some(host) = lookup("CODEREVIEW_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CODEREVIEW_SERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Some(level) = lookup("CODEREVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CODEREVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that were found but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Report where the config came from and which files were skipped
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("Skipping config file: {}", error);
        }

        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Code Review Dashboard Configuration
#
# Environment variables override these settings:
# - CODEREVIEW_API_URL
# - CODEREVIEW_SERVER_HOST
# - CODEREVIEW_SERVER_PORT
# - CODEREVIEW_LOG_LEVEL
# - CODEREVIEW_LOG_FORMAT

[api]
# Base URL of the code review API
base_url = "http://localhost:8000/api/v1"

[server]
# Development API server host
host = "0.0.0.0"

# Development API server port
port = 8000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.server.addr(), "0.0.0.0:8000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_unset_api_url_keeps_default() {
        let mut config = Config::default();
        config.apply_overrides(|_| None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (API_URL_ENV, "https://review.example.com/api/v1"),
            ("CODEREVIEW_SERVER_PORT", "9100"),
            ("CODEREVIEW_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://review.example.com/api/v1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == "CODEREVIEW_SERVER_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://review.internal:9000/api/v1\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://review.internal:9000/api/v1");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_malformed_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "[api\nbase_url = \n").unwrap();
        std::fs::write(&valid, "[server]\nport = 9300\n").unwrap();

        let missing = dir.path().join("missing.toml");
        let loaded = Config::load_first(&[missing, broken.clone(), valid.clone()]);

        assert_eq!(loaded.source.as_deref(), Some(valid.as_path()));
        assert_eq!(loaded.config.server.port, 9300);
        assert_eq!(loaded.errors.len(), 1);
        assert!(matches!(
            &loaded.errors[0],
            ConfigError::Parse { path, .. } if path == &broken
        ));
    }

    #[test]
    fn test_only_malformed_file_falls_back_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[api\nbase_url = \n").unwrap();

        let loaded = Config::load_first(&[broken]);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.errors.len(), 1);
        assert!(loaded.errors[0].to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
