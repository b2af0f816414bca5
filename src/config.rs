//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Record store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("fitlog").to_string_lossy().to_string())
        .unwrap_or_else(|| "./fitlog_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Mount point of the student collection
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Allowed CORS origins, empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8089
}

fn default_base_path() -> String {
    "/api/v1/student".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Public URL of the student collection as seen from this machine
    pub fn local_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            self.host.as_str()
        };
        format!("http://{}:{}{}", host, self.port, self.base_path)
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

impl LoggingConfig {
    /// Whether to emit JSON log lines instead of human-readable ones
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.normalize()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from the first default location that exists, or from the
    /// environment alone when there is none.
    ///
    /// A file that exists but can't be read or parsed is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&default_paths())
    }

    /// The config file `load_default` reads, if any
    pub fn default_path() -> Option<PathBuf> {
        find_existing(&default_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match find_existing(paths) {
            Some(path) => Self::load_with_env(&path),
            None => Self::from_env(),
        }
    }

    /// Expand `~` in the data dir and canonicalize the base path
    fn normalize(&mut self) -> Result<(), ConfigError> {
        self.storage.data_dir = expand_home(&self.storage.data_dir);
        self.api.base_path = normalize_base_path(&self.api.base_path)?;
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(data_dir) = var("FITLOG_DATA_DIR") {
            self.storage.data_dir = expand_home(&data_dir);
        }

        if let Some(host) = var("FITLOG_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("FITLOG_API_PORT") {
            self.api.port = port.parse().map_err(|_| ConfigError::Invalid {
                field: "FITLOG_API_PORT",
                reason: format!("'{}' is not a port number", port),
            })?;
        }
        if let Some(origins) = var("FITLOG_CORS_ORIGINS") {
            self.api.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(level) = var("FITLOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FITLOG_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("fitlog").join("config.toml")),
        Some(PathBuf::from("/etc/fitlog/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn find_existing(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| p.exists()).cloned()
}

/// Replace a leading `~` with the home directory
fn expand_home(raw: &str) -> String {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return raw.to_string(),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.to_string_lossy().to_string(),
        Some(home) => home.join(rest).to_string_lossy().to_string(),
        None => raw.to_string(),
    }
}

/// `api/v1/student/` becomes `/api/v1/student`; an empty or root path is rejected
fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            field: "api.base_path",
            reason: format!("'{}' does not name a path below the root", raw),
        });
    }
    Ok(format!("/{}", trimmed))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# fitlog Configuration
#
# Environment variables override these settings:
# - FITLOG_DATA_DIR
# - FITLOG_API_HOST
# - FITLOG_API_PORT
# - FITLOG_CORS_ORIGINS (comma separated)
# - FITLOG_LOG_LEVEL
# - FITLOG_LOG_FORMAT

[storage]
# Directory holding students.db. Defaults to the platform data directory
# (~/.local/share/fitlog on Linux); a leading ~ expands to the home directory.
# data_dir = "~/.local/share/fitlog"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8089

# Where the student collection is mounted (must not be "/")
base_path = "/api/v1/student"

# Allowed CORS origins (empty = any origin)
cors_origins = []

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
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8089);
        assert_eq!(config.api.base_path, "/api/v1/student");
        assert_eq!(config.api.local_url(), "http://localhost:8089/api/v1/student");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, generate_default_config()).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 8089);
        assert!(config.api.cors_origins.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.data_dir, default_data_dir());
        assert!(!config.storage.data_dir.starts_with('~'));
    }

    #[test]
    fn test_data_dir_expands_home() {
        let home = dirs::home_dir().unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"~/fitlog-data\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.storage.data_dir,
            home.join("fitlog-data").to_string_lossy()
        );

        assert_eq!(expand_home("~"), home.to_string_lossy());
        assert_eq!(expand_home("/srv/fitlog"), "/srv/fitlog");
        assert_eq!(expand_home("~other/fitlog"), "~other/fitlog");
    }

    #[test]
    fn test_base_path_is_normalized() {
        assert_eq!(normalize_base_path("api/v1/student").unwrap(), "/api/v1/student");
        assert_eq!(normalize_base_path("/students/").unwrap(), "/students");
        assert_eq!(normalize_base_path("/api/v1/student").unwrap(), "/api/v1/student");

        for raw in ["/", "", "  ", "//"] {
            assert!(
                matches!(normalize_base_path(raw), Err(ConfigError::Invalid { .. })),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_load_normalizes_base_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[api]\nbase_path = \"api/v1/student/\"\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().api.base_path, "/api/v1/student");

        std::fs::write(&path, "[api]\nbase_path = \"/\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_default_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[api\nport = ").unwrap();

        assert!(matches!(
            Config::load_first(&[missing.clone(), broken]),
            Err(ConfigError::Parse { .. })
        ));
        assert!(Config::load_first(&[missing]).is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nport = 9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.base_path, "/api/v1/student");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nport = ").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FITLOG_DATA_DIR", "/tmp/fitlog"),
            ("FITLOG_API_PORT", "9100"),
            ("FITLOG_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("FITLOG_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.storage.data_dir, "/tmp/fitlog");
        assert_eq!(config.api.port, 9100);
        assert_eq!(config.api.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_is_rejected() {
        let mut config = Config::default();
        let result =
            config.apply_overrides(|key| (key == "FITLOG_API_PORT").then(|| "not-a-port".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        assert_eq!(config.api.port, 8089);
    }
}
