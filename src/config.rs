//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means same-origin only
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Per-browser session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_mins: u64,
}

fn default_cookie_name() -> String {
    "safespace_session".to_string()
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_idle_timeout() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_sessions: default_max_sessions(),
            idle_timeout_mins: default_idle_timeout(),
        }
    }
}

/// Site presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Offset from UTC used for timestamps shown to visitors
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,

    /// Label printed after times in confirmation messages
    #[serde(default = "default_timezone_label")]
    pub timezone_label: String,

    /// How many mood entries the tracker lists
    #[serde(default = "default_recent_moods")]
    pub recent_moods: usize,
}

fn default_utc_offset() -> i32 {
    180 // East Africa Time
}

fn default_timezone_label() -> String {
    "EAT".to_string()
}

fn default_recent_moods() -> usize {
    5
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset(),
            timezone_label: default_timezone_label(),
            recent_moods: default_recent_moods(),
        }
    }
}

impl SiteConfig {
    /// Fixed offset for visitor-facing timestamps.
    ///
    /// Loaded configs are validated, so the UTC fallback only applies to a
    /// hand-built out-of-range value.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Chatbot settings
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Messages kept per session transcript (user and bot messages both
    /// count, so this must be an even number of at least 2)
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

fn default_max_messages() -> usize {
    50
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
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

        config.validate().map_err(|error| ConfigError::Invalid {
            path: path.to_path_buf(),
            error,
        })?;

        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), String> {
        if FixedOffset::east_opt(self.site.utc_offset_minutes * 60).is_none() {
            return Err(format!(
                "site.utc_offset_minutes must be within +/-1439, got {}",
                self.site.utc_offset_minutes
            ));
        }

        let max_messages = self.chat.max_messages;
        if max_messages < 2 || max_messages % 2 != 0 {
            return Err(format!(
                "chat.max_messages must be an even number of at least 2, got {}",
                max_messages
            ));
        }

        Ok(())
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

    /// Load from default locations or environment.
    ///
    /// Runs before logging is set up, so nothing is logged here; the
    /// returned [`LoadedConfig`] says where the config came from and which
    /// files were skipped.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("safespace").join("config.toml")),
            Some(PathBuf::from("/etc/safespace/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing, valid file among `paths`, else defaults
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SAFESPACE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SAFESPACE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(max) = std::env::var("SAFESPACE_MAX_SESSIONS") {
            if let Ok(m) = max.parse() {
                self.session.max_sessions = m;
            }
        }

        if let Ok(level) = std::env::var("SAFESPACE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SAFESPACE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but failed to load
    pub skipped: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SafeSpace Configuration
#
# Environment variables override these settings:
# - SAFESPACE_HOST
# - SAFESPACE_PORT
# - SAFESPACE_MAX_SESSIONS
# - SAFESPACE_LOG_LEVEL
# - SAFESPACE_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8501

# Allowed CORS origins (empty = same-origin only)
cors_origins = []

[session]
# Name of the cookie carrying the session id
cookie_name = "safespace_session"

# Upper bound on live sessions; the least recently seen is evicted
max_sessions = 10000

# Sessions idle longer than this are dropped (minutes)
idle_timeout_mins = 60

[site]
# Offset from UTC for times shown to visitors (minutes, within +/-1439)
utc_offset_minutes = 180

# Label printed after times
timezone_label = "EAT"

# Number of mood entries listed in the tracker
recent_moods = 5

[chat]
# Messages kept in each chat transcript (even, at least 2)
max_messages = 50

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
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.session.cookie_name, "safespace_session");
        assert_eq!(config.site.recent_moods, 5);
        assert_eq!(config.site.offset().local_minus_utc(), 3 * 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.session.max_sessions, 10_000);
        assert_eq!(config.chat.max_messages, 50);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[site]\nrecent_moods = 3").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.recent_moods, 3);
        assert_eq!(config.site.timezone_label, "EAT");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/safespace.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let site = SiteConfig {
            utc_offset_minutes: 100_000,
            ..Default::default()
        };
        assert_eq!(site.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_out_of_range_offset_rejected_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nutc_offset_minutes = 100000").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_odd_or_zero_chat_cap_rejected() {
        for value in [0, 1, 7] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "[chat]\nmax_messages = {}", value).unwrap();

            let err = Config::load(file.path()).unwrap_err();
            assert!(err.to_string().contains("chat.max_messages"), "accepted {}", value);
        }
    }

    #[test]
    fn test_load_first_reports_skipped_files() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[server\nport = ").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[server]\nport = 9100").unwrap();

        let loaded = Config::load_first(&[
            PathBuf::from("/nonexistent/safespace.toml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ]);

        assert_eq!(loaded.source.as_deref(), Some(good.path()));
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(loaded.skipped[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let loaded = Config::load_first(&[PathBuf::from("/nonexistent/safespace.toml")]);
        assert!(loaded.source.is_none());
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.config.chat.max_messages, 50);
    }
}
