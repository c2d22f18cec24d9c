//! Configuration module for QBoard.

use serde::Deserialize;
use std::path::Path;

use crate::{QBoardError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/qboard.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Board display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Timezone for displaying timestamps (e.g., "Asia/Tokyo", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/qboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Board display configuration.
    #[serde(default)]
    pub board: BoardConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(QBoardError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| QBoardError::Config(format!("config parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.path, "data/qboard.db");
        assert_eq!(config.board.timezone, "UTC");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/qboard.log");
    }

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.database.path, "data/qboard.db");
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
[database]
path = "test.db"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.database.path, "test.db");
        assert_eq!(config.logging.level, "debug");
        // Unspecified fields fall back to defaults
        assert_eq!(config.logging.file, "logs/qboard.log");
        assert_eq!(config.board.timezone, "UTC");
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
[database]
path = "/var/lib/qboard/board.db"

[board]
timezone = "Asia/Tokyo"

[logging]
level = "warn"
file = "/var/log/qboard.log"
"#,
        )
        .unwrap();
        assert_eq!(config.database.path, "/var/lib/qboard/board.db");
        assert_eq!(config.board.timezone, "Asia/Tokyo");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, "/var/log/qboard.log");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("not valid [ toml");
        assert!(matches!(result, Err(QBoardError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("definitely/not/a/config.toml");
        assert!(matches!(result, Err(QBoardError::Io(_))));
    }
}
