//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub tui: TuiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Game and batch-run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Trial count pre-filled for batch runs
    #[serde(default = "default_trials")]
    pub default_trials: u64,

    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path
    pub file: Option<PathBuf>,
}

// Default value functions

fn default_trials() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_trials: default_trials(),
            seed: None,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config = Self::from_toml(&contents).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("Invalid config file {:?}: {}", path, msg)),
            other => other,
        })?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./config.toml
    /// 2. ~/.monty-hall-sim/config.toml
    /// 3. /etc/monty-hall-sim/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("config.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".monty-hall-sim").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/monty-hall-sim/config.toml"));

        for path in paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Config::default())
    }

    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.game.default_trials == 0 {
            return Err(Error::config("game.default_trials must be a positive number"));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(Error::config("tui.tick_rate_ms must be a positive number"));
        }
        Ok(())
    }

    /// Command-line seed takes precedence over the configured one
    pub fn seed(&self, cli_seed: Option<u64>) -> Option<u64> {
        cli_seed.or(self.game.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.game.default_trials, 1000);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.tui.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[game]
default_trials = 5000
seed = 42

[logging]
level = "debug"
file = "/tmp/monty.log"
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.game.default_trials, 5000);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/monty.log")));
    }

    #[test]
    fn test_rejects_zero_values() {
        let err = Config::from_toml("[game]\ndefault_trials = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_toml("[tui]\ntick_rate_ms = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Config::from_toml("[game\ndefault_trials = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir()
            .join(format!("monty-hall-sim-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "[game]\ndefault_trials = 250\n").unwrap();
        let config = Config::from_file(&good).unwrap();
        assert_eq!(config.game.default_trials, 250);

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "[tui]\ntick_rate_ms = 0\n").unwrap();
        let err = Config::from_file(&bad).unwrap_err().to_string();
        assert!(err.starts_with("Configuration error: Invalid config file"));
        assert!(err.contains("bad.toml"));
        assert_eq!(err.matches("Configuration error").count(), 1);

        let missing = Config::from_file(dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, Error::Config(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_seed_precedence() {
        let mut config = Config::default();
        assert_eq!(config.seed(None), None);
        config.game.seed = Some(7);
        assert_eq!(config.seed(None), Some(7));
        assert_eq!(config.seed(Some(1)), Some(1));
    }
}
