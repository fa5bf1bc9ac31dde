//! Configuration for the interaction logger.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the interaction logger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which interaction sources to capture
    pub sources: SourceConfig,

    /// Directory for export dumps
    pub export_path: PathBuf,

    /// IANA timezone name for the display listing (UTC when absent or
    /// unparseable)
    pub display_timezone: Option<String>,

    /// Capacity of the observer's pending-event queue
    pub queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("interaction-log");

        Self {
            sources: SourceConfig::default(),
            export_path: data_dir.join("exports"),
            display_timezone: None,
            queue_capacity: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("interaction-log")
            .join("config.json")
    }

    /// Ensure the export directory exists.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.export_path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Resolve the configured display timezone, falling back to UTC.
    pub fn display_tz(&self) -> Tz {
        self.display_timezone
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or(Tz::UTC)
    }
}

/// Configuration for which interaction sources to capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Control interactions (buttons, switches, sliders, ...)
    pub controls: bool,
    /// Screen appear/disappear transitions
    pub screens: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            controls: true,
            screens: true,
        }
    }
}

impl SourceConfig {
    /// Parse source configuration from a comma-separated string.
    pub fn from_csv(s: &str) -> Self {
        let sources: Vec<String> = s.split(',').map(|s| s.trim().to_lowercase()).collect();

        Self {
            controls: sources.iter().any(|s| s == "controls" || s == "all"),
            screens: sources.iter().any(|s| s == "screens" || s == "all"),
        }
    }

    /// Check if at least one source is enabled.
    pub fn any_enabled(&self) -> bool {
        self.controls || self.screens
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_config_parsing() {
        let config = SourceConfig::from_csv("controls,screens");
        assert!(config.controls);
        assert!(config.screens);

        let config = SourceConfig::from_csv("screens");
        assert!(!config.controls);
        assert!(config.screens);

        let config = SourceConfig::from_csv("all");
        assert!(config.controls);
        assert!(config.screens);

        let config = SourceConfig::from_csv("none");
        assert!(!config.any_enabled());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.sources.controls);
        assert!(config.sources.screens);
        assert_eq!(config.queue_capacity, 10_000);
        assert!(config.display_timezone.is_none());
    }

    #[test]
    fn test_display_tz_fallback() {
        let mut config = Config::default();
        assert_eq!(config.display_tz(), Tz::UTC);

        config.display_timezone = Some("Europe/Kyiv".to_string());
        assert_eq!(config.display_tz().name(), "Europe/Kyiv");

        config.display_timezone = Some("Not/AZone".to_string());
        assert_eq!(config.display_tz(), Tz::UTC);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            display_timezone: Some("America/New_York".to_string()),
            queue_capacity: 64,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.queue_capacity, 64);
        assert_eq!(parsed.display_timezone.as_deref(), Some("America/New_York"));
    }
}
