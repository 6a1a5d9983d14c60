use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub default_view: String,
    pub upcoming_weeks: u32,
    pub show_week_numbers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    pub holiday_db: PathBuf,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ministry-cal")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .expect("Failed to serialize config");
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ministry-cal");

        Self {
            backend: BackendConfig {
                base_url: "http://localhost:3001/api".to_string(),
                request_timeout_secs: 30,
            },
            ui: UiConfig {
                default_view: "combined".to_string(),
                upcoming_weeks: 6,
                show_week_numbers: true,
            },
            storage: StorageConfig {
                holiday_db: data_dir.join("holidays.db"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn default_config_shows_six_upcoming_weeks() {
        let config = Config::default();
        assert_eq!(config.ui.upcoming_weeks, 6);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [backend]
            base_url = "http://10.0.0.5:3001/api"
            request_timeout_secs = 10

            [ui]
            default_view = "sermons"
            upcoming_weeks = 4
            show_week_numbers = false

            [storage]
            holiday_db = "/tmp/holidays.db"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.backend.base_url, "http://10.0.0.5:3001/api");
        assert_eq!(config.ui.default_view, "sermons");
        assert_eq!(config.ui.upcoming_weeks, 4);
        assert_eq!(config.storage.holiday_db, PathBuf::from("/tmp/holidays.db"));
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&content).unwrap();
        assert_eq!(parsed, config);
    }
}
