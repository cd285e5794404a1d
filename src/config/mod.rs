//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use gobarber_desk::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("en-US".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("en-US".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GoBarberDesk";

/// Reference toast display duration.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// How long a toast stays on screen, in milliseconds.
    /// One duration for every toast kind.
    pub duration_ms: Option<u64>,
}

impl Config {
    /// Effective toast display duration, falling back to the 3 s reference value.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.notifications
                .duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }
}

fn get_default_config_path(config_dir: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = config_dir {
        return Some(Path::new(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

/// Loads the configuration, honoring a `--config-dir` override.
pub fn load_with_dir(config_dir: Option<&str>) -> Result<Config> {
    if let Some(path) = get_default_config_path(config_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
            notifications: NotificationsConfig {
                duration_ms: Some(5000),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.notifications.duration_ms, Some(5000));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            language: Some("pt-BR".to_string()),
            ..Config::default()
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn toast_duration_falls_back_to_reference_value() {
        let config = Config::default();
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));

        let config = Config {
            notifications: NotificationsConfig {
                duration_ms: Some(1500),
            },
            ..Config::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn load_with_dir_prefers_the_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save");

        let loaded =
            load_with_dir(Some(temp_dir.path().to_str().unwrap())).expect("failed to load");
        assert_eq!(loaded.language, Some("en-US".to_string()));
    }
}
