// SPDX-License-Identifier: MPL-2.0
//! Application configuration persisted to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::ui::theming::ThemeMode;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme = Some(ThemeMode::Dark);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Theme mode for the demo host window (light, dark, or system).
    #[serde(default)]
    pub theme: Option<ThemeMode>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    let path = get_default_config_path()
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    save_to_path(config, &path)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|err| Error::Config(err.to_string()))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(|err| Error::Config(err.to_string()))?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_toml() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");

        let config = Config {
            theme: Some(ThemeMode::Dark),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn missing_theme_defaults_to_none() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "").expect("Failed to write empty config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.theme, None);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").expect("Failed to write config");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }
}
