//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme, the thumbnail jitter seed, and hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ViewHotkeys};

use crate::error::AppError;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/photo-timeline";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub jitter_seed: Option<u64>,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub jitter_seed: Option<u64>,
    #[serde(default)]
    pub hotkeys: ViewHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            jitter_seed: None,
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the default directory or the custom one
    /// if provided. A missing file is created holding the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            info!("Writing default configuration to {}", file_path.display());
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        self.apply(&contents)?;
        Ok(())
    }

    /// Overwrite the current values with the ones parsed from a YAML document.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), AppError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.jitter_seed = data.jitter_seed;
        self.hotkeys = data.hotkeys;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            jitter_seed: self.jitter_seed,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let save_failed = |e: std::io::Error| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(file_path).map_err(save_failed)?;
        write!(file, "{}", content).map_err(save_failed)?;
        file.flush().map_err(save_failed)?;
        Ok(())
    }

    /// Returns the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "photo-timeline-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn load_creates_default_file() {
        let dir = temp_dir("defaults");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.jitter_seed, None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = temp_dir("round-trip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "dracula".to_string();
        config.jitter_seed = Some(42);
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.jitter_seed, Some(42));
        assert_eq!(reloaded.hotkeys, config.hotkeys);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut config = Config::new();
        config.apply("jitter_seed: 7\n").unwrap();
        assert_eq!(config.jitter_seed, Some(7));
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.hotkeys, ViewHotkeys::default());
    }

    #[test]
    fn invalid_file_is_rejected() {
        let mut config = Config::new();
        let result = config.apply("jitter_seed: [not, a, number]\n");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
