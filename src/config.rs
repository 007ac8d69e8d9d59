//! Application configuration persisted as YAML.

use std::time::Duration;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

pub const DEFAULT_EVENT_NAME: &str = "Norbert";
pub const DEFAULT_MODAL_TIMEOUT: &str = "3s";

/// User adjustable settings. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown in the header
    pub event_name: String,
    pub theme: String,
    /// How long the confirmation stays up, e.g. "3s" or "1500ms"
    pub modal_timeout: String,
    /// Overrides the default storage file location
    pub data_file: Option<String>,
    /// Directory CSV exports are written to (defaults to the working
    /// directory)
    pub export_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            theme: Theme::default().to_string(),
            modal_timeout: DEFAULT_MODAL_TIMEOUT.to_string(),
            data_file: None,
            export_dir: None,
        }
    }
}

impl Config {
    /// Parsed confirmation timeout. Invalid values are logged and replaced by
    /// the default.
    pub fn modal_timeout(&self) -> Duration {
        humantime::parse_duration(&self.modal_timeout).unwrap_or_else(|e| {
            log::warn!(
                "invalid modal_timeout {:?}, using {DEFAULT_MODAL_TIMEOUT}: {e}",
                self.modal_timeout
            );
            Duration::from_secs(3)
        })
    }
}

/// Loads the config from a YAML file, writing defaults when none exists.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path to the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        let f = std::fs::File::open(&manager.path);

        match f {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the loaded config.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    /// Replaces the config and persists it to disk.
    pub fn update(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.write()
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = std::path::Path::new(&self.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
