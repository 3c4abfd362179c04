//! Startup configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Looked up as the first CLI argument, then `portfolio.toml` in the
//! working directory.

use crate::error::ConfigError;
use particle_field::FieldConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "portfolio.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tirumala Teja - Portfolio".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    /// Fixed seed for the particle RNG; random when absent
    pub seed: Option<u64>,
}

/// Where the running configuration came from, for the startup log
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl AppConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.validated())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// An explicit path must exist; the default path is optional.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.is_file() {
                    return Ok((Self::default(), ConfigSource::Defaults));
                }
                default
            }
        };
        let config = Self::load(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    fn validated(mut self) -> Self {
        self.field = self.field.validated();
        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self
    }
}
