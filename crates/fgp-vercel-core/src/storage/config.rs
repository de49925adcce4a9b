//! Configuration file loading

use crate::{models::ClientConfig, Result};
use std::path::{Path, PathBuf};

pub struct ConfigStorage {
    config_dir: PathBuf,
}

impl ConfigStorage {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Storage rooted at the platform config directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(super::get_config_dir()?))
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Load `config.json`, falling back to defaults when it is missing or
    /// blank. Nothing is written back.
    pub fn load(&self) -> Result<ClientConfig> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(ClientConfig::default());
        }

        let config = Self::read(&config_path)?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<ClientConfig> {
        let content = std::fs::read_to_string(path)?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        Ok(serde_json::from_str(&content)?)
    }
}
