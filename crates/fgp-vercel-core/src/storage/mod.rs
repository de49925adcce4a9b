pub mod config;

pub use config::ConfigStorage;

use crate::{Error, Result};
use std::path::PathBuf;

pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("fgp-vercel"))
        .ok_or_else(|| Error::Config("Could not find config directory".to_string()))
}
