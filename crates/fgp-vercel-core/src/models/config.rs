//! Client configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound on one response line unless configured otherwise (8 MiB)
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub socket_path: PathBuf,
    /// Bound on one whole exchange; `None` waits forever
    pub timeout_secs: Option<u64>,
    pub max_response_bytes: usize,
}

impl ClientConfig {
    /// Config pointing at an explicit socket, other fields defaulted
    pub fn with_socket(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.socket_path.as_os_str().is_empty() {
            return Err(Error::Validation("Socket path cannot be empty".to_string()));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::Validation(
                "Timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.max_response_bytes == 0 {
            return Err(Error::Validation(
                "Max response size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            timeout_secs: None,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

/// `~/.fgp/services/vercel/daemon.sock`
pub fn default_socket_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fgp")
        .join("services")
        .join("vercel")
        .join("daemon.sock")
}
