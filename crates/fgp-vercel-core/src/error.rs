//! Error types for talking to the Vercel daemon

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to connect to daemon at {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Connection closed before a response was received")]
    ConnectionClosed,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Timed out after {0:?} waiting for the daemon")]
    Timeout(Duration),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// True when the response bytes arrived but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Json(_) | Error::Utf8(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
