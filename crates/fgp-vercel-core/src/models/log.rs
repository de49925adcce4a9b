//! Build log lines returned by `vercel.logs`

use super::{null_as_default, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    pub level: Option<String>,
    pub message: Option<String>,
    pub created: Option<Timestamp>,
}

impl LogLine {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
