//! Deployment records returned by `vercel.deployments` and `vercel.status`

use super::{null_as_default, Timestamp, UNKNOWN};
use serde::{Deserialize, Serialize};

/// Commit messages are cut to this many characters for display
pub const COMMIT_MESSAGE_WIDTH: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub deployments: Vec<Deployment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub uid: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
    pub created: Option<Timestamp>,
    pub meta: Option<DeploymentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentMeta {
    pub github_commit_message: Option<String>,
    pub github_commit_ref: Option<String>,
}

impl Deployment {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("no-url")
    }

    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn created(&self) -> String {
        self.created
            .as_ref()
            .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
    }

    /// Non-empty commit message, if the deployment came from a git push
    pub fn commit_message(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.github_commit_message.as_deref())
            .filter(|message| !message.is_empty())
    }

    /// Commit message cut to [`COMMIT_MESSAGE_WIDTH`] chars
    pub fn commit_summary(&self) -> Option<String> {
        self.commit_message()
            .map(|message| message.chars().take(COMMIT_MESSAGE_WIDTH).collect())
    }
}

/// Detailed status of one deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub state: Option<String>,
    pub url: Option<String>,
    pub created: Option<Timestamp>,
    pub build: Option<BuildInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Build time in milliseconds
    pub duration: Option<u64>,
    pub status: Option<String>,
}

impl DeploymentStatus {
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn created(&self) -> String {
        self.created
            .as_ref()
            .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
    }
}

impl BuildInfo {
    pub fn duration(&self) -> String {
        self.duration
            .map_or_else(|| UNKNOWN.to_string(), |ms| ms.to_string())
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN)
    }
}
