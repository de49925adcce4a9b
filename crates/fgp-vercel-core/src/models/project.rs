//! Project records returned by `vercel.projects`

use super::{null_as_default, Timestamp, UNKNOWN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<String>,
    pub name: Option<String>,
    pub framework: Option<String>,
    pub updated_at: Option<Timestamp>,
}

impl Project {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn framework(&self) -> &str {
        self.framework.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn updated_at(&self) -> String {
        self.updated_at
            .as_ref()
            .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
    }
}
