//! Domains returned by `vercel.domains`

use super::{null_as_default, UNKNOWN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<Domain>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
}

impl Domain {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }
}
