//! Health check result

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whatever the daemon reports alongside `ok`; only the flag matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Health(pub Value);
