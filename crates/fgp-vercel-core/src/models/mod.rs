pub mod config;
pub mod deployment;
pub mod domain;
pub mod health;
pub mod log;
pub mod project;
pub mod timestamp;

pub use config::ClientConfig;
pub use deployment::{BuildInfo, Deployment, DeploymentList, DeploymentMeta, DeploymentStatus};
pub use domain::{Domain, DomainList};
pub use health::Health;
pub use log::{LogLine, LogList};
pub use project::{Project, ProjectList};
pub use timestamp::Timestamp;

use serde::{Deserialize, Deserializer};

/// Placeholder shown for any absent field
pub const UNKNOWN: &str = "unknown";

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
