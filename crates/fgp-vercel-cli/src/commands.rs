//! One daemon call per command, rendered to the given writer
//!
//! Transport and decode faults are returned to the caller. A reply with
//! `ok: false` is printed and the command still succeeds.

use crate::display;
use anyhow::{Context, Result};
use fgp_vercel_client::{ClientConfig, VercelClient};
use fgp_vercel_core::storage::ConfigStorage;
use std::io::Write;
use std::path::PathBuf;

/// Default number of deployments listed
pub const DEFAULT_DEPLOYMENT_LIMIT: u32 = 5;

/// Default number of log lines fetched
pub const DEFAULT_LOG_LIMIT: u32 = 50;

/// Load the stored config and apply command-line overrides on top
pub fn load_config(
    storage: &ConfigStorage,
    socket: Option<PathBuf>,
    timeout_secs: Option<u64>,
) -> Result<ClientConfig> {
    let mut config = storage.load().context("Failed to load client config")?;
    if let Some(socket) = socket {
        config.socket_path = socket;
    }
    if let Some(timeout) = timeout_secs {
        config.timeout_secs = Some(timeout);
    }
    config.validate()?;
    Ok(config)
}

/// Returns whether the daemon reported itself healthy
pub async fn check_health(client: &VercelClient, out: &mut impl Write) -> Result<bool> {
    let healthy = client.health().await?.is_success();
    display::health(out, healthy)?;
    Ok(healthy)
}

pub async fn list_projects(client: &VercelClient, out: &mut impl Write) -> Result<()> {
    let reply = client.projects().await?;
    display::projects(out, &reply)?;
    Ok(())
}

pub async fn list_deployments(
    client: &VercelClient,
    out: &mut impl Write,
    project: Option<&str>,
    limit: u32,
) -> Result<()> {
    let reply = client.deployments(project, limit).await?;
    display::deployments(out, project, &reply)?;
    Ok(())
}

pub async fn deployment_logs(
    client: &VercelClient,
    out: &mut impl Write,
    deployment_id: &str,
    limit: u32,
) -> Result<()> {
    let reply = client.logs(deployment_id, limit).await?;
    display::logs(out, deployment_id, &reply)?;
    Ok(())
}

pub async fn deployment_status(
    client: &VercelClient,
    out: &mut impl Write,
    deployment_id: &str,
) -> Result<()> {
    let reply = client.status(deployment_id).await?;
    display::status(out, deployment_id, &reply)?;
    Ok(())
}

pub async fn list_domains(client: &VercelClient, out: &mut impl Write, project: &str) -> Result<()> {
    let reply = client.domains(project).await?;
    display::domains(out, project, &reply)?;
    Ok(())
}

/// Health check, then projects and recent deployments.
/// Returns false without listing anything when the daemon is unhealthy.
pub async fn demo(client: &VercelClient, out: &mut impl Write) -> Result<bool> {
    display::banner(out)?;

    if !check_health(client, out).await? {
        return Ok(false);
    }

    list_projects(client, out).await?;
    list_deployments(client, out, None, DEFAULT_DEPLOYMENT_LIMIT).await?;
    Ok(true)
}
