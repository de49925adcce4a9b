//! Human-readable rendering of daemon replies
//!
//! Entries are printed in the order the daemon returned them. A failed reply
//! prints its error line and is otherwise not treated specially.

use fgp_vercel_core::markers::{deployment_marker, log_marker, status_marker, verified_marker};
use fgp_vercel_core::models::{DeploymentList, DeploymentStatus, DomainList, LogList, ProjectList};
use fgp_vercel_core::Reply;
use std::io::{self, Write};

/// Width of the rule printed under each section header
pub const RULE_WIDTH: usize = 40;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Vercel Daemon Examples")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn health(out: &mut impl Write, healthy: bool) -> io::Result<()> {
    if healthy {
        writeln!(out, "✅ Vercel daemon is healthy")
    } else {
        writeln!(out, "❌ Vercel daemon not running. Start with: fgp start vercel")?;
        writeln!(out, "   Also ensure VERCEL_TOKEN is set")
    }
}

fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn failure(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "  ❌ Error: {}", message)
}

pub fn projects(out: &mut impl Write, reply: &Reply<ProjectList>) -> io::Result<()> {
    header(out, "🚀 Vercel Projects")?;

    let list = match reply {
        Reply::Success(list) => list,
        Reply::Failure(message) => return failure(out, message),
    };

    if list.projects.is_empty() {
        writeln!(out, "  No projects found")?;
    }
    for project in &list.projects {
        writeln!(out, "  • {}", project.name())?;
        writeln!(out, "    Framework: {}", project.framework())?;
        writeln!(out, "    Updated: {}", project.updated_at())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn deployments(
    out: &mut impl Write,
    project: Option<&str>,
    reply: &Reply<DeploymentList>,
) -> io::Result<()> {
    match project {
        Some(project) => header(out, &format!("📦 Recent Deployments for {}", project))?,
        None => header(out, "📦 Recent Deployments")?,
    }

    let list = match reply {
        Reply::Success(list) => list,
        Reply::Failure(message) => return failure(out, message),
    };

    if list.deployments.is_empty() {
        writeln!(out, "  No deployments found")?;
    }
    for deploy in &list.deployments {
        writeln!(out, "  {} {}", deployment_marker(deploy.state()), deploy.url())?;
        writeln!(out, "     State: {}", deploy.state())?;
        writeln!(out, "     Created: {}", deploy.created())?;
        if let Some(summary) = deploy.commit_summary() {
            writeln!(out, "     Commit: {}...", summary)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn logs(out: &mut impl Write, deployment_id: &str, reply: &Reply<LogList>) -> io::Result<()> {
    header(out, &format!("📝 Logs for deployment: {}", deployment_id))?;

    let list = match reply {
        Reply::Success(list) => list,
        Reply::Failure(message) => return failure(out, message),
    };

    if list.logs.is_empty() {
        writeln!(out, "  No logs found")?;
    }
    for log in &list.logs {
        writeln!(out, "  {} {}", log_marker(log.level()), log.message())?;
    }
    Ok(())
}

pub fn status(
    out: &mut impl Write,
    deployment_id: &str,
    reply: &Reply<DeploymentStatus>,
) -> io::Result<()> {
    header(out, &format!("📊 Deployment Status: {}", deployment_id))?;

    let status = match reply {
        Reply::Success(status) => status,
        Reply::Failure(message) => return failure(out, message),
    };

    writeln!(out, "  {} State: {}", status_marker(status.state()), status.state())?;
    writeln!(out, "  URL: {}", status.url())?;
    writeln!(out, "  Created: {}", status.created())?;

    if let Some(build) = &status.build {
        writeln!(out)?;
        writeln!(out, "  Build:")?;
        writeln!(out, "    Duration: {}ms", build.duration())?;
        writeln!(out, "    Status: {}", build.status())?;
    }
    Ok(())
}

pub fn domains(out: &mut impl Write, project: &str, reply: &Reply<DomainList>) -> io::Result<()> {
    header(out, &format!("🌐 Domains for: {}", project))?;

    let list = match reply {
        Reply::Success(list) => list,
        Reply::Failure(message) => return failure(out, message),
    };

    if list.domains.is_empty() {
        writeln!(out, "  No domains configured")?;
    }
    for domain in &list.domains {
        writeln!(out, "  [{}] {}", verified_marker(domain.verified), domain.name())?;
    }
    Ok(())
}
