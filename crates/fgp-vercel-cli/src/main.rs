//! fgp-vercel
//!
//! Command-line front end for the FGP Vercel daemon.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fgp_vercel_cli::commands::{self, DEFAULT_DEPLOYMENT_LIMIT, DEFAULT_LOG_LIMIT};
use fgp_vercel_client::VercelClient;
use fgp_vercel_core::storage::ConfigStorage;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "fgp-vercel")]
#[command(about = "Query the FGP Vercel daemon", long_about = None)]
struct Args {
    /// Socket path of the daemon (defaults to ~/.fgp/services/vercel/daemon.sock)
    #[arg(short, long)]
    socket: Option<PathBuf>,

    /// Give up on a request after this many seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the daemon is running
    Health,
    /// List projects
    Projects,
    /// List recent deployments
    Deployments {
        /// Only show deployments of this project
        #[arg(short, long)]
        project: Option<String>,

        #[arg(short = 'n', long, default_value_t = DEFAULT_DEPLOYMENT_LIMIT)]
        limit: u32,
    },
    /// Show build logs of a deployment
    Logs {
        deployment_id: String,

        #[arg(short = 'n', long, default_value_t = DEFAULT_LOG_LIMIT)]
        limit: u32,
    },
    /// Show detailed status of a deployment
    Status { deployment_id: String },
    /// List domains of a project
    Domains { project: String },
    /// Health check followed by projects and recent deployments
    Demo,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(&args.log_level)
        .with_ansi(false)
        .init();

    let storage = ConfigStorage::default_location()?;
    let config = commands::load_config(&storage, args.socket, args.timeout)?;

    tracing::debug!("Socket path: {}", config.socket_path.display());
    let client = VercelClient::with_config(config);
    let mut out = std::io::stdout();

    let ok = match args.command.unwrap_or(Command::Demo) {
        Command::Health => commands::check_health(&client, &mut out).await?,
        Command::Projects => {
            commands::list_projects(&client, &mut out).await?;
            true
        }
        Command::Deployments { project, limit } => {
            commands::list_deployments(&client, &mut out, project.as_deref(), limit).await?;
            true
        }
        Command::Logs {
            deployment_id,
            limit,
        } => {
            commands::deployment_logs(&client, &mut out, &deployment_id, limit).await?;
            true
        }
        Command::Status { deployment_id } => {
            commands::deployment_status(&client, &mut out, &deployment_id).await?;
            true
        }
        Command::Domains { project } => {
            commands::list_domains(&client, &mut out, &project).await?;
            true
        }
        Command::Demo => commands::demo(&client, &mut out).await?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
