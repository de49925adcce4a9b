//! FGP Vercel Client Library
//!
//! Provides a client for the Vercel daemon over its Unix socket. Every call
//! opens a fresh connection, sends one request line, reads one response line
//! and closes the connection. Nothing is retried.

mod codec;
mod connection;

pub use codec::EnvelopeCodec;
pub use fgp_vercel_core::models::{
    ClientConfig, DeploymentList, DeploymentStatus, DomainList, Health, LogList, ProjectList,
};
pub use fgp_vercel_core::{Error, Reply, Request, Result};

use connection::Connection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Vercel daemon client
#[derive(Debug, Clone)]
pub struct VercelClient {
    config: ClientConfig,
}

impl VercelClient {
    /// Create a client for the given socket with default settings
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self::with_config(ClientConfig::with_socket(socket_path))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn socket_path(&self) -> &Path {
        &self.config.socket_path
    }

    /// Send a request and return the raw response.
    ///
    /// Transport and framing problems are errors. A well-formed response with
    /// `ok: false` is returned like any other response.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let request = Request::new(method, params)?;
        tracing::debug!("Sending {} request {}", request.method, request.id);

        let exchange = self.exchange(&request);
        let response = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| Error::Timeout(limit))
                .and_then(|response| response),
            None => exchange.await,
        };

        match &response {
            Ok(_) => tracing::debug!("Received response for request {}", request.id),
            Err(e) => tracing::warn!("Request {} ({}) failed: {}", request.id, request.method, e),
        }
        response
    }

    /// Send a request and decode the response into a typed reply
    pub async fn call_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Reply<T>> {
        Reply::from_response(self.call(method, params).await?)
    }

    async fn exchange(&self, request: &Request) -> Result<Value> {
        let codec = EnvelopeCodec::new(self.config.max_response_bytes);
        let connection = Connection::open(&self.config.socket_path, codec).await?;
        connection.exchange(request).await
    }

    /// Check that the daemon is up and has working credentials
    pub async fn health(&self) -> Result<Reply<Health>> {
        self.call_typed("health", None).await
    }

    /// List all projects
    pub async fn projects(&self) -> Result<Reply<ProjectList>> {
        self.call_typed("vercel.projects", None).await
    }

    /// List recent deployments, optionally for a single project
    pub async fn deployments(
        &self,
        project: Option<&str>,
        limit: u32,
    ) -> Result<Reply<DeploymentList>> {
        let mut params = serde_json::json!({ "limit": limit });
        if let Some(project) = project {
            params["project"] = Value::from(project);
        }

        self.call_typed("vercel.deployments", Some(params)).await
    }

    /// Get build logs for a deployment
    pub async fn logs(&self, deployment_id: &str, limit: u32) -> Result<Reply<LogList>> {
        self.call_typed(
            "vercel.logs",
            Some(serde_json::json!({
                "deployment_id": deployment_id,
                "limit": limit,
            })),
        )
        .await
    }

    /// Get detailed status for a deployment
    pub async fn status(&self, deployment_id: &str) -> Result<Reply<DeploymentStatus>> {
        self.call_typed(
            "vercel.status",
            Some(serde_json::json!({
                "deployment_id": deployment_id,
            })),
        )
        .await
    }

    /// List domains attached to a project
    pub async fn domains(&self, project: &str) -> Result<Reply<DomainList>> {
        self.call_typed(
            "vercel.domains",
            Some(serde_json::json!({
                "project": project,
            })),
        )
        .await
    }
}
