//! One-shot daemon connection

use crate::codec::EnvelopeCodec;
use fgp_vercel_core::{Error, Request, Result};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::path::Path;
use tokio::net::UnixStream;
use tokio_util::codec::Framed;

/// A connection that lives for exactly one exchange. `exchange` consumes it,
/// so the socket is closed when the call returns, whatever the outcome.
pub(crate) struct Connection {
    framed: Framed<UnixStream, EnvelopeCodec>,
}

impl Connection {
    pub(crate) async fn open(socket_path: &Path, codec: EnvelopeCodec) -> Result<Self> {
        let stream = UnixStream::connect(socket_path)
            .await
            .map_err(|source| Error::Connect {
                path: socket_path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Connected to {}", socket_path.display());

        Ok(Self {
            framed: Framed::new(stream, codec),
        })
    }

    pub(crate) async fn exchange(mut self, request: &Request) -> Result<Value> {
        self.framed.send(request).await?;

        match self.framed.next().await {
            Some(response) => response,
            None => Err(Error::ConnectionClosed),
        }
    }
}
