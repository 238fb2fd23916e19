//! Signaling server listener
//!
//! Handles the TCP accept loop and spawns connection handlers.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;

use crate::error::Result;
use crate::hub::{self, HubHandle};
use crate::registry::RoomRegistry;
use crate::server::config::ServerConfig;
use crate::server::connection::Connection;

/// WebSocket signaling server
pub struct SignalingServer {
    config: ServerConfig,
    hub: HubHandle,
    connection_semaphore: Option<Arc<Semaphore>>,
}

impl SignalingServer {
    /// Create a new server with the given configuration
    ///
    /// Spawns the hub task, so this must be called from within a tokio
    /// runtime.
    pub fn new(config: ServerConfig) -> Self {
        let connection_semaphore = if config.max_connections > 0 {
            Some(Arc::new(Semaphore::new(config.max_connections)))
        } else {
            None
        };

        Self {
            config,
            hub: hub::spawn(RoomRegistry::new()),
            connection_semaphore,
        }
    }

    /// Get a handle to the signaling hub
    pub fn hub(&self) -> &HubHandle {
        &self.hub
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }

    /// Run the server
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "Signaling server listening");

        self.accept_loop(&listener).await
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()>,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "Signaling server listening");

        tokio::select! {
            _ = shutdown => {
                tracing::info!("Shutdown signal received");
                Ok(())
            }
            result = self.accept_loop(&listener) => result,
        }
    }

    async fn accept_loop(&self, listener: &TcpListener) -> Result<()> {
        loop {
            match listener.accept().await {
                Ok((socket, peer_addr)) => {
                    self.handle_connection(socket, peer_addr);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }

    fn handle_connection(&self, socket: TcpStream, peer_addr: SocketAddr) {
        // Check connection limit
        let permit = if let Some(ref sem) = self.connection_semaphore {
            match sem.clone().try_acquire_owned() {
                Ok(permit) => Some(permit),
                Err(_) => {
                    tracing::warn!(peer = %peer_addr, "Connection rejected: limit reached");
                    return;
                }
            }
        } else {
            None
        };

        tracing::debug!(peer = %peer_addr, "New connection");

        let connection = Connection::new(socket, peer_addr, self.hub.clone());
        tokio::spawn(async move {
            // Held until the connection ends
            let _permit = permit;

            if let Err(e) = connection.run().await {
                tracing::debug!(peer = %peer_addr, error = %e, "Connection error");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_connection_limit() {
        let config = ServerConfig::default()
            .bind("127.0.0.1:0".parse().unwrap())
            .max_connections(1);
        let server = Arc::new(SignalingServer::new(config));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accept_server = Arc::clone(&server);
        tokio::spawn(async move {
            let _ = accept_server.accept_loop(&listener).await;
        });

        let (ws1, _) = tokio_tungstenite::connect_async(format!("ws://{}", addr))
            .await
            .unwrap();

        // Second connection is rejected at accept: the socket closes before
        // or during the WebSocket upgrade
        let second = tokio_tungstenite::connect_async(format!("ws://{}", addr)).await;
        if let Ok((mut ws2, _)) = second {
            use futures_util::StreamExt;
            let frame = tokio::time::timeout(Duration::from_secs(5), ws2.next())
                .await
                .expect("timed out");
            assert!(!matches!(
                frame,
                Some(Ok(tokio_tungstenite::tungstenite::Message::Text(_)))
            ));
        }

        drop(ws1);
    }
}
