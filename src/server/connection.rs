//! Per-connection read/write pumps
//!
//! Each accepted socket gets one task running [`Connection::run`]: upgrade
//! to WebSocket, register with the hub, then pump frames both ways until
//! the peer goes away. Whatever ends the connection, teardown is reported
//! to the hub exactly once.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::error::{Error, Result};
use crate::hub::HubHandle;
use crate::protocol::ClientMessage;

/// A single client connection
pub struct Connection {
    socket: TcpStream,
    peer_addr: SocketAddr,
    hub: HubHandle,
}

impl Connection {
    /// Wrap an accepted socket
    pub fn new(socket: TcpStream, peer_addr: SocketAddr, hub: HubHandle) -> Self {
        Self {
            socket,
            peer_addr,
            hub,
        }
    }

    /// Run the connection to completion
    ///
    /// Returns when the peer closes, the transport fails, or the hub drops
    /// this connection's outbox during shutdown.
    pub async fn run(self) -> Result<()> {
        let ws = tokio_tungstenite::accept_async(self.socket).await?;
        let (mut sink, mut stream) = ws.split();

        let (outbox_tx, mut outbox_rx) = mpsc::unbounded_channel();
        let conn_id = self.hub.connect(outbox_tx).await?;
        tracing::debug!(conn_id, peer = %self.peer_addr, "Connection established");

        let result = loop {
            tokio::select! {
                outbound = outbox_rx.recv() => {
                    match outbound {
                        Some(message) => {
                            let text = match serde_json::to_string(&message) {
                                Ok(text) => text,
                                Err(e) => {
                                    tracing::warn!(conn_id, error = %e, "Failed to encode frame");
                                    continue;
                                }
                            };
                            if let Err(e) = sink.send(Message::text(text)).await {
                                break Err(Error::WebSocket(e));
                            }
                        }
                        // Hub dropped the outbox; shutting down
                        None => break Ok(()),
                    }
                }
                inbound = stream.next() => {
                    match inbound {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<ClientMessage>(text.as_str()) {
                                Ok(message) => self.hub.inbound(conn_id, message),
                                Err(e) => {
                                    // Frame-scoped: drop it, keep the connection
                                    tracing::debug!(conn_id, error = %e, "Ignoring unparseable frame");
                                }
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => break Ok(()),
                        // Binary, ping and pong frames carry no signaling
                        Some(Ok(_)) => {}
                        Some(Err(e)) => break Err(Error::WebSocket(e)),
                    }
                }
            }
        };

        self.hub.disconnect(conn_id);
        tracing::debug!(conn_id, peer = %self.peer_addr, "Connection closed");
        result
    }
}
