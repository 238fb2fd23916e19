//! Hub task commands and the cloneable handle
//!
//! Connections never touch hub state directly; everything goes through
//! [`HubCommand`]s sent over an mpsc channel to the hub task.

use tokio::sync::{mpsc, oneshot};

use crate::error::{Error, Result};
use crate::protocol::{ClientMessage, ConnectionId, ServerMessage};
use crate::registry::RoomRegistry;
use crate::stats::HubStats;

use super::relay::SignalingHub;

/// Commands processed by the hub task, one at a time
#[derive(Debug)]
pub enum HubCommand {
    /// Register a new connection's outbox, replies with its minted id
    Connect {
        outbox: mpsc::UnboundedSender<ServerMessage>,
        reply: oneshot::Sender<ConnectionId>,
    },

    /// One inbound message from a connection
    Inbound {
        conn_id: ConnectionId,
        message: ClientMessage,
    },

    /// The connection is gone; run teardown
    Disconnect { conn_id: ConnectionId },

    /// Snapshot current statistics
    Stats { reply: oneshot::Sender<HubStats> },
}

/// Cloneable handle to a running hub task
///
/// The hub task exits once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct HubHandle {
    tx: mpsc::UnboundedSender<HubCommand>,
}

impl HubHandle {
    /// Register a connection and receive its id
    pub async fn connect(
        &self,
        outbox: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<ConnectionId> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HubCommand::Connect { outbox, reply })
            .map_err(|_| Error::HubClosed)?;
        rx.await.map_err(|_| Error::HubClosed)
    }

    /// Forward one inbound message to the hub
    ///
    /// Fire-and-forget: a closed hub means the process is shutting down and
    /// the message has nowhere to go anyway.
    pub fn inbound(&self, conn_id: ConnectionId, message: ClientMessage) {
        let _ = self.tx.send(HubCommand::Inbound { conn_id, message });
    }

    /// Report a disconnect, triggering teardown
    pub fn disconnect(&self, conn_id: ConnectionId) {
        let _ = self.tx.send(HubCommand::Disconnect { conn_id });
    }

    /// Snapshot current hub statistics
    pub async fn stats(&self) -> Result<HubStats> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HubCommand::Stats { reply })
            .map_err(|_| Error::HubClosed)?;
        rx.await.map_err(|_| Error::HubClosed)
    }
}

/// Spawn the hub task around the given room table
///
/// Must be called from within a tokio runtime.
pub fn spawn(rooms: RoomRegistry) -> HubHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(SignalingHub::new(rooms).run(rx));
    HubHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_round_trip() {
        tokio_test::block_on(async {
            let hub = spawn(RoomRegistry::new());

            let (outbox, mut rx) = mpsc::unbounded_channel();
            let conn_id = hub.connect(outbox).await.unwrap();
            assert_eq!(conn_id, 1);

            hub.inbound(
                conn_id,
                ClientMessage::CreateRoom {
                    room_id: "abc12".to_string(),
                },
            );

            let ack = rx.recv().await.unwrap();
            assert_eq!(
                ack,
                ServerMessage::RoomCreated {
                    room_id: "abc12".to_string()
                }
            );

            let stats = hub.stats().await.unwrap();
            assert_eq!(stats.active_connections, 1);
            assert_eq!(stats.open_rooms, 1);
        });
    }

    #[test]
    fn test_disconnect_through_handle() {
        tokio_test::block_on(async {
            let hub = spawn(RoomRegistry::new());

            let (outbox, _rx) = mpsc::unbounded_channel();
            let conn_id = hub.connect(outbox).await.unwrap();
            hub.disconnect(conn_id);

            // Commands are processed in order, so stats sees the disconnect
            let stats = hub.stats().await.unwrap();
            assert_eq!(stats.active_connections, 0);
            assert_eq!(stats.total_connections, 1);
        });
    }
}
