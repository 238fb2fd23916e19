//! Signaling hub implementation
//!
//! All room and relay state lives here, behind synchronous handlers invoked
//! one command at a time by the hub task's run loop.

use std::collections::HashMap;

use tokio::sync::mpsc;

use crate::protocol::{ClientMessage, ConnectionId, RoomId, ServerMessage};
use crate::registry::{Room, RoomRegistry};
use crate::stats::HubStats;

use super::command::HubCommand;

/// The signaling core: connection outboxes plus the room table
///
/// Roles are never stored per connection; whether a connection is a
/// broadcaster or a listener is derived from the room table alone, so
/// teardown needs no bookkeeping beyond a table scan.
pub struct SignalingHub {
    /// Outbox queue per live connection
    connections: HashMap<ConnectionId, mpsc::UnboundedSender<ServerMessage>>,

    /// Directory of live rooms
    rooms: RoomRegistry,

    /// Next connection id to mint
    next_conn_id: ConnectionId,

    /// Connections accepted over the process lifetime
    total_connections: u64,
}

impl SignalingHub {
    /// Create a hub around the given room table
    pub fn new(rooms: RoomRegistry) -> Self {
        Self {
            connections: HashMap::new(),
            rooms,
            next_conn_id: 1,
            total_connections: 0,
        }
    }

    /// Run the hub until every command sender has been dropped
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<HubCommand>) {
        while let Some(command) = rx.recv().await {
            self.handle_command(command);
        }

        tracing::debug!("Signaling hub stopped");
    }

    fn handle_command(&mut self, command: HubCommand) {
        match command {
            HubCommand::Connect { outbox, reply } => {
                let conn_id = self.connect(outbox);
                let _ = reply.send(conn_id);
            }
            HubCommand::Inbound { conn_id, message } => self.handle_message(conn_id, message),
            HubCommand::Disconnect { conn_id } => self.disconnect(conn_id),
            HubCommand::Stats { reply } => {
                let _ = reply.send(self.stats());
            }
        }
    }

    /// Register a new connection's outbox and mint its id
    pub fn connect(&mut self, outbox: mpsc::UnboundedSender<ServerMessage>) -> ConnectionId {
        let conn_id = self.next_conn_id;
        self.next_conn_id += 1;
        self.total_connections += 1;
        self.connections.insert(conn_id, outbox);

        tracing::debug!(conn_id, "Connection registered");
        conn_id
    }

    /// Dispatch one inbound message from a connection
    pub fn handle_message(&mut self, conn_id: ConnectionId, message: ClientMessage) {
        match message {
            ClientMessage::CreateRoom { room_id } => self.create_room(conn_id, room_id),
            ClientMessage::JoinRoom { room_id } => self.join_room(conn_id, room_id),
            ClientMessage::Offer { target, offer } => self.send(
                target,
                ServerMessage::Offer {
                    offer,
                    broadcaster: conn_id,
                },
            ),
            ClientMessage::Answer { target, answer } => self.send(
                target,
                ServerMessage::Answer {
                    answer,
                    listener: conn_id,
                },
            ),
            ClientMessage::IceCandidate { target, candidate } => self.send(
                target,
                ServerMessage::IceCandidate {
                    candidate,
                    from: conn_id,
                },
            ),
        }
    }

    fn create_room(&mut self, conn_id: ConnectionId, room_id: RoomId) {
        match self.rooms.create(Room::new(room_id.clone(), conn_id)) {
            Ok(()) => {
                tracing::info!(room = %room_id, broadcaster = conn_id, "Room created");
                self.send(conn_id, ServerMessage::RoomCreated { room_id });
            }
            Err(err) => {
                tracing::debug!(conn_id, error = %err, "Create rejected");
                self.send(conn_id, ServerMessage::RoomTaken { room_id });
            }
        }
    }

    fn join_room(&mut self, conn_id: ConnectionId, room_id: RoomId) {
        let (broadcaster_id, count) = match self.rooms.get_mut(&room_id) {
            Ok(room) => {
                room.add_listener(conn_id);
                (room.broadcaster_id, room.listener_count())
            }
            Err(err) => {
                tracing::debug!(conn_id, error = %err, "Join failed");
                self.send(conn_id, ServerMessage::RoomNotFound);
                return;
            }
        };

        tracing::info!(room = %room_id, listener = conn_id, listeners = count, "Listener joined");

        // Notify the broadcaster, then tell the whole room the new count
        self.send(
            broadcaster_id,
            ServerMessage::ListenerJoined {
                listener_id: conn_id,
            },
        );
        if let Ok(room) = self.rooms.get(&room_id) {
            self.broadcast(room, &ServerMessage::ListenerCount { count });
        }
    }

    /// Tear down everything the disconnecting connection was involved in
    ///
    /// Every room broadcast by the connection is closed (`stream-ended` to
    /// its remaining members), then every room it was listening in gets an
    /// updated listener count. Cost is bounded by the number of open rooms.
    pub fn disconnect(&mut self, conn_id: ConnectionId) {
        self.connections.remove(&conn_id);
        tracing::debug!(conn_id, "Connection removed");

        // Rooms this connection was broadcasting
        let ended: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|room| room.is_broadcaster(conn_id))
            .map(|room| room.id.clone())
            .collect();

        for room_id in ended {
            if let Some(room) = self.rooms.remove(&room_id) {
                self.broadcast(&room, &ServerMessage::StreamEnded);
                tracing::info!(room = %room_id, "Room closed");
            }
        }

        // Rooms this connection was listening in
        let mut updated: Vec<RoomId> = Vec::new();
        for room in self.rooms.iter_mut() {
            if room.remove_listener(conn_id) {
                updated.push(room.id.clone());
            }
        }

        for room_id in updated {
            if let Ok(room) = self.rooms.get(&room_id) {
                let count = room.listener_count();
                tracing::debug!(room = %room_id, listeners = count, "Listener left");
                self.broadcast(room, &ServerMessage::ListenerCount { count });
            }
        }
    }

    /// Current hub statistics
    pub fn stats(&self) -> HubStats {
        HubStats {
            active_connections: self.connections.len(),
            total_connections: self.total_connections,
            open_rooms: self.rooms.len(),
        }
    }

    /// Deliver a message to one connection
    ///
    /// A target that is not currently live is a silent drop: the sender's
    /// own negotiation timeout is expected to detect the failure.
    fn send(&self, target: ConnectionId, message: ServerMessage) {
        match self.connections.get(&target) {
            Some(outbox) => {
                let _ = outbox.send(message);
            }
            None => {
                tracing::trace!(target, "Dropping message for dead connection");
            }
        }
    }

    /// Deliver a message to every member of a room's delivery group
    fn broadcast(&self, room: &Room, message: &ServerMessage) {
        for conn_id in room.subscribers() {
            self.send(conn_id, message.clone());
        }
    }
}
