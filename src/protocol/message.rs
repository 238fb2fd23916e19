//! Wire message types
//!
//! Inbound and outbound messages are closed enums, exhaustively matched by
//! the hub. A frame whose `type` tag is unknown fails to deserialize and is
//! dropped by the transport layer; the connection survives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque room identifier, client-generated
pub type RoomId = String;

/// Transport-assigned connection identifier
///
/// Minted by the hub as a monotonically increasing counter, stable for the
/// connection's lifetime and never reused while the process runs.
pub type ConnectionId = u64;

/// Messages a client may send to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Claim a room id and become its broadcaster
    #[serde(rename_all = "camelCase")]
    CreateRoom { room_id: RoomId },

    /// Join an existing room as a listener
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: RoomId },

    /// Relay an SDP offer to `target`
    Offer { target: ConnectionId, offer: Value },

    /// Relay an SDP answer to `target`
    Answer { target: ConnectionId, answer: Value },

    /// Relay an ICE candidate to `target`
    IceCandidate {
        target: ConnectionId,
        candidate: Value,
    },
}

/// Messages the server may send to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Room created, requester is now its broadcaster
    #[serde(rename_all = "camelCase")]
    RoomCreated { room_id: RoomId },

    /// Create rejected: a live room already holds this id
    #[serde(rename_all = "camelCase")]
    RoomTaken { room_id: RoomId },

    /// Join failed: no live room under the requested id
    RoomNotFound,

    /// Sent to the broadcaster when a listener joins its room
    #[serde(rename_all = "camelCase")]
    ListenerJoined { listener_id: ConnectionId },

    /// Current listener total, broadcast to the whole room
    ListenerCount { count: usize },

    /// Relayed SDP offer; `broadcaster` is the sender's connection id
    Offer {
        offer: Value,
        broadcaster: ConnectionId,
    },

    /// Relayed SDP answer; `listener` is the sender's connection id
    Answer {
        answer: Value,
        listener: ConnectionId,
    },

    /// Relayed ICE candidate; `from` is the sender's connection id
    IceCandidate {
        candidate: Value,
        from: ConnectionId,
    },

    /// Broadcaster disconnected; the room is gone
    StreamEnded,
}
