//! Signaling protocol messages
//!
//! Messages travel as JSON text frames over the WebSocket transport. The
//! `type` field selects the message kind (kebab-case); remaining fields are
//! camelCase. SDP and ICE payloads are carried as opaque JSON values and
//! relayed byte-for-byte, never inspected.
//!
//! # Message catalog
//!
//! | Event | Direction | Effect |
//! |---|---|---|
//! | `create-room` | client → server | creates a Room, replies `room-created` |
//! | `room-created` | server → client | ack to broadcaster |
//! | `room-taken` | server → client | create rejected, id collision |
//! | `join-room` | client → server | joins a Room or replies `room-not-found` |
//! | `room-not-found` | server → client | join failed |
//! | `listener-joined` | server → broadcaster | new listener to negotiate with |
//! | `listener-count` | server → room | current listener total |
//! | `offer` | relayed | SDP offer, broadcaster → listener |
//! | `answer` | relayed | SDP answer, listener → broadcaster |
//! | `ice-candidate` | relayed | connectivity candidate, either direction |
//! | `stream-ended` | server → room | broadcaster gone, room closed |

pub mod message;

pub use message::{ClientMessage, ConnectionId, RoomId, ServerMessage};
