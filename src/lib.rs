//! WebRTC signaling server for ephemeral one-to-many live audio broadcasts
//!
//! A broadcaster's browser streams a live audio mix to any number of
//! listeners over direct peer-to-peer transport; this crate is the control
//! plane that lets those browsers find each other. It relays the
//! session-description and connectivity-candidate messages needed to set up
//! the peer-to-peer session and never touches the audio itself.
//!
//! # Architecture
//!
//! - [`protocol`] — the JSON wire messages exchanged with browsers.
//! - [`registry`] — the room table: one broadcaster and a set of listeners
//!   per room, alive exactly as long as the broadcaster's connection.
//! - [`hub`] — the signaling core. A single task owns all state and
//!   processes commands one at a time, so there are no locks: room
//!   creation, joins, targeted relay, and disconnect teardown are all plain
//!   synchronous handlers.
//! - [`server`] — the WebSocket transport: accept loop and per-connection
//!   read/write pumps adapting browsers to the hub.
//!
//! Rooms are ephemeral. Nothing persists across restarts, a reconnecting
//! browser is a brand-new connection, and a room dies the moment its
//! broadcaster disconnects.
//!
//! # Example
//!
//! ```ignore
//! use aircast_rs::{ServerConfig, SignalingServer};
//!
//! #[tokio::main]
//! async fn main() -> aircast_rs::Result<()> {
//!     let config = ServerConfig::from_env();
//!     let server = SignalingServer::new(config);
//!     server.run_until(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     }).await
//! }
//! ```

pub mod error;
pub mod hub;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod stats;

pub use error::{Error, Result};
pub use hub::HubHandle;
pub use protocol::{ClientMessage, ConnectionId, RoomId, ServerMessage};
pub use registry::{Room, RoomRegistry};
pub use server::{ServerConfig, SignalingServer};
pub use stats::HubStats;
