//! Signaling hub
//!
//! The event-driven core: room creation and join, point-to-point relay of
//! SDP/ICE payloads, and disconnect teardown.
//!
//! # Architecture
//!
//! The hub is a single tokio task owning all mutable state (the connection
//! outbox map and the [`RoomRegistry`](crate::registry::RoomRegistry)). It
//! receives [`HubCommand`]s over an mpsc channel and processes each one to
//! completion before the next; handlers are synchronous and never await, so
//! no locks exist anywhere in the core.
//!
//! ```text
//!  [Connection]──inbound──►┐
//!  [Connection]──inbound──►│ mpsc ──► SignalingHub task
//!  [Connection]──inbound──►┘            │ connections: HashMap<ConnectionId, outbox>
//!                                       │ rooms: RoomRegistry
//!                 ◄──outbox queues──────┘
//! ```
//!
//! Outbound delivery is a non-blocking push onto each recipient's outbox
//! queue, drained by that connection's writer. Events from one connection
//! are processed in send order; there is no cross-connection ordering
//! guarantee.

pub mod command;
pub mod relay;

pub use command::{spawn, HubCommand, HubHandle};
pub use relay::SignalingHub;
