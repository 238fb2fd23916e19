//! Room table
//!
//! The process-wide directory of live rooms. A room exists in the table iff
//! its broadcaster connection is still live: it is created by `create-room`
//! and destroyed the instant its broadcaster disconnects.
//!
//! The table itself is a plain in-memory map with no locking and no policy.
//! It is owned exclusively by the signaling hub, which serializes every
//! mutation (see [`crate::hub`]), and the hub alone decides what happens on
//! an id collision.

pub mod error;
pub mod room;
pub mod store;

pub use error::RegistryError;
pub use room::Room;
pub use store::RoomRegistry;
