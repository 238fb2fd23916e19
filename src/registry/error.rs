//! Registry error types
//!
//! Error types for room table operations.

use crate::protocol::RoomId;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No live room under this id
    RoomNotFound(RoomId),
    /// A live room already holds this id
    RoomTaken(RoomId),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::RoomNotFound(id) => write!(f, "Room not found: {}", id),
            RegistryError::RoomTaken(id) => write!(f, "Room id already taken: {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}
