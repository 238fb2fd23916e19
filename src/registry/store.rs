//! Room table implementation
//!
//! A plain `HashMap` keyed by room id. No interior mutability and no
//! locking: the hub owns the table and processes one event at a time, so
//! every mutation here is already serialized.

use std::collections::HashMap;

use crate::protocol::RoomId;

use super::error::RegistryError;
use super::room::Room;

/// Directory of all live rooms, keyed by room id
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
}

impl RoomRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room, unconditionally overwriting any room under the same id
    ///
    /// Returns the displaced room, if any. Collision policy is the hub's
    /// concern, not the table's; the hub uses [`RoomRegistry::create`].
    pub fn insert(&mut self, room: Room) -> Option<Room> {
        self.rooms.insert(room.id.clone(), room)
    }

    /// Insert a room, rejecting the id if a live room already holds it
    pub fn create(&mut self, room: Room) -> Result<(), RegistryError> {
        if self.rooms.contains_key(&room.id) {
            return Err(RegistryError::RoomTaken(room.id));
        }
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    /// Look up a room by id
    pub fn get(&self, room_id: &str) -> Result<&Room, RegistryError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.to_string()))
    }

    /// Look up a room by id for mutation
    pub fn get_mut(&mut self, room_id: &str) -> Result<&mut Room, RegistryError> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.to_string()))
    }

    /// Remove a room by id
    pub fn remove(&mut self, room_id: &str) -> Option<Room> {
        self.rooms.remove(room_id)
    }

    /// Whether a live room holds this id
    pub fn contains(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    /// Iterate over all live rooms, order unspecified
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterate over all live rooms for mutation, order unspecified
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.values_mut()
    }

    /// Number of live rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no rooms are live
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
