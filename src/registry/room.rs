//! Per-room state

use std::collections::HashSet;
use std::time::Instant;

use crate::protocol::{ConnectionId, RoomId};

/// A single live room: one broadcaster, any number of listeners
///
/// The room's delivery group for server broadcasts is the broadcaster plus
/// every current listener, exposed by [`Room::subscribers`]. Membership is
/// tracked here; actual delivery goes through the hub's connection map, so
/// the room stays decoupled from the transport.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room identifier, client-generated
    pub id: RoomId,

    /// The connection that created the room
    pub broadcaster_id: ConnectionId,

    /// Connections that joined via `join-room` and have not disconnected
    listeners: HashSet<ConnectionId>,

    /// When the room was created
    pub created_at: Instant,
}

impl Room {
    /// Create a new room with an empty listener set
    pub fn new(id: RoomId, broadcaster_id: ConnectionId) -> Self {
        Self {
            id,
            broadcaster_id,
            listeners: HashSet::new(),
            created_at: Instant::now(),
        }
    }

    /// Add a listener; returns false if it was already present
    pub fn add_listener(&mut self, conn_id: ConnectionId) -> bool {
        self.listeners.insert(conn_id)
    }

    /// Remove a listener; returns false if it was not present
    pub fn remove_listener(&mut self, conn_id: ConnectionId) -> bool {
        self.listeners.remove(&conn_id)
    }

    /// Whether this connection is the room's broadcaster
    pub fn is_broadcaster(&self, conn_id: ConnectionId) -> bool {
        self.broadcaster_id == conn_id
    }

    /// Whether this connection is listening in the room
    pub fn has_listener(&self, conn_id: ConnectionId) -> bool {
        self.listeners.contains(&conn_id)
    }

    /// Current number of listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The delivery group: broadcaster plus every listener
    pub fn subscribers(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        std::iter::once(self.broadcaster_id).chain(self.listeners.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_empty() {
        let room = Room::new("abc12".to_string(), 1);

        assert_eq!(room.listener_count(), 0);
        assert!(room.is_broadcaster(1));
        assert!(!room.is_broadcaster(2));
    }

    #[test]
    fn test_listener_membership() {
        let mut room = Room::new("abc12".to_string(), 1);

        assert!(room.add_listener(2));
        assert!(!room.add_listener(2)); // re-join is a no-op
        assert!(room.add_listener(3));
        assert_eq!(room.listener_count(), 2);
        assert!(room.has_listener(2));

        assert!(room.remove_listener(2));
        assert!(!room.remove_listener(2));
        assert_eq!(room.listener_count(), 1);
    }

    #[test]
    fn test_subscribers_include_broadcaster() {
        let mut room = Room::new("abc12".to_string(), 1);
        room.add_listener(2);
        room.add_listener(3);

        let subs: std::collections::HashSet<_> = room.subscribers().collect();
        assert_eq!(subs.len(), 3);
        assert!(subs.contains(&1));
        assert!(subs.contains(&2));
        assert!(subs.contains(&3));
    }
}
