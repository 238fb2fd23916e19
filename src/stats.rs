//! Hub statistics

/// Snapshot of hub-level counters
///
/// Taken atomically with respect to all signaling events, since the hub
/// task answers the stats query between commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HubStats {
    /// Currently live connections
    pub active_connections: usize,
    /// Connections accepted over the process lifetime
    pub total_connections: u64,
    /// Currently open rooms
    pub open_rooms: usize,
}
