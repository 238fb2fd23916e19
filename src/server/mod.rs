//! WebSocket transport layer
//!
//! Accepts TCP connections, upgrades them to WebSocket, and pumps JSON
//! frames between each browser and the hub. All signaling decisions live in
//! [`crate::hub`]; this layer only moves and frames bytes.

pub mod config;
pub mod connection;
pub mod listener;

pub use config::ServerConfig;
pub use connection::Connection;
pub use listener::SignalingServer;
