//! Crate-level error types
//!
//! Transport and startup failures only. Signaling-level outcomes
//! (`room-not-found`, `room-taken`) are wire replies, not errors; an
//! individual connection failing is scoped to that connection's task and
//! never fatal to the process.

use tokio_tungstenite::tungstenite;

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for server and transport operations
#[derive(Debug)]
pub enum Error {
    /// Socket-level I/O failure (bind, accept)
    Io(std::io::Error),
    /// WebSocket protocol failure on one connection
    WebSocket(tungstenite::Error),
    /// The hub task has stopped and can take no more commands
    HubClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::WebSocket(e) => write!(f, "WebSocket error: {}", e),
            Error::HubClosed => write!(f, "Signaling hub is closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::WebSocket(e) => Some(e),
            Error::HubClosed => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<tungstenite::Error> for Error {
    fn from(e: tungstenite::Error) -> Self {
        Error::WebSocket(e)
    }
}
