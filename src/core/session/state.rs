use serde::{Deserialize, Serialize};

/// Connection status of the serial session.
///
/// A connect request moves Disconnected to Connecting; a successful open
/// lands in Connected, a failed one falls back to Disconnected. There is no
/// automatic reconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No channel is open
    Disconnected,
    /// An open attempt is in flight
    Connecting,
    /// The channel is open and relaying bytes
    Connected,
}

impl SessionStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, SessionStatus::Connected)
    }

    pub fn is_disconnected(self) -> bool {
        matches!(self, SessionStatus::Disconnected)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Disconnected => write!(f, "Disconnected"),
            SessionStatus::Connecting => write!(f, "Connecting"),
            SessionStatus::Connected => write!(f, "Connected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(SessionStatus::Disconnected.is_disconnected());
        assert!(!SessionStatus::Disconnected.is_connected());
        assert!(SessionStatus::Connected.is_connected());
        assert!(!SessionStatus::Connecting.is_connected());
        assert!(!SessionStatus::Connecting.is_disconnected());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionStatus::Disconnected.to_string(), "Disconnected");
        assert_eq!(SessionStatus::Connecting.to_string(), "Connecting");
        assert_eq!(SessionStatus::Connected.to_string(), "Connected");
    }
}
