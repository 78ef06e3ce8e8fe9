//! ID types for catalog records.

use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player identifiers.
///
/// Identifiers are unique and stable across the player catalog, and are the
/// only thing a watchlist stores.
///
/// # Examples
///
/// ```rust
/// use soccer_scout::PlayerId;
///
/// let id = PlayerId::new(8);
/// assert_eq!(id.as_u32(), 8);
/// assert_eq!(id.to_string(), "8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new PlayerId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PlayerId {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for team identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str_valid() {
        let id: PlayerId = "12".parse().unwrap();
        assert_eq!(id.as_u32(), 12);
    }

    #[test]
    fn test_player_id_from_str_trims_whitespace() {
        let id: PlayerId = " 7 ".parse().unwrap();
        assert_eq!(id, PlayerId::new(7));
    }

    #[test]
    fn test_player_id_from_str_invalid() {
        let result: Result<PlayerId> = "seven".parse();
        assert!(matches!(result, Err(ScoutError::InvalidPlayerId(_))));
    }

    #[test]
    fn test_player_id_from_str_negative() {
        let result: Result<PlayerId> = "-1".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_player_id_ordering() {
        assert!(PlayerId::new(2) < PlayerId::new(10));
    }

    #[test]
    fn test_player_id_serde() {
        let id = PlayerId::new(4);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "4");
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_team_id_display() {
        assert_eq!(TeamId::new(3).to_string(), "3");
    }
}
