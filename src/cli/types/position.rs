//! Soccer position types and the position filter.

use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// On-pitch positions tracked by the catalog.
///
/// # Examples
///
/// ```rust
/// use soccer_scout::Position;
///
/// let pos: Position = "cdm".parse().unwrap();
/// assert_eq!(pos, Position::CDM);
/// assert_eq!(pos.to_string(), "CDM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Goalkeeper
    GK,
    /// Centre back
    CB,
    /// Left back
    LB,
    /// Right back
    RB,
    /// Defensive midfielder
    CDM,
    /// Central midfielder
    CM,
    /// Attacking midfielder
    CAM,
    /// Left winger
    LW,
    /// Right winger
    RW,
    /// Striker
    ST,
    /// Forward
    FW,
}

impl Position {
    /// Every position, in the order the filter menu lists them.
    pub const ALL: [Position; 11] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::LW,
        Position::RW,
        Position::ST,
        Position::FW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
            Position::FW => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| ScoutError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

/// Position criterion: either every position or exactly one.
///
/// Serialized through its display string, e.g. `"All Positions"` or `"CDM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    pub fn matches(&self, position: Position) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(wanted) => *wanted == position,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => write!(f, "All Positions"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all positions" => Ok(PositionFilter::All),
            _ => Ok(PositionFilter::Only(s.parse()?)),
        }
    }
}

impl From<PositionFilter> for String {
    fn from(filter: PositionFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for PositionFilter {
    type Error = ScoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
