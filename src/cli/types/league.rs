//! League types and the league filter shared by player and team queries.

use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Competitions covered by the catalog.
///
/// Serialized with the league's display name so exported CSV rows read
/// `USL Championship` rather than a Rust identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "MLS")]
    Mls,
    #[serde(rename = "USL Championship")]
    UslChampionship,
    #[serde(rename = "USL League One")]
    UslLeagueOne,
}

impl League {
    pub const ALL: [League; 3] = [League::Mls, League::UslChampionship, League::UslLeagueOne];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Mls => "MLS",
            League::UslChampionship => "USL Championship",
            League::UslLeagueOne => "USL League One",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for League {
    type Err = ScoutError;

    /// Accepts the display name in any case, plus dashed and short aliases
    /// (`usl-championship`, `uslc`, `usl1`) for command-line use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "mls" => Ok(League::Mls),
            "usl championship" | "uslc" => Ok(League::UslChampionship),
            "usl league one" | "usl1" | "usl l1" => Ok(League::UslLeagueOne),
            _ => Err(ScoutError::InvalidLeague {
                league: s.to_string(),
            }),
        }
    }
}

/// League criterion: `All Leagues` or one exact league.
///
/// Serialized through its display string, e.g. `"All Leagues"` or `"USL Championship"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LeagueFilter {
    #[default]
    All,
    Only(League),
}

impl LeagueFilter {
    pub fn matches(&self, league: League) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Only(wanted) => *wanted == league,
        }
    }
}

impl fmt::Display for LeagueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueFilter::All => write!(f, "All Leagues"),
            LeagueFilter::Only(league) => write!(f, "{}", league),
        }
    }
}

impl FromStr for LeagueFilter {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all leagues" => Ok(LeagueFilter::All),
            _ => Ok(LeagueFilter::Only(s.parse()?)),
        }
    }
}

impl From<LeagueFilter> for String {
    fn from(filter: LeagueFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for LeagueFilter {
    type Error = ScoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
