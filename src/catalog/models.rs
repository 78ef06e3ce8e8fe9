//! Data models for the catalog

use crate::cli::types::{League, PlayerId, Position, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the player catalog.
///
/// Field order is the CSV column order of a watchlist export, so new fields
/// must be appended at the end. Data source coverage is kept as four flat
/// booleans for the same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub age: u8,
    pub position: Position,
    pub club: String,
    pub league: League,
    pub nationality: String,
    pub market_value: u64,
    pub rating: f64,
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
    pub minutes_played: u32,
    pub pass_accuracy: u8,
    pub shots_per_game: f64,
    pub key_passes: f64,
    pub dribbles: f64,
    pub aerial_duels: f64,
    pub tackles: f64,
    pub interceptions: f64,
    pub clearances: f64,
    pub fbref: bool,
    pub transfermarkt: bool,
    pub asa: bool,
    pub sofascore: bool,
}

/// Column names of [`PlayerRecord`], in serialization order.
pub const PLAYER_FIELDS: [&str; 25] = [
    "id",
    "name",
    "age",
    "position",
    "club",
    "league",
    "nationality",
    "market_value",
    "rating",
    "goals",
    "assists",
    "matches",
    "minutes_played",
    "pass_accuracy",
    "shots_per_game",
    "key_passes",
    "dribbles",
    "aerial_duels",
    "tackles",
    "interceptions",
    "clearances",
    "fbref",
    "transfermarkt",
    "asa",
    "sofascore",
];

impl PlayerRecord {
    /// Whether `needle` occurs in the player name or club, ignoring case.
    ///
    /// The two fields are checked independently; either one matching is
    /// enough. An empty needle matches every player.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.club.to_lowercase().contains(&needle)
    }

    pub fn has_source(&self, source: DataSource) -> bool {
        match source {
            DataSource::FBref => self.fbref,
            DataSource::Transfermarkt => self.transfermarkt,
            DataSource::Asa => self.asa,
            DataSource::Sofascore => self.sofascore,
        }
    }

    /// Coverage flag for every provider, in display order.
    pub fn sources(&self) -> Vec<(DataSource, bool)> {
        DataSource::ALL
            .into_iter()
            .map(|source| (source, self.has_source(source)))
            .collect()
    }

    /// Providers that cover this player.
    pub fn covered_sources(&self) -> Vec<DataSource> {
        DataSource::ALL
            .into_iter()
            .filter(|source| self.has_source(*source))
            .collect()
    }
}

/// One row of the team catalog. Teams are not joined to player clubs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub league: League,
    pub avg_age: f64,
    pub market_value: u64,
    pub squad_size: u32,
}

/// External data providers whose coverage is recorded per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSource {
    FBref,
    Transfermarkt,
    #[serde(rename = "ASA")]
    Asa,
    Sofascore,
}

impl DataSource {
    pub const ALL: [DataSource; 4] = [
        DataSource::FBref,
        DataSource::Transfermarkt,
        DataSource::Asa,
        DataSource::Sofascore,
    ];
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataSource::FBref => "FBref",
            DataSource::Transfermarkt => "Transfermarkt",
            DataSource::Asa => "ASA",
            DataSource::Sofascore => "Sofascore",
        };
        write!(f, "{}", s)
    }
}
