//! Error types for the soccer scouting library

use crate::cli::types::PlayerId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid league: {league}")]
    InvalidLeague { league: String },

    #[error("Invalid sort field: {field} (expected rating, age, market_value, goals or assists)")]
    InvalidSortField { field: String },

    #[error("Invalid {name} range: {min} to {max}")]
    InvalidRange {
        name: String,
        min: String,
        max: String,
    },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: PlayerId },

    #[error("Player {id} is not in the current filtered view")]
    PlayerNotInCohort { id: PlayerId },
}
