//! Soccer Scout Library
//!
//! Browse, filter and compare a fixed catalog of MLS and USL players and
//! teams, track a per-session watchlist and export it as CSV.
//!
//! ## Features
//!
//! - **Player Queries**: Filter by league, position, age, market value and
//!   free-text search, then sort by any numeric attribute
//! - **Cohort Summaries**: Counts, mean age and rating, and data source coverage
//!   for the filtered view
//! - **Radar Profiles**: Six-axis stat profile scaled against the filtered view
//! - **Team Comparison**: Squad metrics and relative market value
//! - **Watchlist**: Track players for the session and export a dated CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use soccer_scout::{
//!     catalog::all_players,
//!     query::{query_players, PlayerCriteria},
//!     League, LeagueFilter, SortField,
//! };
//!
//! # fn example() -> soccer_scout::Result<()> {
//! let criteria = PlayerCriteria::default()
//!     .league(LeagueFilter::Only(League::Mls))
//!     .age_range(20, 30)?
//!     .sort_by(SortField::Goals);
//!
//! for player in query_players(all_players(), &criteria) {
//!     println!("{} ({} goals)", player.name, player.goals);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the directory watchlist exports are written to:
//! ```bash
//! export SOCCER_SCOUT_EXPORT_DIR=~/scouting
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
pub mod query;
pub mod watchlist;

// Re-export commonly used types
pub use cli::types::{
    League, LeagueFilter, PlayerId, Position, PositionFilter, SortField, SortOrder, TeamId,
};
pub use error::{Result, ScoutError};

pub const EXPORT_DIR_ENV_VAR: &str = "SOCCER_SCOUT_EXPORT_DIR";
