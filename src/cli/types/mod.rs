//! Type-safe wrappers and enums for scouting data.

pub mod ids;
pub mod league;
pub mod position;
pub mod sort;

pub use ids::{PlayerId, TeamId};
pub use league::{League, LeagueFilter};
pub use position::{Position, PositionFilter};
pub use sort::{SortField, SortOrder};
