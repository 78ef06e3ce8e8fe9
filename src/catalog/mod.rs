//! Read-only reference data for the scouting dashboard
//!
//! - `models`: record types shared by every other module
//! - `players`: the player catalog
//! - `teams`: the team catalog

pub mod models;
pub mod players;
pub mod teams;

pub use models::*;
pub use players::{all_players, find_player};
pub use teams::all_teams;
