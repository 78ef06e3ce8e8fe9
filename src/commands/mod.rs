//! Command implementations for the soccer scout CLI

pub mod common;
pub mod player_detail;
pub mod players;
pub mod shell;
pub mod sync;
pub mod teams;
pub mod watchlist;
