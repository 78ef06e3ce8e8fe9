//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueFilter, PlayerId, PositionFilter, SortField, SortOrder};

use crate::{
    error::Result,
    query::criteria::{
        PlayerCriteria, DEFAULT_MAX_AGE, DEFAULT_MAX_VALUE, DEFAULT_MIN_AGE, DEFAULT_MIN_VALUE,
    },
};

/// Player filter and sort arguments shared between commands
#[derive(Debug, Clone, Args)]
pub struct CriteriaArgs {
    /// League: "All Leagues", MLS, "USL Championship" or "USL League One".
    #[clap(long, short, default_value_t = LeagueFilter::All)]
    pub league: LeagueFilter,

    /// Position: "All Positions" or one of GK CB LB RB CDM CM CAM LW RW ST FW.
    #[clap(long, short, default_value_t = PositionFilter::All)]
    pub position: PositionFilter,

    /// Youngest age to include (inclusive).
    #[clap(long, default_value_t = DEFAULT_MIN_AGE)]
    pub min_age: u8,

    /// Oldest age to include (inclusive).
    #[clap(long, default_value_t = DEFAULT_MAX_AGE)]
    pub max_age: u8,

    /// Lowest market value to include (inclusive).
    #[clap(long, default_value_t = DEFAULT_MIN_VALUE)]
    pub min_value: u64,

    /// Highest market value to include (inclusive).
    #[clap(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: u64,

    /// Case-insensitive substring of the player name or club.
    #[clap(long, short = 'q')]
    pub search: Option<String>,

    /// Sort by: rating | age | market_value | goals | assists
    #[clap(long, short, default_value_t = SortField::Rating)]
    pub sort: SortField,

    /// Sort ascending instead of descending.
    #[clap(long)]
    pub ascending: bool,
}

impl CriteriaArgs {
    /// Validate the arguments into query criteria.
    pub fn to_criteria(&self) -> Result<PlayerCriteria> {
        Ok(PlayerCriteria::default()
            .league(self.league)
            .position(self.position)
            .age_range(self.min_age, self.max_age)?
            .value_range(self.min_value, self.max_value)?
            .search(self.search.clone().unwrap_or_default())
            .sort_by(self.sort)
            .order(SortOrder::from_ascending(self.ascending)))
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "soccer-scout",
    about = "Browse, filter and track soccer players from MLS and the USL"
)]
pub struct Scout {
    /// Emit debug logs to stderr (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List players matching the filters, with summary metrics.
    Players {
        #[clap(flatten)]
        criteria: CriteriaArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams, optionally restricted to one league.
    Teams {
        /// League: "All Leagues", MLS, "USL Championship" or "USL League One".
        #[clap(long, short, default_value_t = LeagueFilter::All)]
        league: LeagueFilter,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's details and stat profile.
    ///
    /// The profile is scaled against the players matching the filters, so
    /// the player must pass them.
    Player {
        /// Player ID.
        id: PlayerId,

        #[clap(flatten)]
        criteria: CriteriaArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Build a watchlist for this run, show it, and optionally export it.
    ///
    /// Watchlists are not persisted; use `shell` to keep one across commands.
    Watchlist {
        /// Player ID to track (repeatable): `-a 2 -a 8`.
        #[clap(long = "add", short = 'a')]
        add: Vec<PlayerId>,

        /// Write the watchlist to a dated CSV file.
        #[clap(long)]
        export: bool,

        /// Export directory (or set `SOCCER_SCOUT_EXPORT_DIR`).
        #[clap(long)]
        dir: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Refresh data from external providers.
    Sync,

    /// Start an interactive session with its own watchlist.
    Shell,
}
