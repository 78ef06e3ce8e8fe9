//! League-filtered view over the team catalog.

use tracing::debug;

use crate::{catalog::TeamRecord, cli::types::LeagueFilter};

/// Teams in `league`, in catalog order. Teams are never sorted or searched.
pub fn query_teams(records: &[TeamRecord], league: LeagueFilter) -> Vec<&TeamRecord> {
    let matched: Vec<&TeamRecord> = records.iter().filter(|t| league.matches(t.league)).collect();
    debug!(matched = matched.len(), league = %league, "team query");
    matched
}
