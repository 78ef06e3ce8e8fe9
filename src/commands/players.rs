//! Filtered player listing.

use serde::Serialize;
use std::io::Write;

use super::common::{write_cohort_summary, write_player_line};
use crate::{
    catalog::{all_players, PlayerRecord},
    query::{
        query_players, source_coverage, summarize_cohort, CohortSummary, PlayerCriteria,
        SourceCoverage,
    },
    watchlist::WatchlistStore,
    Result,
};

/// JSON shape of the player listing
#[derive(Debug, Serialize)]
pub struct PlayersReport<'a> {
    pub criteria: &'a PlayerCriteria,
    pub summary: CohortSummary,
    pub coverage: Vec<SourceCoverage>,
    pub players: Vec<&'a PlayerRecord>,
}

/// Run one player query against the catalog and print the result.
///
/// `watchlist` only affects the text output, where tracked players are
/// starred.
pub fn handle_players(
    criteria: &PlayerCriteria,
    watchlist: &WatchlistStore,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let players = query_players(all_players(), criteria);
    let summary = summarize_cohort(&players);

    if as_json {
        let report = PlayersReport {
            criteria,
            summary,
            coverage: source_coverage(&players),
            players,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    write_cohort_summary(out, &summary)?;
    if players.is_empty() {
        writeln!(out, "No players match the current filters.")?;
        return Ok(());
    }

    writeln!(out)?;
    for player in &players {
        write_player_line(out, player, watchlist)?;
    }

    let coverage: Vec<String> = source_coverage(&players)
        .iter()
        .map(|c| format!("{} {}/{}", c.source, c.covered, c.total))
        .collect();
    writeln!(out)?;
    writeln!(out, "Data sources: {}", coverage.join("  "))?;
    Ok(())
}
