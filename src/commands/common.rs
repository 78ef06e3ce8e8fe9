//! Common utilities and helper functions shared across commands.

use chrono::{Local, NaiveDate};
use std::{io::Write, path::PathBuf};

use crate::{
    catalog::PlayerRecord,
    format::{format_mean, format_value},
    query::CohortSummary,
    watchlist::WatchlistStore,
    Result, EXPORT_DIR_ENV_VAR,
};

/// Resolve where exports are written.
///
/// Precedence: explicit directory, then `SOCCER_SCOUT_EXPORT_DIR`, then the
/// user's download directory, then the current directory.
pub fn resolve_export_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(|| {
        std::env::var(EXPORT_DIR_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .or_else(dirs::download_dir)
    .unwrap_or_else(|| PathBuf::from("."))
}

/// Today's date in local time, used to stamp export files.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// One summary line per player, with a star for watchlisted players.
pub fn write_player_line(
    out: &mut impl Write,
    player: &PlayerRecord,
    watchlist: &WatchlistStore,
) -> Result<()> {
    let star = if watchlist.contains(player.id) { "*" } else { " " };
    writeln!(
        out,
        "{} [{:>2}] {:<18} {:<4} {:<24} {:<17} rating {:.1}  {:>7}  G {:>2} A {:>2}",
        star,
        player.id,
        player.name,
        player.position,
        player.club,
        player.league,
        player.rating,
        format_value(player.market_value),
        player.goals,
        player.assists,
    )?;
    Ok(())
}

pub fn write_cohort_summary(out: &mut impl Write, summary: &CohortSummary) -> Result<()> {
    writeln!(
        out,
        "Total Players: {}  Avg Age: {}  Avg Rating: {}  Total Goals: {}",
        summary.count,
        format_mean(summary.mean_age),
        format_mean(summary.mean_rating),
        summary.total_goals
    )?;
    Ok(())
}
