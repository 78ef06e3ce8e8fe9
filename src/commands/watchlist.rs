//! Watchlist display and export.

use chrono::NaiveDate;
use serde::Serialize;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    catalog::{all_players, find_player, PlayerRecord},
    cli::types::PlayerId,
    format::format_value,
    query::{summarize_watchlist, WatchlistSummary},
    watchlist::{write_export, WatchlistStore},
    Result,
};

#[derive(Debug, Serialize)]
pub struct WatchlistReport<'a> {
    pub summary: Option<WatchlistSummary>,
    pub players: Vec<&'a PlayerRecord>,
}

/// Add catalog players to `store`.
///
/// Ids that are not in the catalog leave the store unchanged and are
/// reported on `out`; they are not errors.
pub fn add_players(
    store: &mut WatchlistStore,
    ids: &[PlayerId],
    out: &mut impl Write,
) -> Result<()> {
    for &id in ids {
        match find_player(id) {
            Some(player) => {
                if store.add(id) {
                    writeln!(out, "Added {} to watchlist", player.name)?;
                } else {
                    writeln!(out, "{} is already on the watchlist", player.name)?;
                }
            }
            None => writeln!(out, "No player with ID {}; watchlist unchanged", id)?,
        }
    }
    Ok(())
}

pub fn handle_watchlist(store: &WatchlistStore, as_json: bool, out: &mut impl Write) -> Result<()> {
    let players = store.players(all_players());
    let summary = summarize_watchlist(&players);

    if as_json {
        let report = WatchlistReport { summary, players };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let Some(summary) = summary else {
        writeln!(
            out,
            "Your watchlist is empty. Add players to track them here."
        )?;
        return Ok(());
    };

    writeln!(out, "Tracking {} Players", summary.count)?;
    writeln!(
        out,
        "Total Value: {}  Avg Rating: {:.1}  Total Goals: {}  Total Assists: {}",
        format_value(summary.total_value),
        summary.mean_rating,
        summary.total_goals,
        summary.total_assists
    )?;
    writeln!(out)?;
    for p in &players {
        writeln!(
            out,
            "[{:>2}] {:<18} {:<4} {:<24} Rating: {:.1}  Value: {:>7}  G: {} | A: {}",
            p.id,
            p.name,
            p.position,
            p.club,
            p.rating,
            format_value(p.market_value),
            p.goals,
            p.assists
        )?;
    }
    Ok(())
}

/// Export `store` as CSV into `dir`, stamped with `date`.
///
/// An empty watchlist still produces a header-only file.
pub fn handle_export(
    store: &WatchlistStore,
    dir: &Path,
    date: NaiveDate,
    out: &mut impl Write,
) -> Result<PathBuf> {
    let bytes = store.export_csv(all_players())?;
    let path = write_export(dir, date, &bytes)?;
    writeln!(
        out,
        "Exported {} players to {}",
        store.players(all_players()).len(),
        path.display()
    )?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_players_reports_each_id() {
        let mut store = WatchlistStore::new();
        let output = text(|out| {
            add_players(
                &mut store,
                &[PlayerId::new(8), PlayerId::new(8), PlayerId::new(99)],
                out,
            )
        });
        assert_eq!(store.len(), 1);
        assert!(output.contains("Added Hadji Barry to watchlist"));
        assert!(output.contains("Hadji Barry is already on the watchlist"));
        assert!(output.contains("No player with ID 99; watchlist unchanged"));
    }

    #[test]
    fn test_empty_watchlist_message() {
        let store = WatchlistStore::new();
        let output = text(|out| handle_watchlist(&store, false, out));
        assert!(output.starts_with("Your watchlist is empty."));
    }

    #[test]
    fn test_empty_watchlist_json_has_null_summary() {
        let store = WatchlistStore::new();
        let output = text(|out| handle_watchlist(&store, true, out));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["summary"].is_null());
        assert_eq!(value["players"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_watchlist_summary_line() {
        let mut store = WatchlistStore::new();
        store.add(PlayerId::new(1));
        store.add(PlayerId::new(4));
        let output = text(|out| handle_watchlist(&store, false, out));
        assert!(output.starts_with("Tracking 2 Players"));
        assert!(output.contains("Total Value: $12.0M"));
        assert!(output.contains("Total Goals: 23"));
        assert!(output.contains("Total Assists: 19"));
    }

    #[test]
    fn test_export_writes_dated_file() {
        let tmp = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut store = WatchlistStore::new();
        store.add(PlayerId::new(6));

        let mut out = Vec::new();
        let path = handle_export(&store, tmp.path(), date, &mut out).unwrap();

        assert!(path.ends_with("soccer_scout_watchlist_20261016.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("Nick Lima"));
        assert!(String::from_utf8(out).unwrap().starts_with("Exported 1 players to"));
    }
}
