//! Integration tests for command handlers

use clap::Parser;
use soccer_scout::{
    cli::Scout,
    commands::{common::resolve_export_dir, shell::run_shell, teams::handle_teams},
    LeagueFilter, EXPORT_DIR_ENV_VAR,
};
use std::path::PathBuf;

fn shell(script: &str, export_dir: PathBuf) -> String {
    let mut out = Vec::new();
    run_shell(script.as_bytes(), &mut out, export_dir).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_resolve_export_dir_precedence() {
    std::env::set_var(EXPORT_DIR_ENV_VAR, "/tmp/scouting");
    assert_eq!(
        resolve_export_dir(Some(PathBuf::from("/explicit"))),
        PathBuf::from("/explicit")
    );
    assert_eq!(resolve_export_dir(None), PathBuf::from("/tmp/scouting"));

    std::env::remove_var(EXPORT_DIR_ENV_VAR);
    assert_ne!(resolve_export_dir(None), PathBuf::from("/tmp/scouting"));
}

#[test]
fn test_shell_session_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let script = "\
filter --league \"USL Championship\" --sort goals
add 8
add 9
toggle 9
add 10
watchlist
export
quit
";
    let output = shell(script, tmp.path().to_path_buf());

    assert!(output.contains("Total Players: 4"));
    assert!(output.contains("Added Hadji Barry to watchlist"));
    assert!(output.contains("Removed Milan Iloski from watchlist"));
    assert!(output.contains("Tracking 2 Players"));
    assert!(output.contains("Exported 2 players to"));

    let files: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let contents = std::fs::read_to_string(&files[0]).unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains("Hadji Barry"));
    assert!(contents.contains("Arturo Rodriguez"));
}

#[test]
fn test_sessions_do_not_share_watchlists() {
    let first = shell("add 1\nwatchlist\n", PathBuf::from("."));
    assert!(first.contains("Tracking 1 Players"));

    let second = shell("watchlist\n", PathBuf::from("."));
    assert!(second.contains("Your watchlist is empty."));
}

#[test]
fn test_shell_reports_bad_input_and_continues() {
    let output = shell(
        "filter --sort height\nshow 3\nfilter --position GK\nshow 3\n",
        PathBuf::from("."),
    );
    assert!(output.contains("height"));
    // The first `show` runs against the unchanged default filters
    assert!(output.contains("Ricardo Pepi - ST"));
    assert!(output.contains("No players match the current filters."));
    assert!(output.contains("Error: Player 3 is not in the current filtered view"));
}

#[test]
fn test_teams_text_has_comparison_bars() {
    let mut out = Vec::new();
    handle_teams(LeagueFilter::All, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Market value comparison"));
    // Inter Miami has the largest squad value and gets the full bar
    assert!(text.contains(&"#".repeat(30)));
}

#[test]
fn test_cli_rejects_unknown_league() {
    let result = Scout::try_parse_from(["soccer-scout", "players", "--league", "EPL"]);
    assert!(result.is_err());
}
