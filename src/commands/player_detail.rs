//! Single-player detail view with the cohort-relative stat profile.

use serde::Serialize;
use std::io::Write;

use crate::{
    catalog::{all_players, find_player, PlayerRecord},
    cli::types::PlayerId,
    error::ScoutError,
    format::{format_value, RatingBand},
    query::{query_players, radar_profile, PlayerCriteria, RadarProfile},
    watchlist::WatchlistStore,
    Result,
};

#[derive(Debug, Serialize)]
pub struct PlayerDetail<'a> {
    pub player: &'a PlayerRecord,
    pub rating_band: RatingBand,
    pub watchlisted: bool,
    pub cohort_size: usize,
    pub profile: RadarProfile,
}

/// Build the detail view for `id`, scaled against the players matching
/// `criteria`.
///
/// # Errors
///
/// - [`ScoutError::PlayerNotFound`] if `id` is not in the catalog
/// - [`ScoutError::PlayerNotInCohort`] if the player is filtered out
pub fn player_detail(
    id: PlayerId,
    criteria: &PlayerCriteria,
    watchlist: &WatchlistStore,
) -> Result<PlayerDetail<'static>> {
    let player = find_player(id).ok_or(ScoutError::PlayerNotFound { id })?;
    let cohort = query_players(all_players(), criteria);
    let profile = radar_profile(player, &cohort)?;

    Ok(PlayerDetail {
        player,
        rating_band: RatingBand::from_rating(player.rating),
        watchlisted: watchlist.contains(id),
        cohort_size: cohort.len(),
        profile,
    })
}

pub fn handle_player_detail(
    id: PlayerId,
    criteria: &PlayerCriteria,
    watchlist: &WatchlistStore,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let detail = player_detail(id, criteria, watchlist)?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
        return Ok(());
    }

    let p = detail.player;
    writeln!(
        out,
        "{} - {} | {} | Rating: {:.1} ({})",
        p.name, p.position, p.club, p.rating, detail.rating_band
    )?;
    if detail.watchlisted {
        writeln!(out, "On your watchlist")?;
    }

    writeln!(out)?;
    writeln!(out, "Player Info")?;
    writeln!(out, "  Age: {}", p.age)?;
    writeln!(out, "  Nationality: {}", p.nationality)?;
    writeln!(out, "  Market Value: {}", format_value(p.market_value))?;
    writeln!(out, "  League: {}", p.league)?;

    writeln!(out)?;
    writeln!(out, "Performance Stats")?;
    writeln!(
        out,
        "  Goals: {:<4} Assists: {:<4} Matches: {:<4} Minutes: {}",
        p.goals, p.assists, p.matches, p.minutes_played
    )?;
    writeln!(
        out,
        "  Shots/Game: {}  Key Passes: {}  Pass Acc: {}%  Dribbles: {}",
        p.shots_per_game, p.key_passes, p.pass_accuracy, p.dribbles
    )?;
    writeln!(
        out,
        "  Aerial Duels: {}  Tackles: {}  Interceptions: {}  Clearances: {}",
        p.aerial_duels, p.tackles, p.interceptions, p.clearances
    )?;

    writeln!(out)?;
    writeln!(out, "Data Sources")?;
    for (source, available) in p.sources() {
        let mark = if available { "✓" } else { "✗" };
        writeln!(out, "  {} {}", mark, source)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Performance Breakdown (relative to {} players in view)",
        detail.cohort_size
    )?;
    for axis in &detail.profile.axes {
        writeln!(out, "  {:<14} {:>5.1}", axis.category.to_string(), axis.value)?;
    }
    Ok(())
}
