//! Team listing with the market value comparison.

use serde::Serialize;
use std::io::Write;

use crate::{
    catalog::all_teams,
    cli::types::LeagueFilter,
    format::format_value,
    query::{query_teams, team_value_shares, TeamValueShare},
    Result,
};

const BAR_WIDTH: f64 = 30.0;

#[derive(Debug, Serialize)]
pub struct TeamsReport<'a> {
    pub league: LeagueFilter,
    pub teams: Vec<TeamValueShare<'a>>,
}

pub fn handle_teams(league: LeagueFilter, as_json: bool, out: &mut impl Write) -> Result<()> {
    let teams = query_teams(all_teams(), league);
    let shares = team_value_shares(&teams);

    if as_json {
        let report = TeamsReport {
            league,
            teams: shares,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if shares.is_empty() {
        writeln!(out, "No teams in {}.", league)?;
        return Ok(());
    }

    for TeamValueShare { team, .. } in &shares {
        writeln!(
            out,
            "{:<20} {:<17} squad {:>2}  avg age {:.1}  value {}",
            team.name,
            team.league,
            team.squad_size,
            team.avg_age,
            format_value(team.market_value)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Market value comparison")?;
    for TeamValueShare { team, share } in &shares {
        let bar = "#".repeat((share / 100.0 * BAR_WIDTH).round() as usize);
        writeln!(
            out,
            "{:<20} {:<30} {}",
            team.name,
            bar,
            format_value(team.market_value)
        )?;
    }
    Ok(())
}
