//! The team catalog: six fixed rows, built once per process.

use std::sync::OnceLock;

use tracing::debug;

use super::models::TeamRecord;
use crate::cli::types::{League, TeamId};

static TEAMS: OnceLock<Vec<TeamRecord>> = OnceLock::new();

/// Every team in catalog order.
pub fn all_teams() -> &'static [TeamRecord] {
    TEAMS.get_or_init(|| {
        let teams = build_teams();
        debug!(count = teams.len(), "materialized team catalog");
        teams
    })
}

fn team(
    id: u32,
    name: &str,
    league: League,
    avg_age: f64,
    market_value: u64,
    squad_size: u32,
) -> TeamRecord {
    TeamRecord {
        id: TeamId::new(id),
        name: name.to_string(),
        league,
        avg_age,
        market_value,
        squad_size,
    }
}

fn build_teams() -> Vec<TeamRecord> {
    vec![
        team(1, "LA Galaxy", League::Mls, 26.3, 45_200_000, 28),
        team(2, "Inter Miami CF", League::Mls, 27.1, 52_300_000, 30),
        team(3, "Phoenix Rising FC", League::UslChampionship, 24.8, 8_900_000, 26),
        team(4, "Louisville City FC", League::UslChampionship, 25.5, 7_200_000, 27),
        team(5, "Union Omaha", League::UslLeagueOne, 23.9, 3_100_000, 24),
        team(6, "Richmond Kickers", League::UslLeagueOne, 24.2, 2_800_000, 25),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_teams() {
        assert_eq!(all_teams().len(), 6);
    }

    #[test]
    fn test_two_teams_per_league() {
        for league in League::ALL {
            let count = all_teams().iter().filter(|t| t.league == league).count();
            assert_eq!(count, 2, "{}", league);
        }
    }

    #[test]
    fn test_team_fields() {
        let miami = &all_teams()[1];
        assert_eq!(miami.id, TeamId::new(2));
        assert_eq!(miami.name, "Inter Miami CF");
        assert_eq!(miami.market_value, 52_300_000);
        assert_eq!(miami.squad_size, 30);
    }
}
