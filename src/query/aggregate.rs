//! Summary metrics over a player cohort, the watchlist, and teams in view.
//!
//! Means over an empty set are `None` rather than NaN; callers render them
//! as "no data".

use serde::Serialize;

use crate::catalog::{DataSource, PlayerRecord, TeamRecord};

/// Headline numbers for the filtered player view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub count: usize,
    pub mean_age: Option<f64>,
    pub mean_rating: Option<f64>,
    pub total_goals: u32,
}

/// Headline numbers for a non-empty watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistSummary {
    pub count: usize,
    pub total_value: u64,
    pub mean_rating: f64,
    pub total_goals: u32,
    pub total_assists: u32,
}

/// How many players in a set each data provider covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCoverage {
    pub source: DataSource,
    pub covered: usize,
    pub total: usize,
}

/// A team's market value relative to the most valuable team in view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamValueShare<'a> {
    pub team: &'a TeamRecord,
    /// 0-100; 100 for the most valuable team
    pub share: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

pub fn summarize_cohort(players: &[&PlayerRecord]) -> CohortSummary {
    CohortSummary {
        count: players.len(),
        mean_age: mean(players.iter().map(|p| f64::from(p.age))),
        mean_rating: mean(players.iter().map(|p| p.rating)),
        total_goals: players.iter().map(|p| p.goals).sum(),
    }
}

/// Summary of the watchlisted players, or `None` when there are none.
pub fn summarize_watchlist(players: &[&PlayerRecord]) -> Option<WatchlistSummary> {
    let mean_rating = mean(players.iter().map(|p| p.rating))?;
    Some(WatchlistSummary {
        count: players.len(),
        total_value: players.iter().map(|p| p.market_value).sum(),
        mean_rating,
        total_goals: players.iter().map(|p| p.goals).sum(),
        total_assists: players.iter().map(|p| p.assists).sum(),
    })
}

pub fn source_coverage(players: &[&PlayerRecord]) -> Vec<SourceCoverage> {
    DataSource::ALL
        .into_iter()
        .map(|source| SourceCoverage {
            source,
            covered: players.iter().filter(|p| p.has_source(source)).count(),
            total: players.len(),
        })
        .collect()
}

/// Market value of each team as a share of the largest value in the set.
///
/// If every team is valued at zero, every share is zero.
pub fn team_value_shares<'a>(teams: &[&'a TeamRecord]) -> Vec<TeamValueShare<'a>> {
    let max = teams.iter().map(|t| t.market_value).max().unwrap_or(0);
    teams
        .iter()
        .map(|&team| TeamValueShare {
            team,
            share: if max == 0 {
                0.0
            } else {
                team.market_value as f64 / max as f64 * 100.0
            },
        })
        .collect()
}
