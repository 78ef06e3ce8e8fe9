//! Per-player stat profile scaled against the visible cohort.
//!
//! Counting stats are expressed as a percentage of the cohort maximum, so the
//! same player scores differently as filters change. Pass accuracy is already
//! a percentage and is used as-is.

use serde::Serialize;
use std::fmt;

use crate::{
    catalog::PlayerRecord,
    cli::types::PlayerId,
    error::{Result, ScoutError},
};

/// Axes of the radar chart, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RadarCategory {
    Goals,
    Assists,
    PassAccuracy,
    Dribbles,
    Tackles,
    Interceptions,
}

impl RadarCategory {
    pub const ALL: [RadarCategory; 6] = [
        RadarCategory::Goals,
        RadarCategory::Assists,
        RadarCategory::PassAccuracy,
        RadarCategory::Dribbles,
        RadarCategory::Tackles,
        RadarCategory::Interceptions,
    ];

    fn raw(&self, player: &PlayerRecord) -> f64 {
        match self {
            RadarCategory::Goals => f64::from(player.goals),
            RadarCategory::Assists => f64::from(player.assists),
            RadarCategory::PassAccuracy => f64::from(player.pass_accuracy),
            RadarCategory::Dribbles => player.dribbles,
            RadarCategory::Tackles => player.tackles,
            RadarCategory::Interceptions => player.interceptions,
        }
    }

    fn is_cohort_relative(&self) -> bool {
        !matches!(self, RadarCategory::PassAccuracy)
    }
}

impl fmt::Display for RadarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RadarCategory::Goals => "Goals",
            RadarCategory::Assists => "Assists",
            RadarCategory::PassAccuracy => "Pass Acc",
            RadarCategory::Dribbles => "Dribbles",
            RadarCategory::Tackles => "Tackles",
            RadarCategory::Interceptions => "Interceptions",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub category: RadarCategory,
    /// 0-100
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProfile {
    pub player_id: PlayerId,
    pub axes: Vec<RadarAxis>,
}

impl RadarProfile {
    pub fn value(&self, category: RadarCategory) -> Option<f64> {
        self.axes
            .iter()
            .find(|axis| axis.category == category)
            .map(|axis| axis.value)
    }
}

/// `value` as a percentage of `max`, clamped to 0-100. A zero maximum yields 0.
fn relative(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Scale `player`'s stats against the cohort it is displayed in.
///
/// # Errors
///
/// Returns [`ScoutError::PlayerNotInCohort`] if `player` is not a member of
/// `cohort`; the scale is only meaningful for players in view.
pub fn radar_profile(player: &PlayerRecord, cohort: &[&PlayerRecord]) -> Result<RadarProfile> {
    if !cohort.iter().any(|p| p.id == player.id) {
        return Err(ScoutError::PlayerNotInCohort { id: player.id });
    }

    let axes = RadarCategory::ALL
        .into_iter()
        .map(|category| {
            let raw = category.raw(player);
            let value = if category.is_cohort_relative() {
                let max = cohort
                    .iter()
                    .map(|p| category.raw(p))
                    .fold(0.0, f64::max);
                relative(raw, max)
            } else {
                raw.clamp(0.0, 100.0)
            };
            RadarAxis { category, value }
        })
        .collect();

    Ok(RadarProfile {
        player_id: player.id,
        axes,
    })
}
