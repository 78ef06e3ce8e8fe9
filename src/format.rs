//! Display helpers: currency amounts and rating bands.

use serde::Serialize;
use std::fmt;

/// Compact dollar amount: `$8.5M`, `$450K`, `$900`.
pub fn format_value(value: u64) -> String {
    if value >= 1_000_000 {
        format!("${:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("${:.0}K", value as f64 / 1_000.0)
    } else {
        format!("${}", value)
    }
}

/// Render an optional mean, with "no data" for an empty set.
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(m) => format!("{:.1}", m),
        None => "no data".to_string(),
    }
}

/// Coarse rating tiers used to colour or label a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingBand {
    Elite,
    Good,
    Average,
    Poor,
}

impl RatingBand {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 8.0 {
            RatingBand::Elite
        } else if rating >= 7.0 {
            RatingBand::Good
        } else if rating >= 6.0 {
            RatingBand::Average
        } else {
            RatingBand::Poor
        }
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingBand::Elite => write!(f, "elite"),
            RatingBand::Good => write!(f, "good"),
            RatingBand::Average => write!(f, "average"),
            RatingBand::Poor => write!(f, "poor"),
        }
    }
}
