//! Sort field and direction for player queries.

use crate::{catalog::PlayerRecord, error::ScoutError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Player column a query result can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Rating,
    Age,
    MarketValue,
    Goals,
    Assists,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Rating,
        SortField::Age,
        SortField::MarketValue,
        SortField::Goals,
        SortField::Assists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Rating => "rating",
            SortField::Age => "age",
            SortField::MarketValue => "market_value",
            SortField::Goals => "goals",
            SortField::Assists => "assists",
        }
    }

    /// Ascending comparison of two players on this field.
    ///
    /// Ratings use `f64::total_cmp`, so the ordering is total even for
    /// values that are not finite.
    pub fn compare(&self, a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
        match self {
            SortField::Rating => a.rating.total_cmp(&b.rating),
            SortField::Age => a.age.cmp(&b.age),
            SortField::MarketValue => a.market_value.cmp(&b.market_value),
            SortField::Goals => a.goals.cmp(&b.goals),
            SortField::Assists => a.assists.cmp(&b.assists),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| ScoutError::InvalidSortField {
                field: s.to_string(),
            })
    }
}

/// Direction of a sort. Descending is the default, matching the highest
/// rated players being listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// Orient an ascending comparison. Equal stays equal in both directions,
    /// which keeps a stable sort stable when descending.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "Ascending"),
            SortOrder::Descending => write!(f, "Descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("rating".parse::<SortField>().unwrap(), SortField::Rating);
        assert_eq!(
            "market_value".parse::<SortField>().unwrap(),
            SortField::MarketValue
        );
        assert_eq!(
            "Market-Value".parse::<SortField>().unwrap(),
            SortField::MarketValue
        );
        assert_eq!("GOALS".parse::<SortField>().unwrap(), SortField::Goals);
    }

    #[test]
    fn test_sort_field_rejects_unknown() {
        match "minutes_played".parse::<SortField>() {
            Err(ScoutError::InvalidSortField { field }) => assert_eq!(field, "minutes_played"),
            _ => panic!("Expected InvalidSortField error"),
        }
    }

    #[test]
    fn test_sort_field_default_is_rating() {
        assert_eq!(SortField::default(), SortField::Rating);
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(
            SortOrder::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortOrder::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_order_from_ascending() {
        assert_eq!(SortOrder::from_ascending(true), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }
}
