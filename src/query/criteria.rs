//! Player query criteria.
//!
//! A [`PlayerCriteria`] is a plain value: the caller owns it, changes it and
//! hands it to [`query_players`](super::query_players) for every recomputation.

use crate::{
    catalog::PlayerRecord,
    cli::types::{LeagueFilter, PositionFilter, SortField, SortOrder},
    error::{Result, ScoutError},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Default age bounds offered by the dashboard.
pub const DEFAULT_MIN_AGE: u8 = 16;
pub const DEFAULT_MAX_AGE: u8 = 40;

/// Default market value bounds offered by the dashboard.
pub const DEFAULT_MIN_VALUE: u64 = 0;
pub const DEFAULT_MAX_VALUE: u64 = 30_000_000;

/// A closed interval `[min, max]`. Construction rejects `min > max`,
/// including when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + Copy + Display")
)]
pub struct InclusiveRange<T> {
    min: T,
    max: T,
}

#[derive(Deserialize)]
struct RawRange<T> {
    min: T,
    max: T,
}

impl<T> TryFrom<RawRange<T>> for InclusiveRange<T>
where
    T: PartialOrd + Copy + Display,
{
    type Error = ScoutError;

    fn try_from(raw: RawRange<T>) -> Result<Self> {
        Self::new("range", raw.min, raw.max)
    }
}

impl<T> InclusiveRange<T>
where
    T: PartialOrd + Copy + Display,
{
    /// Build a range, naming it in the error if the bounds are reversed.
    pub fn new(name: &str, min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(ScoutError::InvalidRange {
                name: name.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Filter and sort parameters for a player query.
///
/// All filters compose by logical AND. `search` matches the player name or
/// club, case-insensitively; `None` and the empty string both disable it.
///
/// # Examples
///
/// ```rust
/// use soccer_scout::query::PlayerCriteria;
/// use soccer_scout::{League, LeagueFilter, SortField};
///
/// let criteria = PlayerCriteria::default()
///     .league(LeagueFilter::Only(League::Mls))
///     .sort_by(SortField::Goals)
///     .search("crew");
/// assert_eq!(criteria.sort_field, SortField::Goals);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCriteria {
    pub league: LeagueFilter,
    pub position: PositionFilter,
    pub age_range: InclusiveRange<u8>,
    pub value_range: InclusiveRange<u64>,
    pub search: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for PlayerCriteria {
    fn default() -> Self {
        Self {
            league: LeagueFilter::All,
            position: PositionFilter::All,
            age_range: InclusiveRange {
                min: DEFAULT_MIN_AGE,
                max: DEFAULT_MAX_AGE,
            },
            value_range: InclusiveRange {
                min: DEFAULT_MIN_VALUE,
                max: DEFAULT_MAX_VALUE,
            },
            search: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PlayerCriteria {
    pub fn league(mut self, league: LeagueFilter) -> Self {
        self.league = league;
        self
    }

    pub fn position(mut self, position: PositionFilter) -> Self {
        self.position = position;
        self
    }

    pub fn age_range(mut self, min: u8, max: u8) -> Result<Self> {
        self.age_range = InclusiveRange::new("age", min, max)?;
        Ok(self)
    }

    pub fn value_range(mut self, min: u64, max: u64) -> Result<Self> {
        self.value_range = InclusiveRange::new("market value", min, max)?;
        Ok(self)
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_field = field;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Whether a player passes every active filter.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        self.league.matches(player.league)
            && self.position.matches(player.position)
            && self.age_range.contains(player.age)
            && self.value_range.contains(player.market_value)
            && self
                .search
                .as_deref()
                .map_or(true, |needle| player.matches_search(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_player;
    use crate::cli::types::{League, PlayerId, Position};

    fn player(id: u32) -> &'static PlayerRecord {
        find_player(PlayerId::new(id)).unwrap()
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        match InclusiveRange::new("age", 30u8, 20u8) {
            Err(ScoutError::InvalidRange { name, min, max }) => {
                assert_eq!(name, "age");
                assert_eq!(min, "30");
                assert_eq!(max, "20");
            }
            _ => panic!("Expected InvalidRange error"),
        }
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = InclusiveRange::new("value", 800_000u64, 1_000_000u64).unwrap();
        assert!(range.contains(800_000));
        assert!(range.contains(1_000_000));
        assert!(!range.contains(1_000_001));
        assert!(!range.contains(799_999));
    }

    #[test]
    fn test_single_point_range() {
        let range = InclusiveRange::new("age", 31u8, 31u8).unwrap();
        assert!(range.contains(31));
        assert!(!range.contains(30));
    }

    #[test]
    fn test_default_criteria_match_whole_catalog() {
        let criteria = PlayerCriteria::default();
        assert!(crate::catalog::all_players()
            .iter()
            .all(|p| criteria.matches(p)));
    }

    #[test]
    fn test_empty_search_is_disabled() {
        let criteria = PlayerCriteria::default().search("");
        assert_eq!(criteria.search, None);
    }

    #[test]
    fn test_search_checks_name_or_club() {
        let criteria = PlayerCriteria::default().search("PEPI");
        assert!(criteria.matches(player(3)));

        let criteria = PlayerCriteria::default().search("rapids");
        assert!(criteria.matches(player(7)));
        assert!(!criteria.matches(player(3)));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let criteria = PlayerCriteria::default()
            .league(LeagueFilter::Only(League::UslChampionship))
            .position(PositionFilter::Only(Position::ST));
        // Hadji Barry is a USL Championship striker
        assert!(criteria.matches(player(8)));
        // Ricardo Pepi is a striker in MLS
        assert!(!criteria.matches(player(3)));
        // Milan Iloski is in the league but plays CAM
        assert!(!criteria.matches(player(9)));
    }

    #[test]
    fn test_builder_range_errors_propagate() {
        assert!(PlayerCriteria::default().age_range(40, 16).is_err());
        assert!(PlayerCriteria::default().value_range(10, 0).is_err());
        let criteria = PlayerCriteria::default().value_range(0, 1_000_000).unwrap();
        assert_eq!(criteria.value_range.max(), 1_000_000);
    }

    #[test]
    fn test_deserialized_range_is_validated() {
        let range: InclusiveRange<u8> = serde_json::from_str(r#"{"min":20,"max":30}"#).unwrap();
        assert_eq!((range.min(), range.max()), (20, 30));

        let reversed = serde_json::from_str::<InclusiveRange<u8>>(r#"{"min":30,"max":20}"#);
        let err = reversed.unwrap_err().to_string();
        assert!(err.contains("Invalid range range: 30 to 20"), "{}", err);
    }

    #[test]
    fn test_criteria_json_roundtrip_keeps_filters_readable() {
        let criteria = PlayerCriteria::default()
            .league(LeagueFilter::Only(League::Mls))
            .age_range(20, 25)
            .unwrap();
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["league"], "MLS");
        assert_eq!(json["position"], "All Positions");

        let back: PlayerCriteria = serde_json::from_value(json).unwrap();
        assert_eq!(back, criteria);
    }
}
