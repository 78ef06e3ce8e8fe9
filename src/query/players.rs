//! Filtered, sorted views over the player catalog.

use tracing::debug;

use super::criteria::PlayerCriteria;
use crate::catalog::PlayerRecord;

/// Apply `criteria` to `records` and return the matching players in sort order.
///
/// The result borrows from `records`. Sorting is stable: players with equal
/// values on the sort field keep their relative order from `records`, in
/// both directions. An empty result is a valid answer.
///
/// # Examples
///
/// ```rust
/// use soccer_scout::catalog::all_players;
/// use soccer_scout::query::{query_players, PlayerCriteria};
///
/// let top = query_players(all_players(), &PlayerCriteria::default());
/// assert_eq!(top[0].name, "Tyler Adams");
/// ```
pub fn query_players<'a>(
    records: &'a [PlayerRecord],
    criteria: &PlayerCriteria,
) -> Vec<&'a PlayerRecord> {
    let mut matched: Vec<&PlayerRecord> = records.iter().filter(|p| criteria.matches(p)).collect();

    // `sort_by` is a stable merge sort
    matched.sort_by(|a, b| {
        criteria
            .sort_order
            .apply(criteria.sort_field.compare(a, b))
    });

    debug!(
        matched = matched.len(),
        total = records.len(),
        sort = %criteria.sort_field,
        order = %criteria.sort_order,
        "player query"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_players;
    use crate::cli::types::{League, LeagueFilter, PlayerId, SortField, SortOrder};

    fn ids(players: &[&PlayerRecord]) -> Vec<u32> {
        players.iter().map(|p| p.id.as_u32()).collect()
    }

    #[test]
    fn test_default_query_returns_all_by_rating_desc() {
        let result = query_players(all_players(), &PlayerCriteria::default());
        assert_eq!(result.len(), 12);
        assert_eq!(result[0].name, "Tyler Adams");
        assert!(result.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_mls_query() {
        let criteria = PlayerCriteria::default().league(LeagueFilter::Only(League::Mls));
        let result = query_players(all_players(), &criteria);
        let mut got = ids(&result);
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3, 4, 6, 7]);
        assert_eq!(result[0].id, PlayerId::new(2));
    }

    #[test]
    fn test_stable_ties_descending() {
        // Rigoni (4) and Barry (8) are both 31; catalog order must survive
        let criteria = PlayerCriteria::default().sort_by(SortField::Age);
        let result = query_players(all_players(), &criteria);
        assert_eq!(ids(&result[..2]), vec![4, 8]);
    }

    #[test]
    fn test_stable_ties_ascending() {
        // Assists of 3: Pepi (3) then Hurst (12)
        let criteria = PlayerCriteria::default()
            .sort_by(SortField::Assists)
            .order(SortOrder::Ascending);
        let result = query_players(all_players(), &criteria);
        assert_eq!(ids(&result[..2]), vec![3, 12]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let criteria = PlayerCriteria::default().search("zzz");
        assert!(query_players(all_players(), &criteria).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(query_players(&[], &PlayerCriteria::default()).is_empty());
    }
}
