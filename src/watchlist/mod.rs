//! Session-scoped watchlist
//!
//! A [`WatchlistStore`] belongs to exactly one session. It is never shared,
//! never persisted, and starts empty. The catalogs it selects from are
//! read-only and may be shared freely between sessions.

pub mod export;

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::{
    catalog::{find_player, PlayerRecord},
    cli::types::PlayerId,
    error::Result,
};

pub use export::{export_csv, export_file_name, write_export};

/// A set of tracked player identifiers.
///
/// `add` and `remove` are idempotent and never fail, whether or not the id is
/// present. Only catalog ids are ever tracked, so `members()` is exactly the
/// set of exported players. Ids are kept in ascending order, which is also
/// catalog order.
///
/// # Examples
///
/// ```rust
/// use soccer_scout::{PlayerId, watchlist::WatchlistStore};
///
/// let mut watchlist = WatchlistStore::new();
/// watchlist.add(PlayerId::new(8));
/// watchlist.add(PlayerId::new(8));
/// assert_eq!(watchlist.len(), 1);
///
/// watchlist.remove(PlayerId::new(3));
/// assert!(watchlist.contains(PlayerId::new(8)));
///
/// // Not in the catalog
/// assert!(!watchlist.add(PlayerId::new(500)));
/// assert_eq!(watchlist.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistStore {
    members: BTreeSet<PlayerId>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `id`. Returns `true` if it was not already tracked.
    ///
    /// Ids not in the catalog leave the store unchanged and return `false`.
    pub fn add(&mut self, id: PlayerId) -> bool {
        if find_player(id).is_none() {
            debug!(%id, "watchlist add ignored; not in catalog");
            return false;
        }
        let inserted = self.members.insert(id);
        debug!(%id, inserted, "watchlist add");
        inserted
    }

    /// Stop tracking `id`. Returns `true` if it was tracked.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        let removed = self.members.remove(&id);
        debug!(%id, removed, "watchlist remove");
        removed
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is
    /// tracked afterwards; unknown ids are never tracked.
    pub fn toggle(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id)
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.members.contains(&id)
    }

    pub fn members(&self) -> &BTreeSet<PlayerId> {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The tracked players present in `records`, in `records` order.
    pub fn players<'a>(&self, records: &'a [PlayerRecord]) -> Vec<&'a PlayerRecord> {
        records.iter().filter(|p| self.contains(p.id)).collect()
    }

    /// CSV of the tracked players; header-only when nothing is tracked.
    pub fn export_csv(&self, records: &[PlayerRecord]) -> Result<Vec<u8>> {
        export_csv(&self.players(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_players;

    #[test]
    fn test_new_store_is_empty() {
        let store = WatchlistStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.players(all_players()).is_empty());
    }

    #[test]
    fn test_add_then_contains() {
        let mut store = WatchlistStore::new();
        assert!(store.add(PlayerId::new(3)));
        assert!(store.contains(PlayerId::new(3)));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = WatchlistStore::new();
        once.add(PlayerId::new(5));

        let mut twice = WatchlistStore::new();
        twice.add(PlayerId::new(5));
        assert!(!twice.add(PlayerId::new(5)));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_then_not_contains() {
        let mut store = WatchlistStore::new();
        store.add(PlayerId::new(5));
        assert!(store.remove(PlayerId::new(5)));
        assert!(!store.contains(PlayerId::new(5)));
    }

    #[test]
    fn test_remove_absent_leaves_store_unchanged() {
        let mut store = WatchlistStore::new();
        store.add(PlayerId::new(1));
        let before = store.clone();
        assert!(!store.remove(PlayerId::new(2)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle() {
        let mut store = WatchlistStore::new();
        assert!(store.toggle(PlayerId::new(9)));
        assert!(store.contains(PlayerId::new(9)));
        assert!(!store.toggle(PlayerId::new(9)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_players_follow_catalog_order() {
        let mut store = WatchlistStore::new();
        store.add(PlayerId::new(11));
        store.add(PlayerId::new(2));
        store.add(PlayerId::new(7));
        let ids: Vec<u32> = store
            .players(all_players())
            .iter()
            .map(|p| p.id.as_u32())
            .collect();
        assert_eq!(ids, vec![2, 7, 11]);
    }

    #[test]
    fn test_unknown_ids_are_not_tracked() {
        let mut store = WatchlistStore::new();
        assert!(!store.add(PlayerId::new(404)));
        assert!(store.add(PlayerId::new(1)));
        assert_eq!(store.len(), 1);
        assert!(!store.contains(PlayerId::new(404)));
        assert_eq!(store.players(all_players()).len(), store.len());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = WatchlistStore::new();
        assert!(!store.toggle(PlayerId::new(404)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_stores_are_independent() {
        let mut alice = WatchlistStore::new();
        let bob = WatchlistStore::new();
        alice.add(PlayerId::new(1));
        assert!(!bob.contains(PlayerId::new(1)));
    }
}
