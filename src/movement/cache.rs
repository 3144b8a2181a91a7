//! Memoised destination sets.
//!
//! One entry, keyed by `(thief area, rule, step)`. Callers invalidate it
//! whenever the selected thief, the played card or the step changes, and at
//! the start of every action cycle. The board is not part of the key: it
//! only changes after a move, and every move is followed by one of those
//! invalidation points.

use super::rules::{legal_destinations, Destinations, MoveRule};
use crate::board::{AreaId, Board};
use crate::core::player::PlayerId;

/// Cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub from: AreaId,
    pub rule: MoveRule,
    pub step: u8,
}

/// Single-entry destination cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DestinationCache {
    entry: Option<(CacheKey, Destinations)>,
}

impl DestinationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached set for `key`, computing it on a miss.
    pub fn get_or_compute(&mut self, board: &Board, mover: PlayerId, key: CacheKey) -> &Destinations {
        if self.peek(&key).is_none() {
            self.entry = None;
        }
        &self
            .entry
            .get_or_insert_with(|| {
                (key, legal_destinations(board, mover, key.from, key.rule, key.step))
            })
            .1
    }

    /// Cached set for `key` without computing.
    #[must_use]
    pub fn peek(&self, key: &CacheKey) -> Option<&Destinations> {
        self.entry
            .as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, d)| d)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
