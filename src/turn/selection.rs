//! Transient state of the running action cycle.

use serde::{Deserialize, Serialize};

use crate::board::{AreaId, Board};
use crate::core::player::PlayerId;
use crate::movement::{legal_destinations, CacheKey, DestinationCache, Destinations, PlayedCard};

/// What the current player has chosen so far this cycle.
///
/// Cleared at the start of every cycle. The destination cache is not
/// serialized; it is rebuilt on demand after a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub played: Option<PlayedCard>,
    /// Area of the thief being moved.
    pub thief_area: Option<AreaId>,
    /// Turban progress: 0 before the first move, 1 before the second.
    pub step: u8,
    #[serde(skip)]
    cache: DestinationCache,
}

impl Selection {
    /// Reset for a new cycle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn play(&mut self, played: PlayedCard) {
        self.played = Some(played);
        self.cache.invalidate();
    }

    pub fn select_thief(&mut self, area: AreaId) {
        self.thief_area = Some(area);
        self.cache.invalidate();
    }

    /// Record a finished turban move: the thief continues from `area`.
    pub fn continue_from(&mut self, area: AreaId) {
        self.thief_area = Some(area);
        self.cache.invalidate();
    }

    /// Key of the current destination set, once a card and a thief are chosen.
    #[must_use]
    pub fn cache_key(&self) -> Option<CacheKey> {
        Some(CacheKey {
            from: self.thief_area?,
            rule: self.played?.rule()?,
            step: self.step,
        })
    }

    /// Destination set for `key`, filling the cache on a miss.
    pub fn destinations(&mut self, board: &Board, mover: PlayerId, key: CacheKey) -> &Destinations {
        self.cache.get_or_compute(board, mover, key)
    }

    /// Destination set for `key` without touching the cache.
    #[must_use]
    pub fn peek_destinations(&self, board: &Board, mover: PlayerId, key: CacheKey) -> Destinations {
        self.cache
            .peek(&key)
            .cloned()
            .unwrap_or_else(|| legal_destinations(board, mover, key.from, key.rule, key.step))
    }

    /// Whether a destination set is memoised.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }
}
