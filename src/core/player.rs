//! Seats, per-seat storage and the player record.
//!
//! ## PlayerId
//!
//! A seat index (0-based). Thief ownership on the board is stored as a
//! `PlayerId`, which is looked up in the match's player table rather than
//! held as a reference.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Hand, draw pile, discard pile, score and the per-cycle flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::InvariantViolation;
use super::rng::GameRng;
use crate::cards::{start_hand, Card, Pile};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` seats.
    ///
    /// ```
    /// use guild_of_thieves::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use guild_of_thieves::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(2)] += 5;
/// assert_eq!(scores.get(PlayerId::new(2)), Some(&5));
/// assert_eq!(scores.get(PlayerId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a seat's data, or `None` for an id outside the table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable variant of [`PlayerMap::get`].
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Look up a seat, reporting an unknown id as a broken invariant.
    pub fn lookup(&self, player: PlayerId) -> Result<&T, InvariantViolation> {
        self.get(player).ok_or(InvariantViolation::MissingPlayer(player))
    }

    /// Mutable variant of [`PlayerMap::lookup`].
    pub fn lookup_mut(&mut self, player: PlayerId) -> Result<&mut T, InvariantViolation> {
        self.get_mut(player)
            .ok_or(InvariantViolation::MissingPlayer(player))
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Mutable variant of [`PlayerMap::values`].
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One participant of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Pile,
    pub draw_pile: Pile,
    pub discard_pile: Pile,
    pub score: i32,
    /// Set by a pass; a passed player takes no further cycles.
    pub passed: bool,
    /// Set once the current cycle's action is complete.
    pub performed_action: bool,
    pub thieves_placed: u8,
}

impl Player {
    /// A fresh player holding the starting hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: start_hand(),
            draw_pile: Pile::new(),
            discard_pile: Pile::new(),
            score: 0,
            passed: false,
            performed_action: false,
            thieves_placed: 0,
        }
    }

    /// Draw one card into the hand.
    ///
    /// An empty draw pile is replaced by the face-down discard pile first;
    /// the returned flag reports that shuffle.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<(Card, bool), InvariantViolation> {
        let mut shuffled = false;
        if self.draw_pile.is_empty() {
            shuffled = true;
            self.draw_pile = std::mem::take(&mut self.discard_pile);
            self.draw_pile.turn_face_down();
        }

        let card = self
            .draw_pile
            .draw(rng)
            .ok_or(InvariantViolation::EmptyPiles(self.id))?;
        self.hand.push(card);
        Ok((card, shuffled))
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push_front(card);
    }

    /// Cards held across hand, draw pile and discard pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len()
    }

    /// Lamp cards (both variants) in hand.
    #[must_use]
    pub fn lamp_count(&self) -> usize {
        self.hand.lamp_count()
    }

    /// Camel cards (both variants) in hand.
    #[must_use]
    pub fn camel_count(&self) -> usize {
        self.hand.camel_count()
    }

    /// Fold discard and draw piles into the hand, all face up.
    pub fn gather_cards(&mut self) {
        let discard = std::mem::take(&mut self.discard_pile);
        let draw = std::mem::take(&mut self.draw_pile);
        self.hand.extend(discard);
        self.hand.extend(draw);
        self.hand.turn_face_up();
    }

    pub(crate) fn begin_cycle(&mut self) {
        self.performed_action = false;
    }
}
