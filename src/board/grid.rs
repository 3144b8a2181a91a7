//! The rectangular board.
//!
//! Areas are stored row-major. Thief ownership is a `PlayerId` on the area,
//! resolved against the match's player table.

use serde::{Deserialize, Serialize};

use super::area::{Area, AreaId, Direction};
use crate::cards::{new_deck, Card, CardType};
use crate::core::config::COLUMNS;
use crate::core::error::InvariantViolation;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Grid of areas plus the cards left over when it was dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u8,
    columns: u8,
    areas: Vec<Area>,
    /// Deck cards that did not fit on the grid. They never return to play.
    reserve: Vec<Card>,
}

impl Board {
    /// Deal a fresh deck onto a `rows` x 8 grid, row-major.
    ///
    /// Board cards are face up; the rest of the deck becomes the reserve.
    #[must_use]
    pub fn new(rows: u8, rng: &mut GameRng) -> Self {
        let mut deck = new_deck(rng);
        let mut areas = Vec::with_capacity(usize::from(rows) * usize::from(COLUMNS));

        for row in 0..rows {
            for column in 0..COLUMNS {
                let card = deck.pop().map(|c| Card::face_up(c.card_type));
                areas.push(Area::new(AreaId::new(row, column), card));
            }
        }

        Self {
            rows,
            columns: COLUMNS,
            areas,
            reserve: deck,
        }
    }

    /// Build a board from an explicit layout.
    ///
    /// `layout(id)` gives the card type of each area; `None` leaves it empty.
    /// The reserve is empty.
    #[must_use]
    pub fn from_layout(
        rows: u8,
        columns: u8,
        layout: impl Fn(AreaId) -> Option<CardType>,
    ) -> Self {
        let areas = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| AreaId::new(row, column)))
            .map(|id| Area::new(id, layout(id).map(Card::face_up)))
            .collect();

        Self {
            rows,
            columns,
            areas,
            reserve: Vec::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    #[must_use]
    pub fn contains(&self, id: AreaId) -> bool {
        id.row < self.rows && id.column < self.columns
    }

    fn offset(&self, id: AreaId) -> Option<usize> {
        self.contains(id)
            .then(|| usize::from(id.row) * usize::from(self.columns) + usize::from(id.column))
    }

    #[must_use]
    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.offset(id).and_then(|i| self.areas.get(i))
    }

    pub fn get_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.offset(id).and_then(|i| self.areas.get_mut(i))
    }

    /// Area lookup for ids the engine already holds.
    pub fn area(&self, id: AreaId) -> Result<&Area, InvariantViolation> {
        self.get(id).ok_or(InvariantViolation::MissingArea(id))
    }

    pub fn area_mut(&mut self, id: AreaId) -> Result<&mut Area, InvariantViolation> {
        self.get_mut(id).ok_or(InvariantViolation::MissingArea(id))
    }

    /// All areas, row-major.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    /// The area exists, holds a card and holds no thief.
    #[must_use]
    pub fn can_occupy(&self, id: AreaId) -> bool {
        self.get(id).is_some_and(Area::can_occupy)
    }

    /// Neighbour of `id`, or `None` past the edge.
    #[must_use]
    pub fn step(&self, id: AreaId, direction: Direction) -> Option<AreaId> {
        let (dr, dc) = direction.delta();
        let row = id.row.checked_add_signed(dr)?;
        let column = id.column.checked_add_signed(dc)?;
        let next = AreaId::new(row, column);
        self.contains(next).then_some(next)
    }

    /// Thief on `id`, if any.
    #[must_use]
    pub fn thief_at(&self, id: AreaId) -> Option<PlayerId> {
        self.get(id).and_then(|a| a.thief)
    }

    /// Card value of `id`, 0 for a missing area or card.
    #[must_use]
    pub fn value_at(&self, id: AreaId) -> i32 {
        self.get(id)
            .and_then(|a| a.card)
            .map_or(0, |c| c.value())
    }

    /// Areas holding a thief of `player`, row-major.
    #[must_use]
    pub fn thieves_of(&self, player: PlayerId) -> Vec<AreaId> {
        self.areas
            .iter()
            .filter(|a| a.thief == Some(player))
            .map(|a| a.id)
            .collect()
    }

    /// Remove the card of `id` along with any thief standing on it.
    pub fn claim(&mut self, id: AreaId) -> Result<(Card, Option<PlayerId>), InvariantViolation> {
        let area = self.area_mut(id)?;
        let card = area.card.take().ok_or(InvariantViolation::MissingCard(id))?;
        Ok((card, area.thief.take()))
    }

    /// Cards on the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.areas.iter().filter(|a| a.card.is_some()).count()
    }

    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }
}
