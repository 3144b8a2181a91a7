//! Grid coordinates, directions and the area record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cards::Card;
use crate::core::error::ValidationError;
use crate::core::player::PlayerId;

/// Position of an area. Rows are labelled `A..`, columns `1..`.
///
/// ```
/// use guild_of_thieves::board::AreaId;
///
/// let id: AreaId = "c4".parse().unwrap();
/// assert_eq!(id, AreaId::new(2, 3));
/// assert_eq!(id.to_string(), "C4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AreaId {
    pub row: u8,
    pub column: u8,
}

impl AreaId {
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Row label, `'A'` for row 0.
    #[must_use]
    pub fn row_label(self) -> char {
        char::from(b'A'.wrapping_add(self.row))
    }

    /// Column label, 1 for column 0.
    #[must_use]
    pub fn column_label(self) -> u16 {
        u16::from(self.column) + 1
    }

    /// Parse a label such as `"C4"`.
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        label.parse()
    }
}

impl std::fmt::Display for AreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_label(), self.column_label())
    }
}

impl FromStr for AreaId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedArea(s.to_string());

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let row_char = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
        if !row_char.is_ascii_uppercase() {
            return Err(malformed());
        }
        let row = row_char as u8 - b'A';

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let column: u8 = digits.parse().map_err(|_| malformed())?;
        if column == 0 {
            return Err(malformed());
        }

        Ok(Self::new(row, column - 1))
    }
}

/// Orthogonal direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `(row, column)` offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of a straight move from `from` to `to`, if they share a
    /// row or column and differ.
    #[must_use]
    pub fn between(from: AreaId, to: AreaId) -> Option<Self> {
        use std::cmp::Ordering::*;

        match (to.row.cmp(&from.row), to.column.cmp(&from.column)) {
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub card: Option<Card>,
    pub thief: Option<PlayerId>,
}

impl Area {
    #[must_use]
    pub fn new(id: AreaId, card: Option<Card>) -> Self {
        Self {
            id,
            card,
            thief: None,
        }
    }

    /// Has a card and no thief.
    #[must_use]
    pub fn can_occupy(&self) -> bool {
        self.card.is_some() && self.thief.is_none()
    }

    #[must_use]
    pub fn has_card(&self) -> bool {
        self.card.is_some()
    }
}
