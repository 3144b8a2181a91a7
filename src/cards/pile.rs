//! Ordered card collections: hands, draw piles and discard piles.
//!
//! Order only matters for display. The front of a discard pile is its top.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardType};
use crate::core::error::ValidationError;
use crate::core::rng::GameRng;

/// An ordered collection of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Append a card at the back.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Insert a card at the front.
    pub fn push_front(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Append every card of `other`, keeping its order.
    pub fn extend(&mut self, other: Pile) {
        self.cards.extend(other.cards);
    }

    /// Remove and return the card at `index`.
    pub fn play(&mut self, index: usize) -> Result<Card, ValidationError> {
        if index >= self.cards.len() {
            return Err(ValidationError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Remove a uniformly random card, or `None` when empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        let index = rng.pick_index(self.cards.len())?;
        Some(self.cards.remove(index))
    }

    pub fn turn_face_up(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    pub fn turn_face_down(&mut self) {
        for card in &mut self.cards {
            card.face_up = false;
        }
    }

    /// `(face_up, face_down)` counts of one card type.
    #[must_use]
    pub fn count_for(&self, card_type: CardType) -> (usize, usize) {
        self.cards
            .iter()
            .filter(|c| c.card_type == card_type)
            .fold((0, 0), |(up, down), c| {
                if c.face_up {
                    (up + 1, down)
                } else {
                    (up, down + 1)
                }
            })
    }

    /// Lamps of either variant.
    #[must_use]
    pub fn lamp_count(&self) -> usize {
        self.cards.iter().filter(|c| c.card_type.is_lamp()).count()
    }

    /// Camels of either variant.
    #[must_use]
    pub fn camel_count(&self) -> usize {
        self.cards.iter().filter(|c| c.card_type.is_camel()).count()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pile {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pile(types: &[CardType]) -> Pile {
        types.iter().copied().map(Card::face_up).collect()
    }

    #[test]
    fn test_play_removes_card() {
        let mut hand = pile(&[CardType::Lamp, CardType::Sword, CardType::Camel]);

        assert_eq!(hand.play(1), Ok(Card::face_up(CardType::Sword)));
        assert_eq!(hand.len(), 2);
        assert_eq!(
            hand.play(2),
            Err(ValidationError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_push_front_is_top() {
        let mut discard = Pile::new();
        discard.push_front(Card::face_up(CardType::Lamp));
        discard.push_front(Card::face_up(CardType::Coins));

        assert_eq!(discard.get(0), Some(&Card::face_up(CardType::Coins)));
    }

    #[test]
    fn test_draw_empties_pile() {
        let mut rng = GameRng::new(3);
        let mut draw = pile(&[CardType::Lamp, CardType::Sword, CardType::Camel]);

        let mut drawn = Vec::new();
        while let Some(card) = draw.draw(&mut rng) {
            drawn.push(card.card_type);
        }
        drawn.sort();

        assert!(draw.is_empty());
        assert_eq!(drawn, vec![CardType::Lamp, CardType::Camel, CardType::Sword]);
    }

    #[test]
    fn test_counts() {
        let mut hand = pile(&[
            CardType::Lamp,
            CardType::StartLamp,
            CardType::StartCamel,
            CardType::Lamp,
        ]);
        hand.push(Card::face_down(CardType::Lamp));

        assert_eq!(hand.lamp_count(), 4);
        assert_eq!(hand.camel_count(), 1);
        assert_eq!(hand.count_for(CardType::Lamp), (2, 1));
        assert_eq!(hand.count_for(CardType::Guard), (0, 0));
    }

    #[test]
    fn test_face_turning() {
        let mut p = pile(&[CardType::Lamp, CardType::Guard]);
        p.turn_face_down();
        assert!(p.iter().all(|c| !c.face_up));
        p.turn_face_up();
        assert!(p.iter().all(|c| c.face_up));
    }
}
