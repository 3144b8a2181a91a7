//! The shuffled deck and the starting hand.

use super::card::{Card, CardType};
use super::pile::Pile;
use crate::core::rng::GameRng;

/// Copies of each deck type.
pub const COPIES_PER_TYPE: usize = 8;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = COPIES_PER_TYPE * CardType::DECK_TYPES.len();
/// Cards in every starting hand.
pub const STARTING_HAND_SIZE: usize = 3;

/// A uniformly shuffled 64-card deck, all face down.
#[must_use]
pub fn new_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck: Vec<Card> = (0..COPIES_PER_TYPE)
        .flat_map(|_| CardType::DECK_TYPES.into_iter().map(Card::face_down))
        .collect();
    rng.shuffle(&mut deck);
    deck
}

/// Two start lamps and a start camel, face up.
#[must_use]
pub fn start_hand() -> Pile {
    [CardType::StartLamp, CardType::StartLamp, CardType::StartCamel]
        .into_iter()
        .map(Card::face_up)
        .collect()
}
