//! Card model: types, piles and the deck.
//!
//! ## Key Types
//!
//! - `CardType`: One of the eight deck types or a start variant
//! - `Card`: A type plus its facing
//! - `Pile`: Ordered cards (hand, draw pile, discard pile)
//!
//! ## Deck
//!
//! 64 cards, 8 copies of each deck type. Start variants are only dealt in
//! starting hands and never enter the deck.

pub mod card;
pub mod deck;
pub mod pile;

pub use card::{Card, CardType, UnknownCardType};
pub use deck::{new_deck, start_hand, COPIES_PER_TYPE, DECK_SIZE, STARTING_HAND_SIZE};
pub use pile::Pile;
