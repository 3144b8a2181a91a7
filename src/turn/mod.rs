//! Turn and phase control.
//!
//! Handlers take the match state and one action argument, validate, then
//! mutate:
//! - `setup`: match creation
//! - `placement`: `PlaceThieves`
//! - `card_play`: play, select, move, claim, draw
//! - `finish`: pass, cycle end, final claim and ranking
//!
//! [`GuildOfThieves`] checks turn ownership, dispatches to the handlers and
//! rolls back on error.

mod card_play;
mod checks;
mod controller;
mod finish;
mod placement;
pub mod selection;
mod setup;

pub use card_play::{move_thief, play_card, select_thief};
pub use controller::GuildOfThieves;
pub use finish::pass;
pub use placement::place_thief;
pub use selection::Selection;
pub use setup::new_match;
