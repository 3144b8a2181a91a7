//! Movement rule engine.
//!
//! ## Key Types
//!
//! - `MoveRule`: The rule a card moves by
//! - `PlayedCard`: The card of the current cycle, with any jewels mimic
//!   already resolved
//! - `DestinationCache`: Memoised destination set for the current selection
//!
//! Destination sets are pure functions of the board, the moving player, the
//! origin area, the rule and the turban step.

pub mod cache;
pub mod rules;

pub use cache::{CacheKey, DestinationCache};
pub use rules::{bump_target, legal_destinations, Destinations, MoveRule, PlayedCard};
