//! # guild-of-thieves
//!
//! Rule engine for Guild of Thieves, a turn-based card game for two to four
//! players on a grid of face-up cards.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every action is checked in full before the
//!    state changes. A rejected action leaves the match untouched.
//!
//! 2. **Deterministic**: the seed and the action sequence fix the whole
//!    match, shuffles included.
//!
//! 3. **No I/O in the engine**: applying an action returns an
//!    [`Outcome`] telling the caller what to persist and whom to notify.
//!
//! ## Modules
//!
//! - `core`: players, match state, actions, RNG, configuration, errors
//! - `cards`: card types, piles and the deck
//! - `board`: area coordinates and the grid
//! - `movement`: per-card movement rules and destination caching
//! - `scoring`: running score changes and final ranking
//! - `turn`: phase handlers and the [`GuildOfThieves`] controller
//! - `rules`: the `RulesEngine` trait
//! - `collab`: persistence, notifications and ratings around the engine

pub mod board;
pub mod cards;
pub mod collab;
pub mod core;
pub mod movement;
pub mod rules;
pub mod scoring;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, EntryKind, GameRng, GameRngState,
    Intent, InvariantViolation, LogEntry, MatchConfig, MatchState, Notification, Outcome, Phase,
    Player, PlayerId, PlayerMap, ValidationError,
};

pub use crate::board::{Area, AreaId, Board, Direction};

pub use crate::cards::{Card, CardType, Pile};

pub use crate::movement::{legal_destinations, Destinations, MoveRule, PlayedCard};

pub use crate::scoring::{place_groups, MatchOutcome, PlaceGroup, ScoreRow};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::turn::{new_match, GuildOfThieves, Selection};

pub use crate::collab::{
    CollaboratorError, EloRatings, EndGameSummary, MatchId, MatchRunner, MatchStore,
    MemoryStore, Notifier, RatingService, Versioned,
};
