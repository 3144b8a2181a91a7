//! Core match types: players, state, actions, RNG, configuration, errors.
//!
//! Everything the rule modules share lives here. The rules themselves are
//! in `movement`, `turn` and `scoring`.

pub mod action;
pub mod config;
pub mod error;
pub mod history;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Intent, Notification, Outcome};
pub use config::{MatchConfig, COLUMNS, MAX_PLAYERS, MIN_PLAYERS, ROWS, TWO_PLAYER_ROWS};
pub use error::{EngineError, EngineResult, InvariantViolation, ValidationError};
pub use history::{EntryKind, LogEntry};
pub use phase::Phase;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::MatchState;
