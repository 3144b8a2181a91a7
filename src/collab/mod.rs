//! Collaborators around the engine: persistence, notifications, ratings.
//!
//! The engine itself never does I/O. [`MatchRunner`] loads a snapshot,
//! applies one action, then stores and notifies according to the
//! returned [`Outcome`](crate::core::Outcome).

pub mod codec;
pub mod notify;
pub mod rating;
pub mod runner;
pub mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::error::EngineError;

pub use notify::{deliver, Notifier};
pub use rating::{EloRatings, EndGameSummary, RatingChange, RatingService};
pub use runner::MatchRunner;
pub use store::{MatchStore, MemoryStore, Versioned};

/// Stored match identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "match {}", self.0)
    }
}

/// Failures outside the rules themselves.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{id} changed since version {expected} (now {actual}); retry")]
    Conflict {
        id: MatchId,
        expected: u64,
        actual: u64,
    },

    #[error("{0} not found")]
    NotFound(MatchId),

    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("rating failed: {0}")]
    Rating(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CollaboratorError {
    /// True when the caller should reload and try again.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, CollaboratorError::Conflict { .. })
    }
}
