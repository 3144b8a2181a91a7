//! Engine error taxonomy.
//!
//! - [`ValidationError`]: the acting user did something the rules forbid.
//!   Always recoverable; the message is shown to the user verbatim and the
//!   match state is left unchanged.
//! - [`InvariantViolation`]: the match data is inconsistent. Fatal for the
//!   current request and never repaired silently.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;
use crate::board::AreaId;
use crate::cards::CardType;

/// A rule-level rejection of a player action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("only the current player can perform an action")]
    OutOfTurn,

    #[error("you can't {action} during the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("you must select {0}")]
    NoSelection(&'static str),

    #[error("no card at hand position {index} (hand holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("you can't move the selected thief to area {0}")]
    IllegalDestination(AreaId),

    #[error("the {0} card can't be played")]
    NotPlayable(CardType),

    #[error("you must select one of your thieves")]
    NotYourThief,

    #[error("you can't select area {area}: {reason}")]
    AreaUnavailable { area: AreaId, reason: &'static str },

    #[error("unable to determine area from {0:?}")]
    MalformedArea(String),

    #[error("{0} has already performed an action")]
    AlreadyActed(PlayerId),

    #[error("a match needs 2 to 4 players, not {0}")]
    PlayerCount(usize),
}

/// Broken internal consistency of a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("area {0} is not on the board")]
    MissingArea(AreaId),

    #[error("area {0} has no card to claim")]
    MissingCard(AreaId),

    #[error("{0} has no card to draw")]
    EmptyPiles(PlayerId),

    #[error("{0} is not seated in this match")]
    MissingPlayer(PlayerId),

    #[error("card count is {actual}, expected {expected}")]
    CardCount { expected: usize, actual: usize },

    #[error("thief of {0} stands on an area with no card")]
    StrandedThief(AreaId),

    #[error("a thief is selected but no card was played")]
    NoPlayedCard,

    #[error("area {0} was expected to hold a thief")]
    MissingThief(AreaId),
}

/// Error returned by every engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl EngineError {
    /// True for errors caused by the acting user rather than corrupt data.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::WrongPhase {
            action: "play a card",
            phase: Phase::PlaceThieves,
        };
        assert_eq!(
            err.to_string(),
            "you can't play a card during the Place Thieves phase"
        );

        let err = ValidationError::IllegalDestination(AreaId::new(2, 3));
        assert_eq!(err.to_string(), "you can't move the selected thief to area C4");

        let err = ValidationError::NotPlayable(CardType::Guard);
        assert_eq!(err.to_string(), "the Guard card can't be played");
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err: EngineError = ValidationError::OutOfTurn.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "only the current player can perform an action");

        let err: EngineError = InvariantViolation::MissingArea(AreaId::new(0, 0)).into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "area A1 is not on the board");
    }
}
