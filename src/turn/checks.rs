//! Validation shared by the action handlers.

use crate::board::{Area, AreaId};
use crate::core::action::Action;
use crate::core::error::ValidationError;
use crate::core::phase::Phase;
use crate::core::state::MatchState;

/// Reject `action` unless the match is in one of `allowed`.
pub(crate) fn require_phase(
    state: &MatchState,
    action: &Action,
    allowed: &[Phase],
) -> Result<(), ValidationError> {
    if allowed.contains(&state.phase) {
        Ok(())
    } else {
        Err(ValidationError::WrongPhase {
            action: action.name(),
            phase: state.phase,
        })
    }
}

/// A user-supplied area that must exist on the board.
pub(crate) fn board_area(state: &MatchState, id: AreaId) -> Result<&Area, ValidationError> {
    state.board.get(id).ok_or(ValidationError::AreaUnavailable {
        area: id,
        reason: "it is not on the board",
    })
}
