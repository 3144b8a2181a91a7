//! Score changes during play.

use crate::board::{AreaId, Board};

/// Score changes of one sword strike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwordScore {
    /// Value of the card the mover lands on.
    pub mover: i32,
    /// Value of the bump card minus the value of the vacated card.
    pub victim: i32,
}

/// Score changes for striking the thief on `vacated`, which is pushed to `bumped_to`.
#[must_use]
pub fn sword_score(board: &Board, vacated: AreaId, bumped_to: AreaId) -> SwordScore {
    let vacated_value = board.value_at(vacated);
    SwordScore {
        mover: vacated_value,
        victim: board.value_at(bumped_to) - vacated_value,
    }
}

/// Score for landing on `dest`.
#[must_use]
pub fn landing_score(board: &Board, dest: AreaId) -> i32 {
    board.value_at(dest)
}
