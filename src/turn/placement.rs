//! `PlaceThieves`: seats take turns placing one thief each in reverse seat
//! order, starting from the last seat, until every seat has placed its
//! thieves. Seat 0 then opens the first action cycle.

use tracing::{debug, info};

use super::checks::{board_area, require_phase};
use crate::board::AreaId;
use crate::core::action::{Action, Intent, Notification, Outcome};
use crate::core::error::{EngineResult, InvariantViolation, ValidationError};
use crate::core::history::EntryKind;
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;

/// Place one of the current player's thieves on `id`.
///
/// The area needs a card and no thief. The card's value is scored at once.
pub fn place_thief(state: &mut MatchState, id: AreaId) -> EngineResult<Outcome> {
    let action = Action::PlaceThief(id);
    require_phase(state, &action, &[Phase::PlaceThieves])?;

    let area = board_area(state, id)?;
    let card = area.card.ok_or(ValidationError::AreaUnavailable {
        area: id,
        reason: "it has no card",
    })?;
    if area.thief.is_some() {
        return Err(ValidationError::AreaUnavailable {
            area: id,
            reason: "it already holds a thief",
        }
        .into());
    }

    let cp = state.current_player;
    let num_thieves = state.config.num_thieves();
    if state.current()?.thieves_placed >= num_thieves {
        return Err(ValidationError::AlreadyActed(cp).into());
    }

    state.board.area_mut(id)?.thief = Some(cp);
    let player = state.current_mut()?;
    player.score += card.value();
    player.thieves_placed += 1;
    player.performed_action = true;
    state.log(EntryKind::PlaceThief {
        player: cp,
        card: card.card_type,
        area: id,
    });
    debug!(player = %cp, area = %id, "thief placed");

    let outcome = Outcome::new(Intent::Save);
    let all_placed = state
        .players
        .values()
        .all(|p| p.thieves_placed >= num_thieves);

    if all_placed {
        start_action_cycles(state)?;
    } else {
        let n = state.player_count() as u8;
        let next = PlayerId::new((cp.0 + n - 1) % n);
        if next.0 == n - 1 {
            state.round += 1;
        }
        state.current_player = next;
        state.current_mut()?.begin_cycle();
    }

    Ok(if state.current_player != cp {
        outcome.with_notification(Notification::CurrentPlayerChanged(state.current_player))
    } else {
        outcome
    })
}

fn start_action_cycles(state: &mut MatchState) -> Result<(), InvariantViolation> {
    state.current_player = PlayerId::new(0);
    state.turn = 1;
    state.round = 1;
    state.phase = Phase::PlayCard;
    state.selection.clear();
    state.current_mut()?.begin_cycle();
    info!(current = %state.current_player, "placement finished, first turn begins");
    Ok(())
}
