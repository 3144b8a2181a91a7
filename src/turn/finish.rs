//! Cycle end, passing and the end of the match.
//!
//! ## Rotation
//!
//! After a cycle the next seat that has not passed becomes current. The
//! turn counter goes up each time rotation wraps past the last seat. Once
//! every seat has passed the match runs `FinalClaim`, `EndGame` and
//! `AnnounceWinners` and settles in `GameOver`.

use tracing::{debug, info};

use super::checks::require_phase;
use crate::cards::Card;
use crate::core::action::{Action, Intent, Notification, Outcome};
use crate::core::error::{EngineResult, InvariantViolation, ValidationError};
use crate::core::history::EntryKind;
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::scoring::{place_groups, score_table};

/// Pass instead of completing a move. A passed player takes no further
/// cycles.
///
/// Allowed before a card is played, after it is played, and once a thief
/// is selected up to its first move.
pub fn pass(state: &mut MatchState) -> EngineResult<Outcome> {
    let action = Action::Pass;
    require_phase(
        state,
        &action,
        &[Phase::PlayCard, Phase::SelectThief, Phase::MoveThief],
    )?;
    if state.phase == Phase::MoveThief && state.selection.step > 0 {
        return Err(ValidationError::WrongPhase {
            action: action.name(),
            phase: state.phase,
        }
        .into());
    }

    let cp = state.current_player;
    let player = state.current_mut()?;
    player.passed = true;
    player.performed_action = true;
    state.log(EntryKind::Pass { player: cp });
    debug!(player = %cp, "passed");

    end_cycle(state)
}

/// Next seat after `from` that has not passed, and whether rotation wrapped.
fn next_active(state: &MatchState, from: PlayerId) -> Option<(PlayerId, bool)> {
    let n = state.player_count();
    (1..=n).find_map(|k| {
        let raw = from.index() + k;
        let seat = PlayerId::new((raw % n) as u8);
        let active = state.players.get(seat).is_some_and(|p| !p.passed);
        active.then_some((seat, raw >= n))
    })
}

/// Close the current player's cycle and hand over to the next seat.
pub(crate) fn end_cycle(state: &mut MatchState) -> EngineResult<Outcome> {
    let old = state.current_player;
    if let Some(played) = state.selection.played {
        state.last_played = Some(played.effective());
    }
    state.current_mut()?.hand.turn_face_up();

    let Some((next, wrapped)) = next_active(state, old) else {
        return finish_match(state);
    };

    if wrapped {
        state.turn += 1;
        state.round += 1;
    }
    state.current_player = next;
    state.phase = Phase::PlayCard;
    state.selection.clear();
    state.current_mut()?.begin_cycle();
    info!(
        previous = %old,
        current = %next,
        turn = state.turn,
        "cycle finished"
    );

    let outcome = Outcome::new(Intent::Save);
    Ok(if next != old {
        outcome.with_notification(Notification::CurrentPlayerChanged(next))
    } else {
        outcome
    })
}

/// Final claim, ranking and winner announcement.
fn finish_match(state: &mut MatchState) -> EngineResult<Outcome> {
    final_claim(state)?;

    state.phase = Phase::EndGame;
    state.places = place_groups(&state.players);
    let rows = score_table(&state.players);
    state.log(EntryKind::EndGame { rows });

    state.phase = Phase::AnnounceWinners;
    state.winners = state
        .places
        .first()
        .map(|g| g.players.clone())
        .unwrap_or_default();
    let winners = state.winners.clone();
    state.log(EntryKind::AnnounceWinners { winners });

    state.phase = Phase::GameOver;
    state.selection.clear();
    info!(winners = ?state.winners, turn = state.turn, "match finished");

    let everyone = state.player_ids().collect();
    Ok(Outcome::new(Intent::Save).with_notification(Notification::GameEnded(everyone)))
}

/// Every thief claims its card into its owner's discard pile; then each
/// player's piles are folded into a face-up hand.
fn final_claim(state: &mut MatchState) -> Result<(), InvariantViolation> {
    state.phase = Phase::FinalClaim;

    let occupied: Vec<_> = state
        .board
        .areas()
        .filter(|a| a.thief.is_some())
        .map(|a| a.id)
        .collect();
    for id in occupied {
        let (card, owner) = state.board.claim(id)?;
        let owner = owner.ok_or(InvariantViolation::MissingThief(id))?;
        state.player_mut(owner)?.discard(Card::face_up(card.card_type));
    }

    for player in state.players.values_mut() {
        player.gather_cards();
    }
    debug!("final claim done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;
    use crate::turn::{new_match, place_thief};

    fn placed(players: usize) -> MatchState {
        let mut state = new_match(MatchConfig::new(players).with_seed(21)).unwrap();
        while state.phase == Phase::PlaceThieves {
            let id = state
                .board
                .areas()
                .find(|a| a.can_occupy())
                .map(|a| a.id)
                .unwrap();
            place_thief(&mut state, id).unwrap();
        }
        state
    }

    #[test]
    fn test_pass_rotates_and_skips_passed() {
        let mut state = placed(3);

        let outcome = pass(&mut state).unwrap();
        assert_eq!(outcome.intent, Intent::Save);
        assert_eq!(state.current_player, PlayerId::new(1));
        assert_eq!(state.turn, 1);

        pass(&mut state).unwrap();
        assert_eq!(state.current_player, PlayerId::new(2));

        // Only seat 2 is left; rotation wraps onto it again.
        let outcome = pass(&mut state).unwrap();
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(
            outcome.notifications.as_slice(),
            &[Notification::GameEnded(vec![
                PlayerId::new(0),
                PlayerId::new(1),
                PlayerId::new(2)
            ])]
        );
    }

    #[test]
    fn test_last_active_player_keeps_turn() {
        let mut state = placed(2);
        pass(&mut state).unwrap();
        assert_eq!(state.current_player, PlayerId::new(1));

        let next = next_active(&state, PlayerId::new(1));
        assert_eq!(next, Some((PlayerId::new(1), true)));
    }

    #[test]
    fn test_final_claim_gathers_cards() {
        let mut state = placed(2);
        pass(&mut state).unwrap();
        pass(&mut state).unwrap();

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.board.areas().filter(|a| a.thief.is_some()).count(), 0);
        for player in state.players.values() {
            assert_eq!(player.hand.len(), 3 + 3);
            assert!(player.draw_pile.is_empty());
            assert!(player.discard_pile.is_empty());
            assert!(player.hand.iter().all(|c| c.face_up));
        }
        assert!(!state.winners.is_empty());
        assert_eq!(state.places[0].players, state.winners);
        assert!(state.check_invariants().is_ok());
    }
}
