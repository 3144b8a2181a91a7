//! One action cycle: `PlayCard`, `SelectThief`, `MoveThief`, `ClaimItem`,
//! `DrawCard`.
//!
//! Each handler validates its whole input before the first mutation.
//! `ClaimItem` and `DrawCard` take no input and run straight after a move.

use tracing::debug;

use super::checks::{board_area, require_phase};
use super::finish::end_cycle;
use crate::board::AreaId;
use crate::cards::{Card, CardType};
use crate::core::action::{Action, Intent, Outcome};
use crate::core::error::{EngineResult, InvariantViolation, ValidationError};
use crate::core::history::EntryKind;
use crate::core::phase::Phase;
use crate::core::state::MatchState;
use crate::movement::{bump_target, MoveRule, PlayedCard};
use crate::scoring::{landing_score, sword_score};

/// Play the card at `index` of the current player's hand.
///
/// The card goes on top of the discard pile. Jewels resolve to the last
/// card type played in the match; guards are never playable.
pub fn play_card(state: &mut MatchState, index: usize) -> EngineResult<Outcome> {
    require_phase(state, &Action::PlayCard(index), &[Phase::PlayCard])?;

    let hand = &state.current()?.hand;
    let card = *hand.get(index).ok_or(ValidationError::InvalidIndex {
        index,
        len: hand.len(),
    })?;
    let played = PlayedCard::resolve(card.card_type, state.last_played)?;

    let cp = state.current_player;
    let player = state.current_mut()?;
    let card = player.hand.play(index)?;
    player.discard(Card::face_up(card.card_type));

    state.selection.play(played);
    state.log(EntryKind::PlayCard {
        player: cp,
        card: card.card_type,
    });
    state.phase = Phase::SelectThief;
    debug!(player = %cp, card = %card.card_type, rule = ?played.rule(), "card played");
    Ok(Outcome::new(Intent::Cache))
}

/// Choose which of the current player's thieves moves.
///
/// Allowed after a card is played, and again before the first move to
/// switch thieves.
pub fn select_thief(state: &mut MatchState, id: AreaId) -> EngineResult<Outcome> {
    let action = Action::SelectThief(id);
    require_phase(state, &action, &[Phase::SelectThief, Phase::MoveThief])?;
    if state.phase == Phase::MoveThief && state.selection.step > 0 {
        return Err(ValidationError::WrongPhase {
            action: action.name(),
            phase: state.phase,
        }
        .into());
    }

    if board_area(state, id)?.thief != Some(state.current_player) {
        return Err(ValidationError::NotYourThief.into());
    }

    state.selection.select_thief(id);
    state.phase = Phase::MoveThief;
    debug!(player = %state.current_player, area = %id, "thief selected");
    Ok(Outcome::new(Intent::Cache))
}

/// Move the selected thief to `dest`, then claim and draw.
///
/// A sword strike pushes the victim one area further and adjusts both
/// scores. The first turban move returns to `MoveThief` for the second.
pub fn move_thief(state: &mut MatchState, dest: AreaId) -> EngineResult<Outcome> {
    require_phase(state, &Action::MoveThief(dest), &[Phase::MoveThief])?;

    let cp = state.current_player;
    let from = state
        .selection
        .thief_area
        .ok_or(ValidationError::NoSelection("one of your thieves"))?;
    let played = state.selection.played.ok_or(InvariantViolation::NoPlayedCard)?;
    let key = state
        .selection
        .cache_key()
        .ok_or(InvariantViolation::NoPlayedCard)?;
    if state.board.thief_at(from) != Some(cp) {
        return Err(ValidationError::NotYourThief.into());
    }
    if !state
        .selection
        .destinations(&state.board, cp, key)
        .contains(&dest)
    {
        return Err(ValidationError::IllegalDestination(dest).into());
    }

    let from_card = card_type_at(state, from)?;
    let to_card = card_type_at(state, dest)?;

    let mut bumped = None;
    if key.rule == MoveRule::Sword {
        let victim = state
            .board
            .thief_at(dest)
            .ok_or(InvariantViolation::MissingThief(dest))?;
        let bump = bump_target(&state.board, from, dest).ok_or(InvariantViolation::MissingArea(dest))?;
        let delta = sword_score(&state.board, dest, bump);
        state.board.area_mut(bump)?.thief = Some(victim);
        state.player_mut(victim)?.score += delta.victim;
        bumped = Some((victim, bump));
        debug!(player = %cp, victim = %victim, from = %dest, to = %bump, "thief bumped");
    }

    let gained = landing_score(&state.board, dest);
    state.board.area_mut(dest)?.thief = Some(cp);
    state.current_mut()?.score += gained;
    if key.rule == MoveRule::Turban {
        state.selection.step += 1;
    }

    state.log(EntryKind::MoveThief {
        player: cp,
        card: played.card,
        from: (from_card, from),
        to: (to_card, dest),
        bumped,
    });
    debug!(player = %cp, from = %from, to = %dest, "thief moved");

    claim_item(state, from, dest, key.rule)
}

fn card_type_at(state: &MatchState, id: AreaId) -> Result<CardType, InvariantViolation> {
    state
        .board
        .area(id)?
        .card
        .map(|c| c.card_type)
        .ok_or(InvariantViolation::MissingCard(id))
}

/// Claim the card of the area the thief just left.
fn claim_item(
    state: &mut MatchState,
    left: AreaId,
    landed: AreaId,
    rule: MoveRule,
) -> EngineResult<Outcome> {
    state.phase = Phase::ClaimItem;
    let cp = state.current_player;
    let (card, _) = state.board.claim(left)?;
    state.log(EntryKind::Claim {
        player: cp,
        card: card.card_type,
        area: left,
    });

    if state.turn == 1 {
        state.current_mut()?.hand.push(Card::face_up(card.card_type));
        return draw_cards(state);
    }

    state.current_mut()?.discard(Card::face_up(card.card_type));
    if rule == MoveRule::Turban && state.selection.step == 1 {
        state.selection.continue_from(landed);
        state.phase = Phase::MoveThief;
        debug!(player = %cp, area = %landed, "second turban move pending");
        return Ok(Outcome::new(Intent::Cache));
    }

    draw_cards(state)
}

/// Draw one card, two after coins, none on the first turn; then end the cycle.
fn draw_cards(state: &mut MatchState) -> EngineResult<Outcome> {
    state.phase = Phase::DrawCard;
    let cp = state.current_player;

    if state.turn != 1 {
        let extra = state
            .selection
            .played
            .is_some_and(|p| p.grants_extra_draw());
        let draws = if extra { 2 } else { 1 };

        for _ in 0..draws {
            let player = state.players.lookup_mut(cp)?;
            let (_, shuffled) = player.draw(&mut state.rng)?;
            state.log(EntryKind::Draw {
                player: cp,
                shuffled,
            });
        }
    }

    state.current_mut()?.performed_action = true;
    end_cycle(state)
}
