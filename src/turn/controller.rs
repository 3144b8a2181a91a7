//! Entry point for applying player actions to a match.

use tracing::{debug, warn};

use super::card_play::{move_thief, play_card, select_thief};
use super::finish::pass;
use super::placement::place_thief;
use crate::core::action::{Action, Intent, Outcome};
use crate::core::error::{EngineResult, ValidationError};
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::movement::PlayedCard;
use crate::rules::{GameResult, RulesEngine};

/// Guild of Thieves rules.
///
/// Holds no match data; one value can drive any number of matches.
#[derive(Clone, Copy, Debug)]
pub struct GuildOfThieves {
    check_invariants: bool,
}

impl Default for GuildOfThieves {
    fn default() -> Self {
        Self {
            check_invariants: true,
        }
    }
}

impl GuildOfThieves {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify card conservation and thief placement after every action.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Validate and apply one action by `player`.
    ///
    /// On error the state is exactly as it was before the call.
    pub fn apply(
        &self,
        state: &mut MatchState,
        player: PlayerId,
        action: &Action,
    ) -> EngineResult<Outcome> {
        if player != state.current_player {
            return Err(ValidationError::OutOfTurn.into());
        }
        if state.phase.is_finished() {
            return Err(ValidationError::WrongPhase {
                action: action.name(),
                phase: state.phase,
            }
            .into());
        }
        if *action == Action::Undo {
            debug!(player = %player, "undo requested");
            return Ok(Outcome::new(Intent::Undo));
        }

        let snapshot = state.clone();
        match self.dispatch(state, action) {
            Ok(outcome) => {
                state.record(player, action.clone());
                debug!(
                    player = %player,
                    action = ?action,
                    phase = ?state.phase,
                    intent = ?outcome.intent,
                    "action applied"
                );
                Ok(outcome)
            }
            Err(err) => {
                *state = snapshot;
                if !err.is_validation() {
                    warn!(player = %player, action = ?action, error = %err, "action rolled back");
                }
                Err(err)
            }
        }
    }

    fn dispatch(&self, state: &mut MatchState, action: &Action) -> EngineResult<Outcome> {
        let outcome = match *action {
            Action::PlaceThief(id) => place_thief(state, id)?,
            Action::PlayCard(index) => play_card(state, index)?,
            Action::SelectThief(id) => select_thief(state, id)?,
            Action::MoveThief(id) => move_thief(state, id)?,
            Action::Pass => pass(state)?,
            Action::Undo => Outcome::new(Intent::Undo),
        };
        if self.check_invariants {
            state.check_invariants()?;
        }
        Ok(outcome)
    }

    fn own_thieves(state: &MatchState, player: PlayerId) -> impl Iterator<Item = Action> {
        state.board.thieves_of(player).into_iter().map(Action::SelectThief)
    }
}

impl RulesEngine for GuildOfThieves {
    fn legal_actions(&self, state: &MatchState, player: PlayerId) -> Vec<Action> {
        // Only the current player can act
        if player != state.current_player || state.phase.is_finished() {
            return vec![];
        }
        let Ok(current) = state.current() else {
            return vec![];
        };

        let mut actions = Vec::new();
        match state.phase {
            Phase::PlaceThieves => {
                if current.thieves_placed < state.config.num_thieves() {
                    actions.extend(
                        state
                            .board
                            .areas()
                            .filter(|a| a.can_occupy())
                            .map(|a| Action::PlaceThief(a.id)),
                    );
                }
            }
            Phase::PlayCard => {
                actions.extend(
                    current
                        .hand
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| PlayedCard::resolve(c.card_type, state.last_played).is_ok())
                        .map(|(i, _)| Action::PlayCard(i)),
                );
                actions.push(Action::Pass);
            }
            Phase::SelectThief => {
                actions.extend(Self::own_thieves(state, player));
                actions.push(Action::Pass);
            }
            Phase::MoveThief => {
                if let Some(key) = state.selection.cache_key() {
                    actions.extend(
                        state
                            .selection
                            .peek_destinations(&state.board, player, key)
                            .into_iter()
                            .map(Action::MoveThief),
                    );
                }
                if state.selection.step == 0 {
                    let selected = state.selection.thief_area;
                    actions.extend(
                        Self::own_thieves(state, player)
                            .filter(|a| a.area() != selected),
                    );
                    actions.push(Action::Pass);
                }
            }
            _ => {}
        }
        actions
    }

    fn apply_action(
        &self,
        state: &mut MatchState,
        player: PlayerId,
        action: &Action,
    ) -> EngineResult<Outcome> {
        self.apply(state, player, action)
    }

    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        state
            .is_over()
            .then(|| GameResult::from_winners(&state.winners))
    }
}
