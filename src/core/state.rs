//! Match state.
//!
//! ## MatchState
//!
//! Everything a match needs between two actions:
//! - Phase, turn, round and current player
//! - Board and the player table
//! - Mimic target for jewels
//! - Transient selection of the running action cycle
//! - Log and action history
//! - RNG
//!
//! Logs use `im` persistent vectors so cloning a state before an action
//! stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::MatchConfig;
use super::error::InvariantViolation;
use super::history::{EntryKind, LogEntry};
use super::phase::Phase;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::Board;
use crate::cards::{CardType, DECK_SIZE, STARTING_HAND_SIZE};
use crate::scoring::PlaceGroup;
use crate::turn::Selection;

/// Complete state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,

    pub phase: Phase,

    /// Starts at 0; set to 1 when the first action cycle begins.
    pub turn: u32,

    /// Placement round, then the round counter of the cycles.
    pub round: u32,

    pub current_player: PlayerId,

    pub board: Board,

    pub players: PlayerMap<Player>,

    /// Effective type of the last card played, the jewels mimic target.
    pub last_played: Option<CardType>,

    pub selection: Selection,

    /// Finishing places, filled at game end.
    pub places: Vec<PlaceGroup>,

    pub winners: Vec<PlayerId>,

    pub history: Vector<LogEntry>,

    pub actions: Vector<ActionRecord>,

    pub rng: GameRng,
}

impl MatchState {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, InvariantViolation> {
        self.players.lookup(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, InvariantViolation> {
        self.players.lookup_mut(id)
    }

    pub fn current(&self) -> Result<&Player, InvariantViolation> {
        self.player(self.current_player)
    }

    pub fn current_mut(&mut self) -> Result<&mut Player, InvariantViolation> {
        let id = self.current_player;
        self.player_mut(id)
    }

    /// True once the match can take no further actions.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Append a log entry stamped with the current turn, round and phase.
    pub fn log(&mut self, kind: EntryKind) {
        self.history.push_back(LogEntry {
            turn: self.turn,
            round: self.round,
            phase: self.phase,
            kind,
        });
    }

    /// Record an applied action.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.actions.len() as u32;
        self.actions
            .push_back(ActionRecord::new(player, action, self.turn, sequence));
    }

    /// Cards on the board, in the reserve and in every player's piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.board.card_count()
            + self.board.reserve_len()
            + self.players.values().map(Player::card_count).sum::<usize>()
    }

    /// The deck plus every starting hand.
    #[must_use]
    pub fn expected_card_count(&self) -> usize {
        DECK_SIZE + STARTING_HAND_SIZE * self.player_count()
    }

    /// Check card conservation and that every thief stands on a card of a
    /// seated player.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let expected = self.expected_card_count();
        let actual = self.card_count();
        if actual != expected {
            return Err(InvariantViolation::CardCount { expected, actual });
        }

        for area in self.board.areas() {
            if let Some(owner) = area.thief {
                self.players.lookup(owner)?;
                if area.card.is_none() {
                    return Err(InvariantViolation::StrandedThief(area.id));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AreaId;
    use crate::turn::new_match;

    #[test]
    fn test_new_match_conserves_cards() {
        let state = new_match(MatchConfig::new(3).with_seed(11)).unwrap();

        assert_eq!(state.expected_card_count(), 73);
        assert_eq!(state.card_count(), 73);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_lost_card_is_detected() {
        let mut state = new_match(MatchConfig::new(2)).unwrap();
        state.board.area_mut(AreaId::new(0, 0)).unwrap().card = None;

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::CardCount {
                expected: 70,
                actual: 69
            })
        );
    }

    #[test]
    fn test_stranded_thief_is_detected() {
        let mut state = new_match(MatchConfig::new(2)).unwrap();
        let a1 = AreaId::new(0, 0);
        let area = state.board.area_mut(a1).unwrap();
        let card = area.card.take().unwrap();
        area.thief = Some(PlayerId::new(0));
        state.players[PlayerId::new(0)].discard(card);

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::StrandedThief(a1))
        );
    }

    #[test]
    fn test_log_stamps_entry() {
        let mut state = new_match(MatchConfig::new(2)).unwrap();
        let before = state.history.len();

        state.log(EntryKind::Pass {
            player: PlayerId::new(1),
        });

        let entry = state.history.back().unwrap();
        assert_eq!(state.history.len(), before + 1);
        assert_eq!(entry.phase, state.phase);
        assert_eq!(entry.to_string(), "Player 1 passed.");
    }
}
