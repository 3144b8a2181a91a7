//! Rules engine trait.
//!
//! Implementors define:
//! - What actions are legal
//! - How actions modify state
//! - When the match is over and who won

use crate::core::action::{Action, Outcome};
use crate::core::error::EngineResult;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Players sharing first place.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build from the first place group.
    #[must_use]
    pub fn from_winners(winners: &[PlayerId]) -> Self {
        match winners {
            [one] => GameResult::Winner(*one),
            many => GameResult::Winners(many.to_vec()),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if player can't act
/// - `apply_action`: Must be deterministic given the state's RNG, and must
///   leave the state untouched when it returns an error
/// - `is_terminal`: Return None if the match continues
pub trait RulesEngine {
    /// Enumerate the state-changing actions `player` may take.
    fn legal_actions(&self, state: &MatchState, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the match state.
    fn apply_action(
        &self,
        state: &mut MatchState,
        player: PlayerId,
        action: &Action,
    ) -> EngineResult<Outcome>;

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` if the match has ended, `None` if it continues.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is among [`RulesEngine::legal_actions`].
    fn is_legal(&self, state: &MatchState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}
