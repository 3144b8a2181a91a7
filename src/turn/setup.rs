//! Match creation: `Setup`, `StartGame`, then into `PlaceThieves`.

use im::Vector;
use tracing::debug;

use super::selection::Selection;
use crate::board::Board;
use crate::core::config::MatchConfig;
use crate::core::error::ValidationError;
use crate::core::history::EntryKind;
use crate::core::phase::Phase;
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::MatchState;

/// Create a match ready for its first thief placement.
///
/// The board is dealt from a fresh deck on its own RNG stream, so draws do
/// not shift the layout. Placement starts with the last seat.
pub fn new_match(config: MatchConfig) -> Result<MatchState, ValidationError> {
    config.validate()?;

    let rng = GameRng::new(config.seed);
    let board = Board::new(config.rows(), &mut rng.for_context("board"));
    let players = PlayerMap::new(config.player_count, Player::new);
    let last_seat = PlayerId::new((config.player_count - 1) as u8);

    let mut state = MatchState {
        config,
        phase: Phase::Setup,
        turn: 0,
        round: 1,
        current_player: last_seat,
        board,
        players,
        last_played: None,
        selection: Selection::default(),
        places: Vec::new(),
        winners: Vec::new(),
        history: Vector::new(),
        actions: Vector::new(),
        rng,
    };

    for player in PlayerId::all(state.player_count()) {
        state.log(EntryKind::Setup { player });
    }

    state.phase = Phase::StartGame;
    let players = state.player_ids().collect();
    state.log(EntryKind::StartGame { players });

    state.phase = Phase::PlaceThieves;
    debug!(
        seed = state.config.seed,
        players = state.player_count(),
        current = %state.current_player,
        "match created"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_placement_with_last_seat() {
        let state = new_match(MatchConfig::new(4).with_seed(5)).unwrap();

        assert_eq!(state.phase, Phase::PlaceThieves);
        assert_eq!(state.current_player, PlayerId::new(3));
        assert_eq!(state.turn, 0);
        assert_eq!(state.board.rows(), 7);
        assert_eq!(state.history.len(), 5);
        assert_eq!(
            state.history.back().unwrap().to_string(),
            "Good luck Player 0, Player 1, Player 2 and Player 3. Have fun."
        );
    }

    #[test]
    fn test_two_player_board() {
        let state = new_match(MatchConfig::new(2)).unwrap();

        assert_eq!(state.board.rows(), 6);
        assert_eq!(state.board.reserve_len(), 16);
    }

    #[test]
    fn test_rejects_bad_player_count() {
        assert_eq!(
            new_match(MatchConfig::new(5)).err(),
            Some(ValidationError::PlayerCount(5))
        );
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = new_match(MatchConfig::new(3).with_seed(8)).unwrap();
        let b = new_match(MatchConfig::new(3).with_seed(8)).unwrap();

        assert_eq!(a.board, b.board);
        assert_eq!(a.current_player, b.current_player);
    }
}
