//! Match phases.

use serde::{Deserialize, Serialize};

/// Phase of the turn state machine.
///
/// `PlayCard` through `DrawCard` repeat once per action cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    StartGame,
    PlaceThieves,
    PlayCard,
    SelectThief,
    MoveThief,
    ClaimItem,
    DrawCard,
    FinalClaim,
    EndGame,
    AnnounceWinners,
    GameOver,
}

impl Phase {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::StartGame => "Start Game",
            Phase::PlaceThieves => "Place Thieves",
            Phase::PlayCard => "Play Card",
            Phase::SelectThief => "Select Thief",
            Phase::MoveThief => "Move Thief",
            Phase::ClaimItem => "Claim Magical Item",
            Phase::DrawCard => "Draw Card",
            Phase::FinalClaim => "Final Claim",
            Phase::EndGame => "End Of Game",
            Phase::AnnounceWinners => "Announce Winners",
            Phase::GameOver => "Game Over",
        }
    }

    /// True once the match has left the action cycles for good.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(
            self,
            Phase::FinalClaim | Phase::EndGame | Phase::AnnounceWinners | Phase::GameOver
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::ClaimItem.to_string(), "Claim Magical Item");
        assert_eq!(Phase::EndGame.to_string(), "End Of Game");
    }

    #[test]
    fn test_finished_phases() {
        assert!(!Phase::DrawCard.is_finished());
        assert!(!Phase::PlaceThieves.is_finished());
        assert!(Phase::FinalClaim.is_finished());
        assert!(Phase::GameOver.is_finished());
    }
}
