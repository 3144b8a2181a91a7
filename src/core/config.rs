//! Match configuration.
//!
//! Callers choose the seat count, the two-thief variant and the RNG seed.
//! Board height and thieves per player are derived from these.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Columns on every board.
pub const COLUMNS: u8 = 8;
/// Rows for three or more players.
pub const ROWS: u8 = 7;
/// Rows for the two-player board.
pub const TWO_PLAYER_ROWS: u8 = 6;
/// Fewest seats a match supports.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a match supports.
pub const MAX_PLAYERS: usize = 4;

/// Configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Each player places two thieves instead of three.
    pub two_thief_variant: bool,

    /// Seed for the match RNG.
    /// Same seed and same actions produce the same match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            two_thief_variant: false,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Config for `player_count` seats with default options.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the two-thief variant.
    #[must_use]
    pub fn with_two_thief_variant(mut self, enabled: bool) -> Self {
        self.two_thief_variant = enabled;
        self
    }

    /// Board rows for this seat count.
    #[must_use]
    pub fn rows(&self) -> u8 {
        if self.player_count == 2 {
            TWO_PLAYER_ROWS
        } else {
            ROWS
        }
    }

    /// Thieves each player places.
    #[must_use]
    pub fn num_thieves(&self) -> u8 {
        if self.two_thief_variant {
            2
        } else {
            3
        }
    }

    /// Reject seat counts the board cannot host.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(ValidationError::PlayerCount(self.player_count))
        }
    }
}
