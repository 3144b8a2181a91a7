//! Rating updates from finishing places.
//!
//! Each player is scored against every opponent: a better place is a win,
//! a shared place a draw. [`EloRatings`] turns those pairwise results into
//! Elo adjustments.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::CollaboratorError;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::scoring::{pairwise_outcomes, score_table, PlaceGroup, ScoreRow};

/// Rating movement of one player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player: PlayerId,
    pub before: f64,
    pub after: f64,
}

impl RatingChange {
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }
}

/// Computes rating changes for a finished match.
pub trait RatingService {
    fn rate(&self, places: &[PlaceGroup]) -> Result<Vec<RatingChange>, CollaboratorError>;
}

/// Elo ratings keyed by seat.
#[derive(Clone, Debug)]
pub struct EloRatings {
    k_factor: f64,
    initial: f64,
    ratings: FxHashMap<PlayerId, f64>,
}

impl Default for EloRatings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            initial: 1500.0,
            ratings: FxHashMap::default(),
        }
    }
}

impl EloRatings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, player: PlayerId, rating: f64) -> Self {
        self.ratings.insert(player, rating);
        self
    }

    #[must_use]
    pub fn rating(&self, player: PlayerId) -> f64 {
        self.ratings.get(&player).copied().unwrap_or(self.initial)
    }

    fn expected(&self, player: PlayerId, opponent: PlayerId) -> f64 {
        let diff = self.rating(opponent) - self.rating(player);
        1.0 / (1.0 + 10f64.powf(diff / 400.0))
    }
}

impl RatingService for EloRatings {
    fn rate(&self, places: &[PlaceGroup]) -> Result<Vec<RatingChange>, CollaboratorError> {
        let players: Vec<PlayerId> = places.iter().flat_map(|g| g.players.iter().copied()).collect();
        if players.len() < 2 {
            return Err(CollaboratorError::Rating(format!(
                "need at least two placed players, got {}",
                players.len()
            )));
        }

        // Each opponent counts as a fraction of one game.
        let scale = self.k_factor / (players.len() - 1) as f64;
        let mut deltas: FxHashMap<PlayerId, f64> = FxHashMap::default();
        for (player, opponent, outcome) in pairwise_outcomes(places) {
            *deltas.entry(player).or_default() +=
                scale * (outcome.weight() - self.expected(player, opponent));
        }

        Ok(players
            .into_iter()
            .map(|player| {
                let before = self.rating(player);
                RatingChange {
                    player,
                    before,
                    after: before + deltas.get(&player).copied().unwrap_or_default(),
                }
            })
            .collect())
    }
}

/// Everything reported once a match is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndGameSummary {
    pub places: Vec<PlaceGroup>,
    pub rows: Vec<ScoreRow>,
    pub winners: Vec<PlayerId>,
    pub ratings: Vec<RatingChange>,
}

impl EndGameSummary {
    pub fn build(
        state: &MatchState,
        ratings: &impl RatingService,
    ) -> Result<Self, CollaboratorError> {
        if !state.is_over() {
            return Err(CollaboratorError::Rating(format!(
                "match is still in the {} phase",
                state.phase
            )));
        }
        Ok(Self {
            places: state.places.clone(),
            rows: score_table(&state.players),
            winners: state.winners.clone(),
            ratings: ratings.rate(&state.places)?,
        })
    }
}
