//! Scoring and ranking.
//!
//! - `running`: score changes for landings and sword strikes
//! - `ranking`: the end-of-game comparator, place groups and pairwise
//!   outcomes for rating services

pub mod ranking;
pub mod running;

pub use ranking::{
    compare_players, pairwise_outcomes, place_groups, score_table, MatchOutcome, PlaceGroup,
    RankKey, ScoreRow,
};
pub use running::{landing_score, sword_score, SwordScore};
