//! Rules engine trait.
//!
//! `RulesEngine` is the seam callers drive a match through:
//! - Legal actions for each match state
//! - How actions modify state
//! - When the match is over
//!
//! [`crate::turn::GuildOfThieves`] is the implementation.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
