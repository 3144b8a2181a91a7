//! Binary snapshots of a match.

use super::CollaboratorError;
use crate::core::state::MatchState;

impl MatchState {
    /// Serialize the full state, RNG position included.
    pub fn encode(&self) -> Result<Vec<u8>, CollaboratorError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CollaboratorError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
