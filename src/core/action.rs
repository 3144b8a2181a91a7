//! Player actions and what applying them asks of the caller.
//!
//! An [`Action`] names the verb and its single argument. Applying one yields
//! an [`Outcome`]: the persistence [`Intent`] plus the notifications the
//! caller should emit. The engine never performs I/O itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::AreaId;

/// One player intent.
///
/// ```
/// use guild_of_thieves::board::AreaId;
/// use guild_of_thieves::core::Action;
///
/// let action = Action::PlaceThief(AreaId::new(0, 0));
/// assert_eq!(action.name(), "place a thief");
/// assert_eq!(action.area(), Some(AreaId::new(0, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    PlaceThief(AreaId),
    /// Play the card at this hand position.
    PlayCard(usize),
    SelectThief(AreaId),
    MoveThief(AreaId),
    Pass,
    Undo,
}

impl Action {
    /// Verb phrase used in validation messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::PlaceThief(_) => "place a thief",
            Action::PlayCard(_) => "play a card",
            Action::SelectThief(_) => "select a thief",
            Action::MoveThief(_) => "move a thief",
            Action::Pass => "pass",
            Action::Undo => "undo",
        }
    }

    /// Area argument, if the action takes one.
    #[must_use]
    pub const fn area(&self) -> Option<AreaId> {
        match self {
            Action::PlaceThief(id) | Action::SelectThief(id) | Action::MoveThief(id) => Some(*id),
            _ => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Position in the match's action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

/// What the caller should do with the state after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Nothing changed.
    None,
    /// Keep mid-cycle progress without committing it.
    Cache,
    /// Commit the state.
    Save,
    /// Drop uncommitted progress and reload the last saved state.
    Undo,
}

/// Message the caller should deliver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// It is now this player's turn.
    CurrentPlayerChanged(PlayerId),
    /// The match has ended; every seat is told.
    GameEnded(Vec<PlayerId>),
}

/// Result of a successfully applied action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub intent: Intent,
    pub notifications: SmallVec<[Notification; 2]>,
}

impl Outcome {
    #[must_use]
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            notifications: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }
}
