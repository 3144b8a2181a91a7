//! Outbound notifications.

use tracing::{debug, warn};

use super::{CollaboratorError, MatchId};
use crate::core::action::Notification;
use crate::core::player::PlayerId;

/// Delivers match events to players, e.g. by mail.
pub trait Notifier {
    fn current_player_changed(&self, id: MatchId, player: PlayerId)
        -> Result<(), CollaboratorError>;

    fn game_ended(&self, id: MatchId, players: &[PlayerId]) -> Result<(), CollaboratorError>;
}

/// Notifier that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn current_player_changed(&self, _: MatchId, _: PlayerId) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn game_ended(&self, _: MatchId, _: &[PlayerId]) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Send every notification. Failures are logged and dropped; the count of
/// delivered notifications is returned.
pub fn deliver<N: Notifier + ?Sized>(
    notifier: &N,
    id: MatchId,
    notifications: &[Notification],
) -> usize {
    let mut delivered = 0;
    for notification in notifications {
        let result = match notification {
            Notification::CurrentPlayerChanged(player) => {
                notifier.current_player_changed(id, *player)
            }
            Notification::GameEnded(players) => notifier.game_ended(id, players),
        };
        match result {
            Ok(()) => delivered += 1,
            Err(err) => warn!(%id, ?notification, error = %err, "notification dropped"),
        }
    }
    debug!(%id, delivered, total = notifications.len(), "notifications sent");
    delivered
}
