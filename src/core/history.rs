//! Match log.
//!
//! Entries are appended as actions resolve and never change afterwards.
//! Each renders a one-line plain-text message through `Display`.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::PlayerId;
use crate::board::AreaId;
use crate::cards::CardType;
use crate::scoring::ScoreRow;

/// One log line with the moment it was written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    pub round: u32,
    pub phase: Phase,
    pub kind: EntryKind,
}

impl LogEntry {
    /// Heading shown above the message, e.g. `Turn 2 | Phase: Move Thief`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Turn {} | Phase: {}", self.turn, self.phase)
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Setup {
        player: PlayerId,
    },
    StartGame {
        players: Vec<PlayerId>,
    },
    PlaceThief {
        player: PlayerId,
        card: CardType,
        area: AreaId,
    },
    PlayCard {
        player: PlayerId,
        card: CardType,
    },
    MoveThief {
        player: PlayerId,
        /// Card played, jewels included; not the mimicked type.
        card: CardType,
        from: (CardType, AreaId),
        to: (CardType, AreaId),
        /// Owner of the struck thief and where it was pushed.
        bumped: Option<(PlayerId, AreaId)>,
    },
    Claim {
        player: PlayerId,
        card: CardType,
        area: AreaId,
    },
    Draw {
        player: PlayerId,
        shuffled: bool,
    },
    Pass {
        player: PlayerId,
    },
    EndGame {
        rows: Vec<ScoreRow>,
    },
    AnnounceWinners {
        winners: Vec<PlayerId>,
    },
}

/// "A", "A and B", "A, B and C".
pub(crate) fn to_sentence(players: &[PlayerId]) -> String {
    let names: Vec<String> = players.iter().map(ToString::to_string).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Setup { player } => write!(f, "{player} received 2 lamps and 1 camel."),
            EntryKind::StartGame { players } => {
                write!(f, "Good luck {}. Have fun.", to_sentence(players))
            }
            EntryKind::PlaceThief { player, card, area } => {
                write!(f, "{player} placed thief on {card} at {area}.")
            }
            EntryKind::PlayCard { player, card } => write!(f, "{player} played {card} card."),
            EntryKind::MoveThief {
                player,
                from,
                to,
                bumped,
                ..
            } => {
                write!(
                    f,
                    "{player} moved thief from {} card at {} to {} card at {}",
                    from.0, from.1, to.0, to.1
                )?;
                if let Some((victim, area)) = bumped {
                    write!(f, " and bumped {victim}'s thief to card at {area}")?;
                }
                f.write_str(".")
            }
            EntryKind::Claim { player, card, area } => {
                write!(f, "{player} claimed {card} card at {area}.")
            }
            EntryKind::Draw { player, shuffled } => {
                if *shuffled {
                    write!(
                        f,
                        "{player} shuffled discard pile and drew card from newly formed draw pile."
                    )
                } else {
                    write!(f, "{player} drew card from draw pile.")
                }
            }
            EntryKind::Pass { player } => write!(f, "{player} passed."),
            EntryKind::EndGame { rows } => {
                let lines: Vec<String> = rows.iter().map(ToString::to_string).collect();
                write!(f, "Final scores: {}.", lines.join("; "))
            }
            EntryKind::AnnounceWinners { winners } => {
                write!(f, "Congratulations: {}.", to_sentence(winners))
            }
        }
    }
}
