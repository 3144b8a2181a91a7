//! Reachability per card type.
//!
//! [`legal_destinations`] is the single entry point: it evaluates each
//! direction independently and returns the deduplicated union. A move is
//! legal exactly when its destination is in that set.
//!
//! Every cell a path touches must satisfy [`Board::can_occupy`], except the
//! sword's target, which holds the thief being bumped.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{AreaId, Board, Direction};
use crate::cards::CardType;
use crate::core::error::ValidationError;
use crate::core::player::PlayerId;

/// Legal destination set. Rarely more than a handful of areas.
pub type Destinations = SmallVec<[AreaId; 8]>;

/// Path length of a camel move.
const CAMEL_STEPS: usize = 3;

/// Movement rule a played card resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRule {
    Lamp,
    Camel,
    Sword,
    Carpet,
    Turban,
    Coins,
}

impl MoveRule {
    /// Rule of a card type, `None` for jewels and guard.
    #[must_use]
    pub const fn for_card(card_type: CardType) -> Option<Self> {
        match card_type {
            CardType::Lamp | CardType::StartLamp => Some(MoveRule::Lamp),
            CardType::Camel | CardType::StartCamel => Some(MoveRule::Camel),
            CardType::Sword => Some(MoveRule::Sword),
            CardType::Carpet => Some(MoveRule::Carpet),
            CardType::Coins => Some(MoveRule::Coins),
            CardType::Turban => Some(MoveRule::Turban),
            CardType::Jewels | CardType::Guard => None,
        }
    }
}

/// The card played this cycle, resolved once at play time.
///
/// A jewels card records the type it mimics; every other card plays as
/// itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    /// Physical card taken from the hand.
    pub card: CardType,
    /// Type a jewels card imitates.
    pub mimic: Option<CardType>,
}

impl PlayedCard {
    /// Resolve `card` against the last card type played in the match.
    ///
    /// Guards never resolve. Jewels resolve to `last_played` and are
    /// rejected before any card has been played.
    pub fn resolve(card: CardType, last_played: Option<CardType>) -> Result<Self, ValidationError> {
        match card {
            CardType::Guard => Err(ValidationError::NotPlayable(card)),
            CardType::Jewels => match last_played {
                Some(target) if MoveRule::for_card(target).is_some() => Ok(Self {
                    card,
                    mimic: Some(target),
                }),
                _ => Err(ValidationError::NotPlayable(card)),
            },
            _ => Ok(Self { card, mimic: None }),
        }
    }

    /// Type whose rule applies.
    #[must_use]
    pub fn effective(&self) -> CardType {
        self.mimic.unwrap_or(self.card)
    }

    /// Resolved rule. Always `Some` for a value built by [`PlayedCard::resolve`].
    #[must_use]
    pub fn rule(&self) -> Option<MoveRule> {
        MoveRule::for_card(self.effective())
    }

    /// True when this play grants an extra draw.
    #[must_use]
    pub fn grants_extra_draw(&self) -> bool {
        self.effective() == CardType::Coins
    }
}

fn push_unique(out: &mut Destinations, id: AreaId) {
    if !out.contains(&id) {
        out.push(id);
    }
}

/// All legal destinations for `mover`'s thief on `from`.
///
/// `step` is only read by the turban: 0 for the first move, 1 for the
/// second (from the intermediate area).
#[must_use]
pub fn legal_destinations(
    board: &Board,
    mover: PlayerId,
    from: AreaId,
    rule: MoveRule,
    step: u8,
) -> Destinations {
    let mut out = Destinations::new();

    match rule {
        MoveRule::Lamp => {
            for dir in Direction::ALL {
                if let Some(dest) = lamp_reach(board, from, dir) {
                    push_unique(&mut out, dest);
                }
            }
        }
        MoveRule::Camel => {
            let mut path = SmallVec::<[AreaId; 4]>::new();
            path.push(from);
            camel_paths(board, &mut path, &mut out);
        }
        MoveRule::Sword => {
            for dir in Direction::ALL {
                if let Some(dest) = sword_target(board, mover, from, dir) {
                    push_unique(&mut out, dest);
                }
            }
        }
        MoveRule::Carpet => {
            for dir in Direction::ALL {
                if let Some(dest) = carpet_landing(board, from, dir) {
                    push_unique(&mut out, dest);
                }
            }
        }
        MoveRule::Turban if step == 0 => {
            for dir in Direction::ALL {
                let Some(next) = board.step(from, dir).filter(|&n| board.can_occupy(n)) else {
                    continue;
                };
                let continues = Direction::ALL
                    .into_iter()
                    .filter(|&d| d != dir.reverse())
                    .filter_map(|d| board.step(next, d))
                    .any(|beyond| board.can_occupy(beyond));
                if continues {
                    push_unique(&mut out, next);
                }
            }
        }
        MoveRule::Turban | MoveRule::Coins => {
            for dir in Direction::ALL {
                if let Some(next) = board.step(from, dir).filter(|&n| board.can_occupy(n)) {
                    push_unique(&mut out, next);
                }
            }
        }
    }

    out
}

/// Farthest occupy-able area in a straight line, if at least one step works.
fn lamp_reach(board: &Board, from: AreaId, dir: Direction) -> Option<AreaId> {
    let mut reached = None;
    let mut cur = from;
    while let Some(next) = board.step(cur, dir).filter(|&n| board.can_occupy(n)) {
        reached = Some(next);
        cur = next;
    }
    reached
}

/// Depth-first walk over non-revisiting paths of exactly three steps.
fn camel_paths(board: &Board, path: &mut SmallVec<[AreaId; 4]>, out: &mut Destinations) {
    let Some(&last) = path.last() else {
        return;
    };
    if path.len() == CAMEL_STEPS + 1 {
        push_unique(out, last);
        return;
    }

    for dir in Direction::ALL {
        let Some(next) = board.step(last, dir) else {
            continue;
        };
        if path.contains(&next) || !board.can_occupy(next) {
            continue;
        }
        path.push(next);
        camel_paths(board, path, out);
        path.pop();
    }
}

/// Opponent area the sword can strike in one direction.
///
/// The walk advances onto an area only while two more areas lie beyond it,
/// so that a target and a bump area always exist.
fn sword_target(board: &Board, mover: PlayerId, from: AreaId, dir: Direction) -> Option<AreaId> {
    let mut cur = from;
    while let Some(next) = board.step(cur, dir) {
        let room = board
            .step(next, dir)
            .and_then(|beyond| board.step(beyond, dir))
            .is_some();
        if room && board.can_occupy(next) {
            cur = next;
        } else {
            break;
        }
    }

    let target = board.step(cur, dir)?;
    let bump = board.step(target, dir)?;
    let victim = board.thief_at(target)?;
    (victim != mover && board.can_occupy(bump)).then_some(target)
}

/// First carded area after one or more cardless ones.
fn carpet_landing(board: &Board, from: AreaId, dir: Direction) -> Option<AreaId> {
    let mut crossed_empty = false;
    let mut cur = from;
    while let Some(next) = board.step(cur, dir) {
        let area = board.get(next)?;
        if !area.has_card() {
            crossed_empty = true;
            cur = next;
            continue;
        }
        return (crossed_empty && area.can_occupy()).then_some(next);
    }
    None
}

/// Where a sword victim on `to` is pushed when struck from `from`.
#[must_use]
pub fn bump_target(board: &Board, from: AreaId, to: AreaId) -> Option<AreaId> {
    let dir = Direction::between(from, to)?;
    board.step(to, dir)
}
