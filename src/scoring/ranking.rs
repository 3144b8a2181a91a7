//! End-of-game ranking.
//!
//! Players are ordered, highest first, by score, then lamps in hand, then
//! camels in hand, then hand size. Start variants count as lamps and camels.
//! Players equal on all four keys share a place.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::player::{Player, PlayerId, PlayerMap};

/// The four ranking keys of a player, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RankKey {
    pub score: i32,
    pub lamps: usize,
    pub camels: usize,
    pub cards: usize,
}

impl RankKey {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            score: player.score,
            lamps: player.lamp_count(),
            camels: player.camel_count(),
            cards: player.hand.len(),
        }
    }
}

/// Order two players, the better one first.
#[must_use]
pub fn compare_players(a: &Player, b: &Player) -> Ordering {
    RankKey::of(b).cmp(&RankKey::of(a))
}

/// Players sharing one finishing place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceGroup {
    /// 1 for the winners.
    pub place: usize,
    /// Seat order within the group.
    pub players: Vec<PlayerId>,
}

/// Partition players into places.
///
/// The sort is stable, so tied players keep seat order.
#[must_use]
pub fn place_groups(players: &PlayerMap<Player>) -> Vec<PlaceGroup> {
    let mut ranked: Vec<(PlayerId, RankKey)> = players
        .iter()
        .map(|(id, p)| (id, RankKey::of(p)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut groups: Vec<PlaceGroup> = Vec::new();
    let mut last_key = None;
    for (id, key) in ranked {
        match groups.last_mut() {
            Some(group) if last_key == Some(key) => group.players.push(id),
            _ => groups.push(PlaceGroup {
                place: groups.len() + 1,
                players: vec![id],
            }),
        }
        last_key = Some(key);
    }
    groups
}

/// Result of one player against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    /// Rating weight: 1 for a win, 0.5 for a draw, 0 for a loss.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Draw => 0.5,
            MatchOutcome::Loss => 0.0,
        }
    }
}

/// `(player, opponent, outcome)` for every ordered pair of distinct players.
#[must_use]
pub fn pairwise_outcomes(groups: &[PlaceGroup]) -> Vec<(PlayerId, PlayerId, MatchOutcome)> {
    let placed: Vec<(PlayerId, usize)> = groups
        .iter()
        .flat_map(|g| g.players.iter().map(move |&p| (p, g.place)))
        .collect();

    let mut outcomes = Vec::with_capacity(placed.len() * placed.len().saturating_sub(1));
    for &(player, place) in &placed {
        for &(opponent, other) in &placed {
            if player == opponent {
                continue;
            }
            let outcome = match place.cmp(&other) {
                Ordering::Less => MatchOutcome::Win,
                Ordering::Greater => MatchOutcome::Loss,
                Ordering::Equal => MatchOutcome::Draw,
            };
            outcomes.push((player, opponent, outcome));
        }
    }
    outcomes
}

/// One row of the end-of-game table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub player: PlayerId,
    pub score: i32,
    pub lamps: usize,
    pub camels: usize,
    pub cards: usize,
}

impl ScoreRow {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        let key = RankKey::of(player);
        Self {
            player: player.id,
            score: key.score,
            lamps: key.lamps,
            camels: key.camels,
            cards: key.cards,
        }
    }
}

impl std::fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} scored {} with {} lamps, {} camels and {} cards",
            self.player, self.score, self.lamps, self.camels, self.cards
        )
    }
}

/// Table rows in seat order.
#[must_use]
pub fn score_table(players: &PlayerMap<Player>) -> Vec<ScoreRow> {
    players.values().map(ScoreRow::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardType};

    fn player(id: u8, score: i32, extra: &[CardType]) -> Player {
        let mut p = Player::new(PlayerId::new(id));
        p.score = score;
        for &t in extra {
            p.hand.push(Card::face_up(t));
        }
        p
    }

    #[test]
    fn test_compare_cascade() {
        let a = player(0, 10, &[]);
        let b = player(1, 10, &[CardType::Lamp]);
        let c = player(2, 10, &[CardType::Sword]);

        assert_eq!(compare_players(&b, &a), Ordering::Less);
        assert_eq!(compare_players(&a, &b), Ordering::Greater);
        // Same lamps and camels, more cards wins.
        assert_eq!(compare_players(&c, &a), Ordering::Less);
        assert_eq!(compare_players(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_place_groups_with_ties() {
        let players = PlayerMap::new(4, |id| match id.0 {
            0 => player(0, 7, &[]),
            1 => player(1, 12, &[]),
            2 => player(2, 7, &[]),
            _ => player(3, 3, &[]),
        });

        let groups = place_groups(&players);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].players, vec![PlayerId::new(1)]);
        assert_eq!(groups[1].place, 2);
        assert_eq!(groups[1].players, vec![PlayerId::new(0), PlayerId::new(2)]);
        assert_eq!(groups[2].place, 3);
    }

    #[test]
    fn test_pairwise_outcomes() {
        let groups = vec![
            PlaceGroup {
                place: 1,
                players: vec![PlayerId::new(0), PlayerId::new(1)],
            },
            PlaceGroup {
                place: 2,
                players: vec![PlayerId::new(2)],
            },
        ];

        let outcomes = pairwise_outcomes(&groups);
        assert_eq!(outcomes.len(), 6);
        assert!(outcomes.contains(&(PlayerId::new(0), PlayerId::new(1), MatchOutcome::Draw)));
        assert!(outcomes.contains(&(PlayerId::new(1), PlayerId::new(2), MatchOutcome::Win)));
        assert!(outcomes.contains(&(PlayerId::new(2), PlayerId::new(0), MatchOutcome::Loss)));
        assert_eq!(MatchOutcome::Draw.weight(), 0.5);
    }

    #[test]
    fn test_score_row() {
        let p = player(1, 9, &[CardType::Camel, CardType::Guard]);
        let row = ScoreRow::of(&p);

        assert_eq!(row.lamps, 2);
        assert_eq!(row.camels, 2);
        assert_eq!(row.cards, 5);
        assert_eq!(
            row.to_string(),
            "Player 1 scored 9 with 2 lamps, 2 camels and 5 cards"
        );
    }
}
