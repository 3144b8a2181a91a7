//! Destination sets on full-size boards.

mod common;

use common::{at, P0, P1};
use guild_of_thieves::board::{AreaId, Board};
use guild_of_thieves::cards::CardType;
use guild_of_thieves::movement::{bump_target, legal_destinations, MoveRule};

fn open_board() -> Board {
    Board::from_layout(7, 8, |_| Some(CardType::Coins))
}

fn sorted(rule: MoveRule, board: &Board, from: AreaId, step: u8) -> Vec<AreaId> {
    let mut dests = legal_destinations(board, P0, from, rule, step).into_vec();
    dests.sort();
    dests
}

#[test]
fn test_lamp_stops_before_thieves_and_gaps() {
    let mut board = open_board();
    board.area_mut(at(3, 6)).unwrap().thief = Some(P1);
    board.area_mut(at(0, 3)).unwrap().card = None;

    let dests = sorted(MoveRule::Lamp, &board, at(3, 3), 0);

    assert_eq!(dests, vec![at(1, 3), at(3, 0), at(3, 5), at(6, 3)]);
}

#[test]
fn test_camel_in_a_corner() {
    let board = open_board();

    // Non-revisiting three-step paths from a corner
    let dests = sorted(MoveRule::Camel, &board, at(0, 0), 0);

    assert_eq!(
        dests,
        vec![at(0, 1), at(0, 3), at(1, 0), at(1, 2), at(2, 1), at(3, 0)]
    );
}

#[test]
fn test_sword_needs_room_to_bump() {
    let mut board = open_board();
    board.area_mut(at(0, 0)).unwrap().thief = Some(P0);
    board.area_mut(at(0, 7)).unwrap().thief = Some(P1);
    board.area_mut(at(4, 0)).unwrap().thief = Some(P1);

    let dests = sorted(MoveRule::Sword, &board, at(0, 0), 0);

    // (0, 7) sits on the edge; (4, 0) can be pushed to (5, 0)
    assert_eq!(dests, vec![at(4, 0)]);
    assert_eq!(bump_target(&board, at(0, 0), at(4, 0)), Some(at(5, 0)));
}

#[test]
fn test_turban_second_step_from_intermediate_area() {
    let mut board = open_board();
    board.area_mut(at(2, 2)).unwrap().card = None;

    let dests = sorted(MoveRule::Turban, &board, at(2, 3), 1);

    assert_eq!(dests, vec![at(1, 3), at(2, 4), at(3, 3)]);
}
