//! Action cycle scenarios on hand-built boards.

mod common;

use common::{at, init_logging, loose_engine, placed, Scenario, P0, P1};
use guild_of_thieves::cards::CardType;
use guild_of_thieves::core::{
    Action, EngineError, EntryKind, Intent, MatchConfig, Notification, Phase, ValidationError,
};
use guild_of_thieves::rules::RulesEngine;
use guild_of_thieves::turn::GuildOfThieves;

#[test]
fn test_sword_bumps_and_rescores() {
    init_logging();
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .card(at(0, 0), CardType::Coins)
        .card(at(0, 2), CardType::Camel)
        .card(at(0, 3), CardType::Sword)
        .thief(at(0, 0), P0)
        .thief(at(0, 2), P1)
        .hand(P0, &[CardType::Sword])
        .build();

    game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap();
    game.apply(&mut state, P0, &Action::SelectThief(at(0, 0))).unwrap();
    assert_eq!(game.legal_actions(&state, P0)[0], Action::MoveThief(at(0, 2)));

    let outcome = game.apply(&mut state, P0, &Action::MoveThief(at(0, 2))).unwrap();

    assert_eq!(outcome.intent, Intent::Save);
    assert_eq!(state.board.thief_at(at(0, 2)), Some(P0));
    assert_eq!(state.board.thief_at(at(0, 3)), Some(P1));
    assert!(state.board.get(at(0, 0)).unwrap().card.is_none());
    // Mover scores the camel it landed on; the victim trades it for the sword
    assert_eq!(state.players[P0].score, 4);
    assert_eq!(state.players[P1].score, 1);
    assert!(state.history.iter().any(|e| matches!(
        e.kind,
        EntryKind::MoveThief {
            bumped: Some((victim, to)),
            ..
        } if victim == P1 && to == at(0, 3)
    )));
    assert_eq!(state.current_player, P1);
}

#[test]
fn test_turban_claims_twice() {
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .thief(at(2, 2), P0)
        .thief(at(5, 7), P1)
        .hand(P0, &[CardType::Turban])
        .build();

    game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap();
    game.apply(&mut state, P0, &Action::SelectThief(at(2, 2))).unwrap();

    let first = game.apply(&mut state, P0, &Action::MoveThief(at(2, 3))).unwrap();
    assert_eq!(first.intent, Intent::Cache);
    assert_eq!(state.phase, Phase::MoveThief);
    assert_eq!(state.selection.step, 1);
    assert_eq!(state.selection.thief_area, Some(at(2, 3)));
    // No passing or switching thieves halfway
    let actions = game.legal_actions(&state, P0);
    assert!(!actions.contains(&Action::Pass));
    assert!(!actions.contains(&Action::MoveThief(at(2, 2))));

    let second = game.apply(&mut state, P0, &Action::MoveThief(at(2, 4))).unwrap();
    assert_eq!(second.intent, Intent::Save);
    assert!(state.board.get(at(2, 2)).unwrap().card.is_none());
    assert!(state.board.get(at(2, 3)).unwrap().card.is_none());
    assert_eq!(state.board.thief_at(at(2, 4)), Some(P0));
    assert_eq!(state.players[P0].score, 2);

    let claims = state
        .history
        .iter()
        .filter(|e| matches!(e.kind, EntryKind::Claim { player, .. } if player == P0))
        .count();
    assert_eq!(claims, 2);
    // Turban and both lamps went to the discard; one card drawn back
    assert_eq!(state.players[P0].card_count(), 3);
    assert_eq!(state.players[P0].hand.len(), 1);
}

#[test]
fn test_jewels_mimic_coins_and_draw_twice() {
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .thief(at(0, 0), P0)
        .thief(at(4, 4), P1)
        .hand(P0, &[CardType::Coins])
        .hand(P1, &[CardType::Jewels])
        .build();

    game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap();
    game.apply(&mut state, P0, &Action::SelectThief(at(0, 0))).unwrap();
    game.apply(&mut state, P0, &Action::MoveThief(at(0, 1))).unwrap();
    assert_eq!(state.last_played, Some(CardType::Coins));
    assert_eq!(state.players[P0].hand.len(), 2);

    game.apply(&mut state, P1, &Action::PlayCard(0)).unwrap();
    let played = state.selection.played.unwrap();
    assert_eq!(played.card, CardType::Jewels);
    assert_eq!(played.mimic, Some(CardType::Coins));

    game.apply(&mut state, P1, &Action::SelectThief(at(4, 4))).unwrap();
    let mut moves = game.legal_actions(&state, P1);
    moves.retain(|a| matches!(a, Action::MoveThief(_)));
    assert_eq!(moves.len(), 4);

    game.apply(&mut state, P1, &Action::MoveThief(at(4, 5))).unwrap();
    assert_eq!(state.players[P1].hand.len(), 2);
    assert_eq!(state.last_played, Some(CardType::Coins));
    assert_eq!(state.turn, 3);
}

#[test]
fn test_first_turn_claim_goes_to_hand() {
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .turn(1)
        .card(at(3, 3), CardType::Sword)
        .thief(at(3, 3), P0)
        .thief(at(0, 0), P1)
        .hand(P0, &[CardType::StartLamp])
        .build();

    game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap();
    game.apply(&mut state, P0, &Action::SelectThief(at(3, 3))).unwrap();
    game.apply(&mut state, P0, &Action::MoveThief(at(3, 7))).unwrap();

    let player = &state.players[P0];
    assert_eq!(player.hand.len(), 1);
    assert_eq!(player.hand.get(0).unwrap().card_type, CardType::Sword);
    assert!(player.hand.get(0).unwrap().face_up);
    assert_eq!(player.discard_pile.len(), 1);
    assert!(player.draw_pile.is_empty());
    assert!(!state
        .history
        .iter()
        .any(|e| matches!(e.kind, EntryKind::Draw { .. })));
}

#[test]
fn test_guard_is_never_playable() {
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .thief(at(0, 0), P0)
        .thief(at(1, 1), P1)
        .hand(P0, &[CardType::Guard])
        .last_played(CardType::Lamp)
        .build();

    let err = game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap_err();

    assert_eq!(
        err,
        EngineError::Validation(ValidationError::NotPlayable(CardType::Guard))
    );
    assert_eq!(game.legal_actions(&state, P0), vec![Action::Pass]);
    assert_eq!(state.players[P0].hand.len(), 1);
}

#[test]
fn test_carpet_needs_a_gap() {
    let game = loose_engine();
    let mut state = Scenario::new(2)
        .no_card(at(0, 1))
        .no_card(at(0, 2))
        .thief(at(0, 0), P0)
        .thief(at(5, 5), P1)
        .hand(P0, &[CardType::Carpet])
        .build();

    game.apply(&mut state, P0, &Action::PlayCard(0)).unwrap();
    game.apply(&mut state, P0, &Action::SelectThief(at(0, 0))).unwrap();

    let moves: Vec<_> = game
        .legal_actions(&state, P0)
        .into_iter()
        .filter(|a| matches!(a, Action::MoveThief(_)))
        .collect();
    assert_eq!(moves, vec![Action::MoveThief(at(0, 3))]);
}

#[test]
fn test_rejected_actions_leave_state_unchanged() {
    let game = GuildOfThieves::new();
    let mut state = placed(MatchConfig::new(3).with_seed(17));
    let snapshot = state.encode().unwrap();

    let cases = [
        (P1, Action::Pass),
        (P0, Action::PlaceThief(at(0, 0))),
        (P0, Action::PlayCard(9)),
        (P0, Action::MoveThief(at(1, 1))),
        (P0, Action::SelectThief(at(0, 0))),
    ];
    for (player, action) in &cases {
        let err = game.apply(&mut state, *player, action).unwrap_err();
        assert!(err.is_validation(), "{action:?} gave {err}");
        assert_eq!(state.encode().unwrap(), snapshot, "{action:?} changed the state");
    }
}

#[test]
fn test_everyone_passing_ends_the_match() {
    init_logging();
    let game = GuildOfThieves::new();
    let mut state = placed(MatchConfig::new(3).with_seed(5));

    let first = game.apply(&mut state, P0, &Action::Pass).unwrap();
    assert_eq!(
        first.notifications.as_slice(),
        &[Notification::CurrentPlayerChanged(P1)]
    );
    game.apply(&mut state, P1, &Action::Pass).unwrap();
    let cp = state.current_player;
    let last = game.apply(&mut state, cp, &Action::Pass).unwrap();

    assert_eq!(state.phase, Phase::GameOver);
    assert!(matches!(
        last.notifications.as_slice(),
        [Notification::GameEnded(players)] if players.len() == 3
    ));
    assert!(game.is_terminal(&state).is_some());
    assert!(state.check_invariants().is_ok());

    let phases: Vec<Phase> = state.history.iter().map(|e| e.phase).collect();
    assert!(phases.contains(&Phase::EndGame));
    assert_eq!(phases.last(), Some(&Phase::AnnounceWinners));
}
