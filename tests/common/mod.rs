//! Shared helpers for the integration tests.
#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use guild_of_thieves::board::{AreaId, Board};
use guild_of_thieves::cards::{Card, CardType};
use guild_of_thieves::core::{MatchConfig, MatchState, Phase, PlayerId};
use guild_of_thieves::rules::RulesEngine;
use guild_of_thieves::turn::{new_match, GuildOfThieves};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);

pub fn at(row: u8, column: u8) -> AreaId {
    AreaId::new(row, column)
}

/// Engine for hand-built states, whose boards don't hold a full deck.
pub fn loose_engine() -> GuildOfThieves {
    GuildOfThieves::new().with_invariant_checks(false)
}

/// Run placement with the first open area each time.
pub fn placed(config: MatchConfig) -> MatchState {
    let game = GuildOfThieves::new();
    let mut state = new_match(config).unwrap();
    while state.phase == Phase::PlaceThieves {
        let cp = state.current_player;
        let action = game.legal_actions(&state, cp)[0].clone();
        game.apply(&mut state, cp, &action).unwrap();
    }
    state
}

/// Hand-built mid-match state: every area holds a lamp, no thieves, empty
/// hands, zero scores, seat 0 to play on turn 2.
pub struct Scenario {
    state: MatchState,
}

impl Scenario {
    pub fn new(players: usize) -> Self {
        let mut state = new_match(MatchConfig::new(players).with_seed(3)).unwrap();
        state.board = Board::from_layout(state.config.rows(), 8, |_| Some(CardType::Lamp));
        state.phase = Phase::PlayCard;
        state.turn = 2;
        state.current_player = P0;
        let thieves = state.config.num_thieves();
        for player in state.players.values_mut() {
            player.hand = Default::default();
            player.score = 0;
            player.thieves_placed = thieves;
        }
        Self { state }
    }

    pub fn card(mut self, id: AreaId, card_type: CardType) -> Self {
        self.state.board.area_mut(id).unwrap().card = Some(Card::face_up(card_type));
        self
    }

    pub fn no_card(mut self, id: AreaId) -> Self {
        self.state.board.area_mut(id).unwrap().card = None;
        self
    }

    pub fn thief(mut self, id: AreaId, player: PlayerId) -> Self {
        self.state.board.area_mut(id).unwrap().thief = Some(player);
        self
    }

    pub fn hand(mut self, player: PlayerId, cards: &[CardType]) -> Self {
        self.state.players[player].hand = cards.iter().copied().map(Card::face_up).collect();
        self
    }

    pub fn turn(mut self, turn: u32) -> Self {
        self.state.turn = turn;
        self
    }

    pub fn last_played(mut self, card_type: CardType) -> Self {
        self.state.last_played = Some(card_type);
        self
    }

    pub fn build(self) -> MatchState {
        self.state
    }
}
