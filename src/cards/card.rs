//! Card types and cards.
//!
//! Eight types make up the deck. The two start variants only ever appear
//! in starting hands; they move like a lamp or a camel but score nothing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardType {
    Lamp,
    Camel,
    Sword,
    Carpet,
    Coins,
    Turban,
    Jewels,
    Guard,
    StartCamel,
    StartLamp,
}

impl CardType {
    /// The eight types that make up the deck, in deck order.
    pub const DECK_TYPES: [CardType; 8] = [
        CardType::Lamp,
        CardType::Camel,
        CardType::Sword,
        CardType::Carpet,
        CardType::Coins,
        CardType::Turban,
        CardType::Jewels,
        CardType::Guard,
    ];

    /// Every card type.
    pub const ALL: [CardType; 10] = [
        CardType::Lamp,
        CardType::Camel,
        CardType::Sword,
        CardType::Carpet,
        CardType::Coins,
        CardType::Turban,
        CardType::Jewels,
        CardType::Guard,
        CardType::StartCamel,
        CardType::StartLamp,
    ];

    /// Points scored when a thief lands on a card of this type.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            CardType::Guard => -1,
            CardType::Lamp => 1,
            CardType::Turban | CardType::Jewels => 2,
            CardType::Carpet | CardType::Coins => 3,
            CardType::Camel => 4,
            CardType::Sword => 5,
            CardType::StartCamel | CardType::StartLamp => 0,
        }
    }

    /// Display name. Start variants share the name of their base type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardType::Lamp | CardType::StartLamp => "Lamp",
            CardType::Camel | CardType::StartCamel => "Camel",
            CardType::Sword => "Sword",
            CardType::Carpet => "Carpet",
            CardType::Coins => "Coins",
            CardType::Turban => "Turban",
            CardType::Jewels => "Jewels",
            CardType::Guard => "Guard",
        }
    }

    /// Stable lowercase identifier, distinct for the start variants.
    #[must_use]
    pub const fn id_string(self) -> &'static str {
        match self {
            CardType::Lamp => "lamp",
            CardType::Camel => "camel",
            CardType::Sword => "sword",
            CardType::Carpet => "carpet",
            CardType::Coins => "coins",
            CardType::Turban => "turban",
            CardType::Jewels => "jewels",
            CardType::Guard => "guard",
            CardType::StartCamel => "start-camel",
            CardType::StartLamp => "start-lamp",
        }
    }

    /// Rules text shown to players.
    ///
    /// The coins text promises a permanent hand size increase; the engine
    /// only grants the single extra draw.
    #[must_use]
    pub const fn tool_tip(self) -> &'static str {
        match self {
            CardType::Lamp | CardType::StartLamp => {
                "Move in a straight line until coming to the edge of the grid, an empty space, or another Thief."
            }
            CardType::Camel | CardType::StartCamel => {
                "Move exactly 3 spaces in any direction. The spaces do not have to be in a straight line, but you cannot move over the same space twice."
            }
            CardType::Sword => {
                "Move in a straight line until you come to another player's thief. Bump that thief to the next card and place your thief on the vacated card."
            }
            CardType::Carpet => {
                "Move in a straight line over at least one empty space. Stop moving your thief on the first card after the empty space(s)."
            }
            CardType::Coins => {
                "Move one space and then draw an additional card during the draw step. Your hand size is permanently increased by 1."
            }
            CardType::Turban => {
                "Move two spaces. Claim the first Magic Item you pass over in addition to the card you claim in the Claim Magic Item step."
            }
            CardType::Jewels => "Move as if you played the card that was last played by an opponent.",
            CardType::Guard => "This card cannot be played and does nothing for you in your hand.",
        }
    }

    /// Lamp or start lamp.
    #[must_use]
    pub const fn is_lamp(self) -> bool {
        matches!(self, CardType::Lamp | CardType::StartLamp)
    }

    /// Camel or start camel.
    #[must_use]
    pub const fn is_camel(self) -> bool {
        matches!(self, CardType::Camel | CardType::StartCamel)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unknown card identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown card type {0:?}")]
pub struct UnknownCardType(pub String);

impl FromStr for CardType {
    type Err = UnknownCardType;

    /// Parse an [`CardType::id_string`], ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        CardType::ALL
            .into_iter()
            .find(|t| t.id_string() == lower)
            .ok_or_else(|| UnknownCardType(s.to_string()))
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub card_type: CardType,
    pub face_up: bool,
}

impl Card {
    #[must_use]
    pub const fn face_up(card_type: CardType) -> Self {
        Self {
            card_type,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn face_down(card_type: CardType) -> Self {
        Self {
            card_type,
            face_up: false,
        }
    }

    /// Point value of the card's type.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.card_type.value()
    }
}
