//! Cards: an immutable value/suit pair.
//!
//! Values run 2-14 with aces high. The suit carries the gameplay
//! semantics:
//! - Hearts are potions
//! - Diamonds are weapons
//! - Clubs and spades are monsters
//!
//! The mapping is closed: the physical deck fixes the four suits, so the
//! dispatch is a plain enum match rather than anything extensible.

use serde::{Deserialize, Serialize};

/// The four suits of a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    /// All four suits, in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    /// Gameplay role of cards in this suit.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Suit::Hearts => CardKind::Potion,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Clubs | Suit::Spades => CardKind::Monster,
        }
    }

    /// Hearts and diamonds are red; clubs and spades are black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// What interacting with a card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Hearts: heal by the card's value.
    Potion,
    /// Diamonds: equip, replacing the current weapon.
    Weapon,
    /// Clubs and spades: fight.
    Monster,
}

/// A playing card.
///
/// Cards compare by value and suit, not identity; two `Card { value: 5,
/// suit: Spades }` are the same card as far as the deck's duplicate check
/// is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// 2-14, aces high.
    pub value: u8,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Gameplay role, derived from the suit.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        self.suit.kind()
    }
}
