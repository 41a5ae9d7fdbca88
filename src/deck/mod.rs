//! The dungeon deck: an ordered pile of cards.
//!
//! Top of the deck is the end of the backing vector, so draws pop from the
//! end, staged cards land on top, and buried cards go under everything
//! else.
//!
//! Duplicate checking is a construction-time safety net against engine
//! bugs, not a game rule: a deck that is handed a card it already contains
//! panics rather than continuing with a corrupted composition.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::GameRng;

/// An ordered, mutable pile of cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Card order; the top of the deck is the end.
    stack: Vec<Card>,
    check_duplicates: bool,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(check_duplicates: bool) -> Self {
        Self {
            stack: Vec::new(),
            check_duplicates,
        }
    }

    /// Create a full 52-card deck: values 2-14 in each suit.
    #[must_use]
    pub fn standard(check_duplicates: bool) -> Self {
        let mut stack = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for value in 2..=14 {
                stack.push(Card::new(value, suit));
            }
        }
        Self {
            stack,
            check_duplicates,
        }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The cards in order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.stack
    }

    /// Membership test by value and suit.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.stack.contains(&card)
    }

    /// Shuffle in place. Returns self for chaining.
    pub fn shuffle(&mut self, rng: &mut GameRng) -> &mut Self {
        rng.shuffle(&mut self.stack);
        self
    }

    /// Remove and return up to `n` cards from the top.
    ///
    /// Always returns exactly `n` entries; positions past the end of the
    /// deck come back as `None`, and callers treat an absent draw as "no
    /// card available".
    pub fn draw(&mut self, n: usize) -> Vec<Option<Card>> {
        (0..n).map(|_| self.stack.pop()).collect()
    }

    /// Move the top card to the bottom, `n` times.
    pub fn cycle(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if let Some(card) = self.stack.pop() {
                self.stack.insert(0, card);
            }
        }
        self
    }

    /// Place cards on top of the deck, drawable next. The last card of the
    /// slice becomes the new top.
    ///
    /// # Panics
    ///
    /// Panics if duplicate checking is enabled and any of the cards
    /// already exists in the deck.
    pub fn stage(&mut self, cards: &[Card]) {
        self.assert_no_duplicates(cards);
        self.stack.extend_from_slice(cards);
    }

    /// Slide cards under the deck, drawn last. The first card of the slice
    /// ends up at the very bottom.
    ///
    /// # Panics
    ///
    /// Same duplicate contract as [`Deck::stage`].
    pub fn bury(&mut self, cards: &[Card]) {
        self.assert_no_duplicates(cards);
        self.stack.splice(0..0, cards.iter().copied());
    }

    /// Keep only the cards the predicate accepts, preserving order.
    pub fn retain(&mut self, f: impl FnMut(&Card) -> bool) {
        self.stack.retain(f);
    }

    fn assert_no_duplicates(&self, cards: &[Card]) {
        if !self.check_duplicates {
            return;
        }
        if let Some(card) = cards.iter().find(|&&card| self.contains(card)) {
            panic!("deck was handed a duplicate card: {:?}", card);
        }
    }
}
