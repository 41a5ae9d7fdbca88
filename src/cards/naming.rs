//! Card display labels from explicit lookup tables.
//!
//! The tables are built once at startup and passed by reference into the
//! rendering layer. The engine never consults them - naming is strictly a
//! presentation concern.

use rustc_hash::FxHashMap;

use super::card::{Card, Suit};

/// Lookup tables mapping ranks and suits to short display labels.
pub struct NameTables {
    ranks: FxHashMap<u8, &'static str>,
    suits: FxHashMap<Suit, &'static str>,
}

impl Default for NameTables {
    fn default() -> Self {
        let mut ranks = FxHashMap::default();
        // Both 1 and 14 read as an ace.
        ranks.insert(1, "A");
        ranks.insert(14, "A");
        ranks.insert(11, "J");
        ranks.insert(12, "Q");
        ranks.insert(13, "K");

        let mut suits = FxHashMap::default();
        suits.insert(Suit::Hearts, "H");
        suits.insert(Suit::Clubs, "C");
        suits.insert(Suit::Diamonds, "D");
        suits.insert(Suit::Spades, "S");

        Self { ranks, suits }
    }
}

/// Short display label for a card: rank then suit letter, e.g. `8H` or `AS`.
///
/// Ranks missing from the table fall back to their numeral.
#[must_use]
pub fn card_name(tables: &NameTables, card: Card) -> String {
    let mut name = match tables.ranks.get(&card.value) {
        Some(rank) => (*rank).to_string(),
        None => card.value.to_string(),
    };
    if let Some(suit) = tables.suits.get(&card.suit) {
        name.push_str(suit);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_ranks_use_numerals() {
        let tables = NameTables::default();
        assert_eq!(card_name(&tables, Card::new(8, Suit::Hearts)), "8H");
        assert_eq!(card_name(&tables, Card::new(10, Suit::Diamonds)), "10D");
    }

    #[test]
    fn test_face_ranks_use_letters() {
        let tables = NameTables::default();
        assert_eq!(card_name(&tables, Card::new(11, Suit::Clubs)), "JC");
        assert_eq!(card_name(&tables, Card::new(12, Suit::Spades)), "QS");
        assert_eq!(card_name(&tables, Card::new(13, Suit::Clubs)), "KC");
    }

    #[test]
    fn test_aces_are_high_or_low() {
        let tables = NameTables::default();
        assert_eq!(card_name(&tables, Card::new(14, Suit::Spades)), "AS");
        assert_eq!(card_name(&tables, Card::new(1, Suit::Spades)), "AS");
    }
}
