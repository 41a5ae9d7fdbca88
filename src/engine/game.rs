//! Game state and rules.
//!
//! A [`Game`] owns the pruned dungeon deck, the four-slot room, the
//! equipped weapon with its kill history, and the player's health. Every
//! rule flows through the methods here; the terminal layer only renders
//! state and feeds validated slot choices in.
//!
//! ## Turn shape
//!
//! A turn starts by refilling every empty room slot from the dungeon.
//! While the dungeon still holds cards, whittling the room down to a
//! single live card rolls into the next turn, carrying that card over.
//! Once the dungeon is exhausted the current room is the final one: no
//! refill happens, and emptying the room wins the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::core::GameRng;
use crate::deck::Deck;

/// Number of card slots in a room.
pub const ROOM_SIZE: usize = 4;

/// Starting (and maximum) health.
pub const MAX_HEALTH: i32 = 20;

/// Terminal result of a finished game.
///
/// Death takes precedence: a player killed by the last monster of the
/// final room is dead, not victorious.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Health reached zero.
    Dead,
    /// The dungeon was cleared.
    Won,
}

/// A game of Scoundrel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    dungeon: Deck,
    room: [Option<Card>; ROOM_SIZE],
    weapon: Option<Card>,
    /// Monsters slain by the current weapon, oldest first. Non-empty only
    /// while a weapon is equipped; cleared whenever the weapon changes.
    weapon_kills: SmallVec<[Card; 8]>,
    health: i32,
    turn: u32,
    skipped_last_turn: bool,
    healed_this_turn: bool,
    alive: bool,
    won: bool,
    final_room: bool,
    graveyard: Vec<Card>,
}

impl Game {
    /// Start a new game: build the dungeon, prune it, shuffle it with the
    /// seeded RNG, and deal the first room.
    ///
    /// Pruning drops the red face cards and aces (hearts and diamonds
    /// above 10), leaving the 44-card Scoundrel dungeon.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut dungeon = Deck::standard(true);
        dungeon.retain(|card| !(card.suit.is_red() && card.value > 10));
        dungeon.shuffle(&mut rng);

        let mut game = Self {
            dungeon,
            room: [None; ROOM_SIZE],
            weapon: None,
            weapon_kills: SmallVec::new(),
            health: MAX_HEALTH,
            turn: 0,
            skipped_last_turn: false,
            healed_this_turn: false,
            alive: true,
            won: false,
            final_room: false,
            graveyard: Vec::new(),
        };
        game.start_turn(false);
        game
    }

    // === Accessors ===

    /// Current health, always within `[0, MAX_HEALTH]`.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The room's four slots; empty slots are `None`.
    #[must_use]
    pub fn room(&self) -> &[Option<Card>; ROOM_SIZE] {
        &self.room
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn weapon(&self) -> Option<Card> {
        self.weapon
    }

    /// Monsters slain by the current weapon, oldest first.
    #[must_use]
    pub fn weapon_kills(&self) -> &[Card] {
        &self.weapon_kills
    }

    /// The most recent monster slain with the current weapon.
    #[must_use]
    pub fn last_kill(&self) -> Option<Card> {
        self.weapon_kills.last().copied()
    }

    /// The dungeon deck.
    #[must_use]
    pub fn dungeon(&self) -> &Deck {
        &self.dungeon
    }

    /// Cards consumed and discarded so far.
    #[must_use]
    pub fn graveyard(&self) -> &[Card] {
        &self.graveyard
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Whether the dungeon is exhausted and the current room is the last.
    #[must_use]
    pub fn in_final_room(&self) -> bool {
        self.final_room
    }

    /// Count of non-empty room slots.
    #[must_use]
    pub fn live_cards(&self) -> usize {
        self.room.iter().filter(|slot| slot.is_some()).count()
    }

    /// Terminal state, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.alive {
            Some(GameOutcome::Dead)
        } else if self.won {
            Some(GameOutcome::Won)
        } else {
            None
        }
    }

    // === Turn flow ===

    /// Begin a turn: bump the counter, reset the per-turn heal, and refill
    /// every empty room slot from the dungeon.
    ///
    /// Drawing from an exhausted dungeon yields no card and leaves the
    /// slot empty; that is how the final room comes to hold fewer than
    /// four cards.
    pub fn start_turn(&mut self, skipped_last: bool) {
        self.turn += 1;
        self.skipped_last_turn = skipped_last;
        self.healed_this_turn = false;
        for slot in &mut self.room {
            if slot.is_none() {
                *slot = self.dungeon.draw(1)[0];
            }
        }
        log::debug!(
            "turn {} begins: {} live cards, {} left in the dungeon",
            self.turn,
            self.live_cards(),
            self.dungeon.len()
        );
    }

    /// Skip the current room.
    ///
    /// Allowed only when the room is still full and the previous room was
    /// not itself avoided. On success the room's cards are buried at the
    /// bottom of the dungeon in slot order and a fresh room is dealt;
    /// returns whether the avoid happened. A rejected avoid leaves the
    /// state untouched - it is a normal refused action, not an error.
    pub fn avoid(&mut self) -> bool {
        if self.skipped_last_turn || self.live_cards() < ROOM_SIZE {
            return false;
        }
        let cards: Vec<Card> = self.room.iter().filter_map(|slot| *slot).collect();
        self.dungeon.bury(&cards);
        self.room = [None; ROOM_SIZE];
        self.start_turn(true);
        true
    }

    /// Interact with the room card at `slot` (0-based).
    ///
    /// Consumes the card, then advances the turn state: outside the final
    /// room, a single remaining live card triggers the next turn's refill;
    /// in the final room, an empty room wins the game.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty or out of range - callers validate
    /// against [`Game::room`] first.
    pub fn interact(&mut self, slot: usize, bare_if_fight: bool) {
        let card = self.room[slot]
            .take()
            .expect("interact with an empty room slot");
        self.consume_card(card, bare_if_fight);

        if self.dungeon.is_empty() {
            self.final_room = true;
        }
        if !self.final_room {
            if self.live_cards() == 1 {
                self.start_turn(false);
            }
        } else if self.live_cards() == 0 {
            self.win();
        }
    }

    // === Card resolution ===

    /// Resolve a consumed card by suit: hearts heal, diamonds equip, clubs
    /// and spades fight.
    ///
    /// Only one potion works per turn; further hearts are inert but still
    /// discarded.
    pub fn consume_card(&mut self, card: Card, bare_if_fight: bool) {
        match card.kind() {
            CardKind::Potion => {
                if self.healed_this_turn {
                    log::debug!("potion {:?} wasted, already healed this turn", card);
                } else {
                    self.modify_health(i32::from(card.value));
                    self.healed_this_turn = true;
                }
                self.graveyard.push(card);
            }
            CardKind::Weapon => self.equip(card),
            CardKind::Monster => self.fight(card, bare_if_fight),
        }
    }

    /// Equip a weapon, retiring the old one.
    ///
    /// The monsters slain by the outgoing weapon and then the weapon
    /// itself move to the graveyard; the kill history starts empty for the
    /// new weapon.
    pub fn equip(&mut self, card: Card) {
        self.graveyard.extend(self.weapon_kills.drain(..));
        if let Some(old) = self.weapon.take() {
            self.graveyard.push(old);
        }
        self.weapon = Some(card);
    }

    /// Fight a monster, optionally barehanded.
    ///
    /// An equipped weapon blocks damage up to its value, but once it has
    /// slain a monster it can only be raised against strictly weaker ones.
    /// Against anything at or above its latest kill the weapon is refused
    /// and the full monster value lands. Slain monsters stack on the
    /// weapon's kill history; monsters that dealt their full damage go
    /// straight to the graveyard.
    pub fn fight(&mut self, card: Card, bare: bool) {
        let damage = i32::from(card.value);
        // A fresh weapon slays anything; a blooded one refuses monsters at
        // or above its latest kill.
        let weapon_refused = match self.weapon_kills.last() {
            Some(last) => card.value >= last.value,
            None => false,
        };

        if bare || weapon_refused {
            self.modify_health(-damage);
            self.graveyard.push(card);
        } else {
            let block = self.weapon.map_or(0, |weapon| i32::from(weapon.value));
            self.modify_health((block - damage).min(0));
            if self.weapon.is_some() {
                self.weapon_kills.push(card);
            } else {
                self.graveyard.push(card);
            }
        }
    }

    /// Apply a health delta, clamped to `[0, MAX_HEALTH]`. Reaching zero
    /// is death; nothing else changes on a health update.
    pub fn modify_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, MAX_HEALTH);
        if self.health == 0 {
            self.alive = false;
            log::debug!("the scoundrel dies on turn {}", self.turn);
        }
    }

    fn win(&mut self) {
        self.won = true;
    }
}
