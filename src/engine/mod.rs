//! The Scoundrel state machine.

pub mod game;

pub use game::{Game, GameOutcome, MAX_HEALTH, ROOM_SIZE};
