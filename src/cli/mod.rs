//! Terminal collaborators: command parsing and presentation.
//!
//! Nothing in here decides rules. Commands are parsed into plain data for
//! the session loop to validate against live game state, and rendering is
//! a pure function of that state.

pub mod command;
pub mod render;

pub use command::Command;
pub use render::{
    avoid_rejected_line, death_line, draw_game, notify, print_help, victory_line,
};
