//! Terminal front end: the session loop.
//!
//! Reads one command line per turn, validates it against live game state,
//! and hands slot choices to the engine. Rule decisions all happen on the
//! other side of that boundary.

use std::io::{self, BufRead, Write};

use scoundrel::cards::NameTables;
use scoundrel::cli::{self, Command};
use scoundrel::engine::{Game, GameOutcome, ROOM_SIZE};

fn main() -> io::Result<()> {
    let tables = NameTables::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    cli::print_help(&mut out)?;
    loop {
        writeln!(out)?;
        let seed: u64 = rand::random();
        match play_session(&mut input, &mut out, &tables, seed)? {
            Some(GameOutcome::Dead) => writeln!(out, "{}", cli::death_line())?,
            Some(GameOutcome::Won) => writeln!(out, "{}", cli::victory_line())?,
            // The player quit mid-game; no replay prompt.
            None => break,
        }
        if !ask_replay(&mut input, &mut out)? {
            break;
        }
    }
    Ok(())
}

/// Play one game to its end. Returns `None` if the player quit (or stdin
/// closed) before the game finished.
fn play_session(
    input: &mut impl BufRead,
    out: &mut impl Write,
    tables: &NameTables,
    seed: u64,
) -> io::Result<Option<GameOutcome>> {
    let mut game = Game::new(seed);

    while game.outcome().is_none() {
        cli::draw_game(out, tables, &game)?;
        write!(out, "Command: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match Command::parse(&line) {
            Some(Command::Interact { slot, bare }) => {
                if slot > ROOM_SIZE as i64 {
                    cli::notify(out, &format!("{slot} is too large."))?;
                } else if slot < 1 {
                    cli::notify(out, &format!("{slot} is too small."))?;
                } else {
                    let index = (slot - 1) as usize;
                    if game.room()[index].is_none() {
                        cli::notify(out, "There is no card there.")?;
                    } else {
                        game.interact(index, bare);
                    }
                }
            }
            Some(Command::Avoid) => {
                if !game.avoid() {
                    cli::notify(out, cli::avoid_rejected_line())?;
                }
            }
            Some(Command::Help) => cli::print_help(out)?,
            Some(Command::Quit) => return Ok(None),
            None => cli::notify(out, "Not a recognized command.")?,
        }
    }

    Ok(game.outcome())
}

/// Ask whether to play another game, re-asking until the answer parses.
fn ask_replay(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    loop {
        write!(out, "Play again? [Y/n]: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Not a recognized answer.")?,
        }
    }
}
