//! Terminal presentation: styled lines from game state.
//!
//! Everything here is a pure function of the game state plus the naming
//! tables; nothing feeds back into the engine. The board is drawn as a
//! narrow bordered panel:
//!
//! ```text
//! --- Room 3
//!  | 8H 5S 7C 6D [14]   |
//!  | D34  2D  [ ]       |
//! ```

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::cards::{card_name, Card, NameTables};
use crate::engine::Game;

/// Visible width of the bordered panel body.
const PANEL_WIDTH: usize = 20;

const DEATH_LINES: &[&str] = &[
    "A shame, really.",
    "Unfortunate.",
    "Unlucky.",
    "Nasty hit. Maybe your skull will fare better next time?",
    "Died too young.",
    "Not the best choice, was that?",
    "Dead men tell no tales.",
    "Not much left of you.",
];

const AVOID_REJECTED_LINES: &[&str] = &[
    "You can't run now.",
    "Can't leave yet.",
    "You're not finished here.",
];

/// Render the room header, the card row, and the status row.
pub fn draw_game(out: &mut impl Write, tables: &NameTables, game: &Game) -> io::Result<()> {
    writeln!(out, "--- Room {}", game.turn())?;

    // Card row: the four slots, then bracketed health.
    let mut row = String::new();
    let mut visible = 0;
    for slot in game.room() {
        if visible > 0 {
            row.push(' ');
            visible += 1;
        }
        match slot {
            Some(card) => {
                let label = format!("{:>3}", card_name(tables, *card));
                visible += label.len();
                row.push_str(&paint_by_suit(label, *card));
            }
            None => {
                row.push_str("[ ]");
                visible += 3;
            }
        }
    }
    let health = format!(" [{:02}]", game.health());
    visible += health.len();
    row.push_str(&health);
    panel_line(out, &row, visible)?;

    // Status row: dungeon count, weapon, latest kill.
    let mut status = format!("D{}  ", game.dungeon().len());
    let mut visible = status.len();
    match game.weapon() {
        Some(weapon) => {
            let label = format!("{:<3}", card_name(tables, weapon));
            visible += label.len();
            status.push_str(&label.blue().to_string());
        }
        None => {
            status.push_str("[ ]");
            visible += 3;
        }
    }
    status.push_str("  ");
    visible += 2;
    match game.last_kill() {
        Some(kill) => {
            let label = card_name(tables, kill);
            visible += label.len();
            status.push_str(&paint_by_suit(label, kill));
        }
        None => {
            status.push_str("[ ]");
            visible += 3;
        }
    }
    panel_line(out, &status, visible)
}

/// Yellow one-line notice for rejected input.
pub fn notify(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.yellow())
}

/// A random taunt for the death screen, painted red.
#[must_use]
pub fn death_line() -> String {
    use rand::seq::SliceRandom;
    let line = DEATH_LINES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEATH_LINES[0]);
    line.red().to_string()
}

/// A random rebuff for an illegal avoid.
#[must_use]
pub fn avoid_rejected_line() -> &'static str {
    use rand::seq::SliceRandom;
    AVOID_REJECTED_LINES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(AVOID_REJECTED_LINES[0])
}

/// The victory line.
#[must_use]
pub fn victory_line() -> String {
    format!(
        "The {} warms your face as you step out of the {}.",
        "sunlight".yellow(),
        "dungeon".red()
    )
}

/// The how-to-play text.
pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "--- Room 3")?;
    writeln!(out, " |  8H  5S  7C  6D [14] |")?;
    writeln!(out, " | D34  2D   [ ]        |")?;
    writeln!(out, "The first line is the current Room number.")?;
    writeln!(
        out,
        "The second shows each card in the Room (8H 5S 7C 6D), with the final\n\
         bracketed number being your health (14). It may never rise above 20."
    )?;
    writeln!(
        out,
        "The third holds three values:\n\
         \tD, the number of cards left in the Dungeon (34),\n\
         \ta card for your equipped weapon (2D),\n\
         \tand a card for the last Monster you killed with it (empty)."
    )?;
    writeln!(
        out,
        "Each turn, you must interact with one of the four cards in the Room.\n\
         To do so, type the number of that card, 1 -> 4.\n\
         When there is only one card left, you move on to the next Room."
    )?;
    writeln!(
        out,
        "If a Room seems impossible, or you wish to save it for later, you may\n\
         avoid it by typing \"avoid\", \"run\", or \"r\".\n\
         \tYou may avoid as many Rooms as you want, but never two in a row and\n\
         \tnever after interacting with a card.\n\
         \tThe Room's cards will be placed on the bottom of the Dungeon."
    )?;
    writeln!(out, "The results of interacting with a card are as follows:")?;
    writeln!(
        out,
        "If you chose to interact with a Potion (Heart):\n\
         \tYou gain health equal to the card's value, capped at 20.\n\
         \tOnly one Potion works per Room; consuming another does nothing."
    )?;
    writeln!(
        out,
        "If you chose to interact with a Weapon (Diamond):\n\
         \tIt replaces your previous weapon (if any).\n\
         \tAny Monsters killed by the previous weapon are removed."
    )?;
    writeln!(
        out,
        "If you chose to interact with a Monster (Spade or Club):\n\
         \tYou may fight with your weapon or barehanded. Typing \"b\" after your\n\
         \tnumber (\"3b\") fights barehanded.\n\
         \tBarehanded, the Monster's full value is subtracted from your health.\n\
         \tAces are high cards, worth 14.\n\
         \tWith a weapon, your health is only reduced by what the Monster has\n\
         \tover the weapon's value.\n\
         \tYou do not lose your weapon until you replace it; however, it can\n\
         \tonly be used to slay Monsters of lesser value than its previous\n\
         \tkill. Raise it against a stronger Monster and you take full damage."
    )?;
    writeln!(
        out,
        "To see this guide again, use the \"help\" or \"h\" commands.\n\
         To close the game, use the \"quit\" or \"q\" commands."
    )
}

/// Paint a label by its card's suit: red suits red, black suits grey.
fn paint_by_suit(label: String, card: Card) -> String {
    if card.suit.is_red() {
        label.red().to_string()
    } else {
        label.dark_grey().to_string()
    }
}

/// One bordered panel line, padded by visible length (styled text carries
/// escape codes the formatter must not count).
fn panel_line(out: &mut impl Write, content: &str, visible_len: usize) -> io::Result<()> {
    let pad = PANEL_WIDTH.saturating_sub(visible_len);
    writeln!(out, " | {}{} |", content, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_game_layout() {
        let tables = NameTables::default();
        let game = Game::new(42);

        let mut out = Vec::new();
        draw_game(&mut out, &tables, &game).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("--- Room 1\n"));
        assert!(text.contains("[20]"), "full health should render: {text}");
        assert!(text.contains("D40"), "dungeon count should render: {text}");
        // No weapon and no kill yet.
        assert_eq!(text.matches("[ ]").count(), 2);
    }

    #[test]
    fn test_notify_carries_the_message() {
        let mut out = Vec::new();
        notify(&mut out, "There is no card there.").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("There is no card there."));
    }

    #[test]
    fn test_flavor_lines_are_nonempty() {
        assert!(death_line().contains('.'));
        assert!(!avoid_rejected_line().is_empty());
        assert!(victory_line().contains("sunlight"));
    }
}
