//! Player commands, parsed from one line of input.

/// A parsed player command.
///
/// Slot selectors are kept 1-based and unvalidated here; the session loop
/// checks them against the live room so it can tell the player exactly
/// what was wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interact with a room slot, optionally fighting barehanded.
    Interact { slot: i64, bare: bool },
    /// Skip the current room.
    Avoid,
    /// Show the how-to-play text.
    Help,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Parse one input line, case-insensitively.
    ///
    /// Recognized forms: an integer slot selector with an optional
    /// trailing `b` ("fight barehanded"), or one of the synonym sets
    /// `avoid`/`run`/`r`, `help`/`h`, `quit`/`q`. Anything else is
    /// `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "avoid" | "run" | "r" => return Some(Self::Avoid),
            "help" | "h" => return Some(Self::Help),
            "quit" | "q" => return Some(Self::Quit),
            _ => {}
        }

        let (digits, bare) = match input.strip_suffix('b') {
            Some(rest) => (rest, true),
            None => (input.as_str(), false),
        };
        digits
            .parse::<i64>()
            .ok()
            .map(|slot| Self::Interact { slot, bare })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_selector() {
        assert_eq!(Command::parse("3"), Some(Command::Interact { slot: 3, bare: false }));
        assert_eq!(Command::parse("1"), Some(Command::Interact { slot: 1, bare: false }));
    }

    #[test]
    fn test_barehanded_marker() {
        assert_eq!(Command::parse("2b"), Some(Command::Interact { slot: 2, bare: true }));
        assert_eq!(Command::parse("4B"), Some(Command::Interact { slot: 4, bare: true }));
    }

    #[test]
    fn test_out_of_range_selectors_still_parse() {
        // Range validation happens against the live room, not here.
        assert_eq!(Command::parse("0"), Some(Command::Interact { slot: 0, bare: false }));
        assert_eq!(Command::parse("9"), Some(Command::Interact { slot: 9, bare: false }));
        assert_eq!(Command::parse("-2"), Some(Command::Interact { slot: -2, bare: false }));
    }

    #[test]
    fn test_avoid_synonyms() {
        assert_eq!(Command::parse("avoid"), Some(Command::Avoid));
        assert_eq!(Command::parse("run"), Some(Command::Avoid));
        assert_eq!(Command::parse("r"), Some(Command::Avoid));
        assert_eq!(Command::parse("AVOID"), Some(Command::Avoid));
    }

    #[test]
    fn test_help_and_quit_synonyms() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("H"), Some(Command::Help));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(Command::parse("  2b \n"), Some(Command::Interact { slot: 2, bare: true }));
        assert_eq!(Command::parse(" r\n"), Some(Command::Avoid));
    }

    #[test]
    fn test_junk_is_rejected()  {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("fight"), None);
        assert_eq!(Command::parse("2x"), None);
        assert_eq!(Command::parse("b"), None);
        assert_eq!(Command::parse("bb"), None);
        assert_eq!(Command::parse("1.5"), None);
    }
}
