//! Interactive roster entry.

use std::io::Write;

use crate::core::config::GameSettings;
use crate::core::player::{Player, PlayerCollection};

use super::input::InputSource;
use super::terminal::Terminal;
use super::SessionError;

/// Ask for the number of players and, optionally, their names.
///
/// Names must be unique, non-blank, and within the configured length bounds
/// (counted in characters). Invalid names are re-prompted.
pub fn prompt_roster<I: InputSource, W: Write>(
    terminal: &mut Terminal<I, W>,
    settings: &GameSettings,
) -> Result<PlayerCollection, SessionError> {
    let (min_players, max_players) = (settings.player_count_minimum, settings.player_count_maximum);
    terminal.write(&format!(
        "Enter the number of players, between {min_players} and {max_players}: "
    ));
    let count = terminal.read_integer_in_range(min_players, max_players)?;

    terminal.blank_line();
    if !terminal.yes_or_no("Enter player names?")? {
        terminal.blank_line();
        return Ok(PlayerCollection::numbered(count)?);
    }

    let (min_len, max_len) = (
        settings.player_name_minimum_length,
        settings.player_name_maximum_length,
    );
    terminal.blank_line();
    terminal.blank_line();
    terminal.line(&format!(
        "Enter a unique name for each player, between {min_len} and {max_len} characters."
    ));

    let mut players = PlayerCollection::new();
    for i in 1..=count {
        terminal.write(&format!("Player {i}: "));
        loop {
            let name = terminal.read_text()?.trim().to_string();
            let length = name.chars().count();

            if length < min_len || length > max_len {
                terminal.line(&format!(
                    "Error: Player name must be between {min_len} and {max_len} characters."
                ));
            } else if Player::new(name).and_then(|p| players.push(p)).is_ok() {
                break;
            } else {
                terminal.line("Error: Player name must be unique and contain at least one character.");
            }
            terminal.write(&format!("Enter a unique name for Player {i}: "));
        }
    }

    terminal.blank_line();
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::terminal::tests::Script;

    fn run(lines: &[&str]) -> (Result<PlayerCollection, SessionError>, String) {
        let mut terminal = Terminal::new(Script::new(lines), Vec::new(), '\u{1b}');
        let result = prompt_roster(&mut terminal, &GameSettings::default());
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_numbered_players() {
        let (result, _) = run(&["3", "n"]);
        let players = result.unwrap();
        let names: Vec<_> = players.iter().map(Player::name).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_named_players_reprompt() {
        let (result, output) = run(&["2", "y", "Ada", "Ada", "", "averyveryverylongname", "Bo"]);
        let players = result.unwrap();
        let names: Vec<_> = players.iter().map(Player::name).collect();

        assert_eq!(names, vec!["Ada", "Bo"]);
        assert_eq!(output.matches("Enter a unique name for Player 2").count(), 3);
    }

    #[test]
    fn test_exit_during_roster() {
        let (result, _) = run(&["2", "y", "\u{1b}"]);
        assert!(matches!(result, Err(SessionError::Exit)));
    }
}
