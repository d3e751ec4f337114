//! Narrator that renders round events as text.

use std::io::Write;

use crate::cards::{Card, CardCatalog};
use crate::commands::Narrator;
use crate::core::player::Player;
use crate::error::{EngineError, Result};

use super::input::InputSource;
use super::terminal::Terminal;
use super::SessionError;

/// Prompts each player to draw and prints draws, scores and the winner.
///
/// If a draw prompt fails (exit key, end of input, I/O), the round is
/// aborted and the cause is kept in `interruption`.
pub struct TextNarrator<'t, I, W> {
    terminal: &'t mut Terminal<I, W>,
    catalog: &'t CardCatalog,
    draw_key: char,
    pub interruption: Option<SessionError>,
}

impl<'t, I: InputSource, W: Write> TextNarrator<'t, I, W> {
    pub fn new(terminal: &'t mut Terminal<I, W>, catalog: &'t CardCatalog, draw_key: char) -> Self {
        Self {
            terminal,
            catalog,
            draw_key,
            interruption: None,
        }
    }
}

impl<I: InputSource, W: Write> Narrator for TextNarrator<'_, I, W> {
    fn awaiting_draw(&mut self, player: &Player) -> Result<()> {
        self.terminal
            .write(&format!("{}, press {} to draw a card. ", player.name(), self.draw_key));

        match self.terminal.read_one_of(&[self.draw_key]) {
            Ok(_) => {
                self.terminal.blank_line();
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                self.interruption = Some(err);
                Err(EngineError::Interrupted(reason))
            }
        }
    }

    fn card_drawn(&mut self, player: &Player, card: &Card) {
        self.terminal
            .line(&format!("{} drew {}.", player.name(), self.catalog.describe(card)));
    }

    fn scores_updated(&mut self, round_victor: Option<&Player>, highest_delta: i32, ranked: &[&Player]) {
        self.terminal.blank_line();
        match round_victor {
            Some(victor) => self.terminal.line(&format!(
                "{} drew the best card and was awarded {} points.",
                victor.name(),
                highest_delta
            )),
            None => self.terminal.line("No players received a positive score this round."),
        }

        self.terminal.blank_line();
        self.terminal.line("Current scores:");
        for (i, player) in ranked.iter().enumerate() {
            self.terminal
                .line(&format!("{}. {}: {}", i + 1, player.name(), player.score()));
        }
    }

    fn game_won(&mut self, winner: &Player) {
        self.terminal.blank_line();
        self.terminal.line(&format!(
            "{} has won with a score of {}!",
            winner.name(),
            winner.score()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::RankOrdering;
    use crate::session::terminal::tests::Script;

    #[test]
    fn test_draw_prompt_and_description() {
        let mut catalog = CardCatalog::new(RankOrdering::FaceValueFirst);
        let hearts = catalog.add_suit("Hearts", 2);
        let ten = catalog.add_rank("Ten", 10);
        let card = catalog.add_card(Some(ten), Some(hearts));
        let player = Player::new("Ada").unwrap();

        let mut terminal = Terminal::new(Script::new(&["d"]), Vec::new(), '\u{1b}');
        let mut narrator = TextNarrator::new(&mut terminal, &catalog, 'D');
        narrator.awaiting_draw(&player).unwrap();
        narrator.card_drawn(&player, &card);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output, "Ada, press D to draw a card. \nAda drew the Ten of Hearts.\n");
    }

    #[test]
    fn test_exit_interrupts_round() {
        let catalog = CardCatalog::new(RankOrdering::FaceValueFirst);
        let player = Player::new("Ada").unwrap();

        let mut terminal = Terminal::new(Script::new(&["\u{1b}"]), Vec::new(), '\u{1b}');
        let mut narrator = TextNarrator::new(&mut terminal, &catalog, 'D');
        let result = narrator.awaiting_draw(&player);

        assert!(matches!(result, Err(EngineError::Interrupted(_))));
        assert!(matches!(narrator.interruption, Some(SessionError::Exit)));
    }

    #[test]
    fn test_no_victor_message() {
        let catalog = CardCatalog::new(RankOrdering::FaceValueFirst);
        let ada = Player::new("Ada").unwrap();

        let mut terminal = Terminal::new(Script::new(&[]), Vec::new(), '\u{1b}');
        TextNarrator::new(&mut terminal, &catalog, 'D').scores_updated(None, -1, &[&ada]);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert!(output.contains("No players received a positive score this round."));
        assert!(output.contains("1. Ada: 0"));
    }
}
