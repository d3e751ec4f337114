//! Interactive text session.
//!
//! Drives a `CardGame` from line-buffered input:
//! - prompts for the roster
//! - plays numbered rounds, pausing for the continue key between them
//! - offers a rematch (with the same or a new roster) when a game ends
//!
//! The configured exit key leaves the session from any prompt.

pub mod input;
pub mod narrator;
pub mod roster;
pub mod terminal;

pub use input::{InputHandler, InputSource, KeyDisposition, LineInput, PromptKeys};
pub use narrator::TextNarrator;
pub use roster::prompt_roster;
pub use terminal::Terminal;

use std::io::{self, Write};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::cards::CardCatalog;
use crate::core::config::GameSettings;
use crate::engine::{CardGame, CardGameBuilder};
use crate::error::EngineError;

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("exit requested")]
    Exit,

    #[error("input ended")]
    EndOfInput,
}

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Players declined another game.
    Finished,
    /// The exit key was pressed.
    Exited,
    /// Input ran out.
    EndOfInput,
}

/// A running text session.
pub struct Session<I, W> {
    terminal: Terminal<I, W>,
    game: CardGame,
    catalog: Arc<CardCatalog>,
    settings: GameSettings,
    games_played: u32,
}

impl<I: InputSource, W: Write> Session<I, W> {
    /// Prompt for the roster and build the game.
    ///
    /// `seed` makes the shuffles reproducible. An exit or end of input during
    /// the roster prompt is returned as the corresponding error.
    pub fn start(settings: GameSettings, mut terminal: Terminal<I, W>, seed: Option<u64>) -> Result<Self, SessionError> {
        terminal.line("~~ Card Game ~~");
        terminal.blank_line();

        let players = prompt_roster(&mut terminal, &settings)?;
        let mut builder = CardGameBuilder::new(settings.clone()).players(players);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let catalog = builder.catalog();
        let game = builder.build()?;

        Ok(Self::new(game, catalog, settings, terminal))
    }

    /// Wrap an already-built game.
    pub fn new(game: CardGame, catalog: Arc<CardCatalog>, settings: GameSettings, terminal: Terminal<I, W>) -> Self {
        Self {
            terminal,
            game,
            catalog,
            settings,
            games_played: 0,
        }
    }

    #[must_use]
    pub fn game(&self) -> &CardGame {
        &self.game
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Consume the session, returning the terminal's output sink.
    pub fn into_output(self) -> W {
        self.terminal.into_output()
    }

    /// Play games until the players stop or leave.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        match self.play_until_declined() {
            Ok(()) => Ok(SessionEnd::Finished),
            Err(SessionError::Exit) => {
                self.terminal.blank_line();
                info!(games = self.games_played, "session exited");
                Ok(SessionEnd::Exited)
            }
            Err(SessionError::EndOfInput) => Ok(SessionEnd::EndOfInput),
            Err(err) => Err(err),
        }
    }

    fn play_until_declined(&mut self) -> Result<(), SessionError> {
        loop {
            self.play_game()?;
            self.games_played += 1;

            self.terminal.blank_line();
            if !self.terminal.yes_or_no("Play again?")? {
                self.terminal.blank_line();
                return Ok(());
            }
            self.game.restart_game();

            self.terminal.blank_line();
            if !self.terminal.yes_or_no("Keep the same players again?")? {
                self.terminal.blank_line();
                let players = prompt_roster(&mut self.terminal, &self.settings)?;
                self.game.set_players(players)?;
            }
        }
    }

    fn play_game(&mut self) -> Result<(), SessionError> {
        let continue_key = self.settings.continue_round_key;
        let mut round = 1;

        loop {
            self.terminal.blank_line();
            self.terminal.line(&format!("Round {round}"));
            self.terminal.blank_line();

            let mut narrator = TextNarrator::new(&mut self.terminal, &self.catalog, self.settings.draw_card_key);
            let result = self.game.execute_round_with(&mut narrator);
            let interruption = narrator.interruption.take();
            match (result, interruption) {
                (Ok(_), _) => {}
                (Err(_), Some(cause)) => return Err(cause),
                (Err(err), None) => return Err(err.into()),
            }
            self.terminal.take_error()?;

            if self.game.is_game_over() {
                return Ok(());
            }

            round += 1;
            self.terminal.blank_line();
            self.terminal.write(&format!("Press {continue_key} to continue. "));
            self.terminal.read_one_of(&[continue_key])?;
        }
    }
}
