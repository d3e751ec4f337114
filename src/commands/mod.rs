//! Round pipeline: commands and their handlers.
//!
//! Each round runs three stages in fixed order:
//!
//! 1. `DrawCardsCommand`: shuffle, draw one card per player
//! 2. `UpdateScoresCommand`: score the draw, adjust player scores
//! 3. `CheckForGameEndCommand`: ask the victory checker for a winner
//!
//! Commands are plain data carriers built fresh every round: the engine
//! fills their inputs, the handler fills their outputs. Handlers implement
//! `CommandHandler` and may be swapped out through `CardGameCommands`.

pub mod check_end;
pub mod draw;
pub mod narrator;
pub mod update_scores;

pub use check_end::{CheckForGameEndCommand, CheckForGameEndHandler};
pub use draw::{DrawCardsCommand, DrawCardsHandler, DrawnCards};
pub use narrator::{Narrator, RecordingNarrator, SilentNarrator};
pub use update_scores::{RoundSummary, UpdateScoresCommand, UpdateScoresHandler};

use crate::error::Result;

/// Performs one pipeline stage.
pub trait CommandHandler<C> {
    /// Run the stage, writing outputs into `command`.
    fn handle(&mut self, command: &mut C, narrator: &mut dyn Narrator) -> Result<()>;
}

/// Boxed handler for the draw stage.
pub type DrawStage = Box<dyn for<'a> CommandHandler<DrawCardsCommand<'a>>>;
/// Boxed handler for the score stage.
pub type ScoreStage = Box<dyn for<'a> CommandHandler<UpdateScoresCommand<'a>>>;
/// Boxed handler for the end stage.
pub type EndStage = Box<dyn for<'a> CommandHandler<CheckForGameEndCommand<'a>>>;

/// The three handlers a `CardGame` runs each round.
pub struct CardGameCommands {
    pub draw_cards: DrawStage,
    pub update_scores: ScoreStage,
    pub check_for_game_end: EndStage,
}

impl CardGameCommands {
    pub fn new(draw_cards: DrawStage, update_scores: ScoreStage, check_for_game_end: EndStage) -> Self {
        Self {
            draw_cards,
            update_scores,
            check_for_game_end,
        }
    }
}

impl Default for CardGameCommands {
    fn default() -> Self {
        Self::new(
            Box::new(DrawCardsHandler),
            Box::new(UpdateScoresHandler),
            Box::new(CheckForGameEndHandler),
        )
    }
}

impl std::fmt::Debug for CardGameCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardGameCommands").finish_non_exhaustive()
    }
}
