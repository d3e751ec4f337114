//! End stage: ask the victory checker for a winner.

use tracing::info;

use super::narrator::Narrator;
use super::CommandHandler;
use crate::core::player::{PlayerCollection, PlayerId};
use crate::error::Result;
use crate::rules::VictoryChecker;

/// Inputs and outputs of the end stage.
pub struct CheckForGameEndCommand<'a> {
    pub players: &'a PlayerCollection,
    pub victory_checker: &'a dyn VictoryChecker,
    /// Output: true iff a winner exists.
    pub is_game_over: bool,
    /// Output: the winner, if any.
    pub winner: Option<PlayerId>,
}

impl<'a> CheckForGameEndCommand<'a> {
    pub fn new(players: &'a PlayerCollection, victory_checker: &'a dyn VictoryChecker) -> Self {
        Self {
            players,
            victory_checker,
            is_game_over: false,
            winner: None,
        }
    }
}

/// Default end handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckForGameEndHandler;

impl<'a> CommandHandler<CheckForGameEndCommand<'a>> for CheckForGameEndHandler {
    fn handle(&mut self, command: &mut CheckForGameEndCommand<'a>, narrator: &mut dyn Narrator) -> Result<()> {
        let winner = command.victory_checker.victorious_player(command.players)?;

        if let Some(player) = winner.and_then(|id| command.players.get(id)) {
            info!(winner = %player.name(), score = player.score(), "game over");
            narrator.game_won(player);
        }

        command.winner = winner;
        command.is_game_over = winner.is_some();
        Ok(())
    }
}
