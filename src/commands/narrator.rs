//! Narration hooks for a presentation layer.
//!
//! The engine has no rendering dependency. Handlers notify a `Narrator` at
//! fixed points of the round; every hook defaults to doing nothing.

use crate::cards::Card;
use crate::core::player::Player;
use crate::error::Result;

/// Receives round events as they happen.
///
/// Calls are synchronous; the round continues when the hook returns.
pub trait Narrator {
    /// Called before `player` draws. An error aborts the round.
    fn awaiting_draw(&mut self, _player: &Player) -> Result<()> {
        Ok(())
    }

    /// Called after `player` drew `card`.
    fn card_drawn(&mut self, _player: &Player, _card: &Card) {}

    /// Called after scores were updated.
    ///
    /// `round_victor` is at most one player even when several shared the
    /// bonus. `ranked` is every player by descending score, ties in roster
    /// order.
    fn scores_updated(&mut self, _round_victor: Option<&Player>, _highest_delta: i32, _ranked: &[&Player]) {}

    /// Called when the game has a winner.
    fn game_won(&mut self, _winner: &Player) {}
}

/// Narrator that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {}

/// Narrator that records events as plain strings.
///
/// Useful for asserting on the order of notifications.
#[derive(Clone, Debug, Default)]
pub struct RecordingNarrator {
    pub events: Vec<String>,
}

impl Narrator for RecordingNarrator {
    fn awaiting_draw(&mut self, player: &Player) -> Result<()> {
        self.events.push(format!("awaiting {}", player.name()));
        Ok(())
    }

    fn card_drawn(&mut self, player: &Player, card: &Card) {
        self.events.push(format!("{} drew {}", player.name(), card.id));
    }

    fn scores_updated(&mut self, round_victor: Option<&Player>, highest_delta: i32, ranked: &[&Player]) {
        let victor = round_victor.map_or("nobody", Player::name);
        let standings: Vec<String> = ranked
            .iter()
            .map(|p| format!("{}={}", p.name(), p.score()))
            .collect();
        self.events.push(format!(
            "victor {victor} +{highest_delta} [{}]",
            standings.join(", ")
        ));
    }

    fn game_won(&mut self, winner: &Player) {
        self.events.push(format!("{} won with {}", winner.name(), winner.score()));
    }
}
