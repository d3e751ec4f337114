//! Score stage: apply the scorer's deltas to each player.

use tracing::debug;

use super::narrator::Narrator;
use super::CommandHandler;
use crate::cards::Card;
use crate::core::player::{PlayerCollection, PlayerId};
use crate::error::{EngineError, Result};
use crate::rules::Scorer;

/// What the score stage reports about a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// Delta applied to each player, in roster order (before flooring).
    pub deltas: Vec<i32>,
    /// The round's highest delta.
    pub highest_delta: i32,
    /// Last player in roster order whose delta was positive.
    ///
    /// When several players shared the bonus only one of them is reported.
    pub round_victor: Option<PlayerId>,
}

/// Inputs and outputs of the score stage.
pub struct UpdateScoresCommand<'a> {
    pub players: &'a mut PlayerCollection,
    pub cards_drawn: &'a [Card],
    pub scorer: &'a dyn Scorer,
    /// Output, set by the handler.
    pub summary: Option<RoundSummary>,
}

impl<'a> UpdateScoresCommand<'a> {
    pub fn new(players: &'a mut PlayerCollection, cards_drawn: &'a [Card], scorer: &'a dyn Scorer) -> Self {
        Self {
            players,
            cards_drawn,
            scorer,
            summary: None,
        }
    }
}

/// Default score handler: `score = max(0, score + delta)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateScoresHandler;

impl<'a> CommandHandler<UpdateScoresCommand<'a>> for UpdateScoresHandler {
    fn handle(&mut self, command: &mut UpdateScoresCommand<'a>, narrator: &mut dyn Narrator) -> Result<()> {
        if command.cards_drawn.len() != command.players.len() {
            return Err(EngineError::DrawMismatch {
                cards: command.cards_drawn.len(),
                players: command.players.len(),
            });
        }

        let deltas = command.scorer.score(command.cards_drawn)?;
        let highest_delta = deltas.iter().copied().max().ok_or(EngineError::NoCardsToScore)?;

        let mut round_victor = None;
        for ((id, player), &delta) in (0..=u8::MAX).map(PlayerId::new).zip(command.players.iter_mut()).zip(&deltas) {
            player.apply_delta(delta);
            if delta > 0 {
                round_victor = Some(id);
            }
            debug!(player = %player.name(), delta, score = player.score(), "score updated");
        }

        let players: &PlayerCollection = command.players;
        narrator.scores_updated(
            round_victor.and_then(|id| players.get(id)),
            highest_delta,
            &players.ranked(),
        );

        command.summary = Some(RoundSummary {
            deltas,
            highest_delta,
            round_victor,
        });
        Ok(())
    }
}
