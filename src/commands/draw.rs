//! Draw stage: shuffle once, then one card per player in roster order.

use smallvec::SmallVec;
use tracing::debug;

use super::narrator::Narrator;
use super::CommandHandler;
use crate::cards::{Card, Deck};
use crate::core::player::PlayerCollection;
use crate::error::Result;

/// Cards drawn in one round, one per player. Rosters rarely exceed 8.
pub type DrawnCards = SmallVec<[Card; 8]>;

/// Inputs and outputs of the draw stage.
pub struct DrawCardsCommand<'a> {
    pub deck: &'a mut Deck,
    pub players: &'a PlayerCollection,
    /// Output: `cards_drawn[i]` was drawn by player `i`.
    pub cards_drawn: DrawnCards,
}

impl<'a> DrawCardsCommand<'a> {
    pub fn new(deck: &'a mut Deck, players: &'a PlayerCollection) -> Self {
        Self {
            deck,
            players,
            cards_drawn: DrawnCards::new(),
        }
    }
}

/// Default draw handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawCardsHandler;

impl<'a> CommandHandler<DrawCardsCommand<'a>> for DrawCardsHandler {
    fn handle(&mut self, command: &mut DrawCardsCommand<'a>, narrator: &mut dyn Narrator) -> Result<()> {
        command.deck.shuffle();

        let mut drawn = DrawnCards::with_capacity(command.players.len());
        for player in command.players {
            narrator.awaiting_draw(player)?;

            let card = command.deck.draw()?;
            debug!(player = %player.name(), card = %card.id, "card drawn");
            narrator.card_drawn(player, &card);
            drawn.push(card);
        }

        command.cards_drawn = drawn;
        Ok(())
    }
}
