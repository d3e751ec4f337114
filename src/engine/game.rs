//! The round engine.

use tracing::{debug, info};

use crate::cards::Deck;
use crate::commands::{
    CardGameCommands, CheckForGameEndCommand, DrawCardsCommand, DrawnCards, Narrator, RoundSummary,
    SilentNarrator, UpdateScoresCommand,
};
use crate::core::player::{check_roster_size, PlayerCollection, PlayerId};
use crate::error::{EngineError, Result};
use crate::rules::{Scorer, VictoryChecker};

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub cards_drawn: DrawnCards,
    /// `None` only if a custom score handler did not report a summary.
    pub summary: Option<RoundSummary>,
    pub winner: Option<PlayerId>,
}

/// Runs rounds of draw, score, check-for-end.
///
/// ## States
///
/// - **InProgress** (initial): `execute_round` runs the three stages
/// - **GameOver**: entered when the end stage reports a winner; left only
///   through `restart_game`
///
/// The engine does not re-check its state before a round. Callers check
/// `is_game_over` first.
pub struct CardGame {
    commands: CardGameCommands,
    players: PlayerCollection,
    deck: Deck,
    scorer: Box<dyn Scorer>,
    victory_checker: Box<dyn VictoryChecker>,
    narrator: Box<dyn Narrator>,
    is_game_over: bool,
    rounds_played: u32,
}

impl CardGame {
    /// Assemble an engine from its collaborators.
    ///
    /// See `CardGameBuilder` for building one from settings.
    pub fn new(
        commands: CardGameCommands,
        players: PlayerCollection,
        deck: Deck,
        scorer: Box<dyn Scorer>,
        victory_checker: Box<dyn VictoryChecker>,
    ) -> Self {
        Self {
            commands,
            players,
            deck,
            scorer,
            victory_checker,
            narrator: Box::new(SilentNarrator),
            is_game_over: false,
            rounds_played: 0,
        }
    }

    /// Replace the narrator notified by `execute_round`.
    #[must_use]
    pub fn with_narrator(mut self, narrator: Box<dyn Narrator>) -> Self {
        self.narrator = narrator;
        self
    }

    /// Run one round, notifying the engine's own narrator.
    pub fn execute_round(&mut self) -> Result<RoundOutcome> {
        let mut narrator = std::mem::replace(&mut self.narrator, Box::new(SilentNarrator));
        let outcome = self.execute_round_with(narrator.as_mut());
        self.narrator = narrator;
        outcome
    }

    /// Run one round, notifying `narrator`.
    ///
    /// On error the engine is left as of the last completed stage.
    pub fn execute_round_with(&mut self, narrator: &mut dyn Narrator) -> Result<RoundOutcome> {
        let mut draw = DrawCardsCommand::new(&mut self.deck, &self.players);
        self.commands.draw_cards.handle(&mut draw, narrator)?;
        let cards_drawn = draw.cards_drawn;

        let mut update = UpdateScoresCommand::new(&mut self.players, &cards_drawn, self.scorer.as_ref());
        self.commands.update_scores.handle(&mut update, narrator)?;
        let summary = update.summary.take();

        let mut end = CheckForGameEndCommand::new(&self.players, self.victory_checker.as_ref());
        self.commands.check_for_game_end.handle(&mut end, narrator)?;
        let winner = end.winner;

        self.is_game_over = end.is_game_over;
        self.rounds_played += 1;
        debug!(round = self.rounds_played, game_over = self.is_game_over, "round complete");

        Ok(RoundOutcome {
            cards_drawn,
            summary,
            winner,
        })
    }

    /// Return to InProgress and zero every score.
    ///
    /// The deck and roster are kept.
    pub fn restart_game(&mut self) {
        self.is_game_over = false;
        self.rounds_played = 0;
        self.players.zero_scores();
        info!(players = self.players.len(), "game restarted");
    }

    /// Replace the roster. Does not change `is_game_over`.
    ///
    /// Fails, keeping the current roster, if the new one is empty or
    /// outnumbers the deck.
    pub fn set_players(&mut self, players: PlayerCollection) -> Result<()> {
        check_roster(&players, &self.deck)?;
        info!(players = players.len(), "roster replaced");
        self.players = players;
        Ok(())
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub fn players(&self) -> &PlayerCollection {
        &self.players
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds completed since the game started or was restarted.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}

/// Fail if `players` cannot play with `deck`: every player draws one card
/// per round, from a roster `PlayerId` can address.
pub(crate) fn check_roster(players: &PlayerCollection, deck: &Deck) -> Result<()> {
    if players.is_empty() {
        return Err(EngineError::NoPlayers);
    }
    check_roster_size(players.len())?;
    if players.len() > deck.len() {
        return Err(EngineError::DeckTooSmall {
            deck_size: deck.len(),
            players: players.len(),
        });
    }
    Ok(())
}

impl std::fmt::Debug for CardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardGame")
            .field("players", &self.players)
            .field("deck", &self.deck)
            .field("is_game_over", &self.is_game_over)
            .field("rounds_played", &self.rounds_played)
            .finish_non_exhaustive()
    }
}
