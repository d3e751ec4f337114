//! Composition root: builds a `CardGame` from validated settings.

use std::sync::Arc;

use crate::cards::{CardCatalog, Deck};
use crate::commands::{CardGameCommands, Narrator};
use crate::core::config::GameSettings;
use crate::core::player::PlayerCollection;
use crate::core::rng::{GameRng, RandomSource};
use crate::error::Result;
use crate::rules::{HighCardScorer, LeadVictoryChecker, ScoringSettings, VictoryCheckerSettings};

use super::game::{check_roster, CardGame};

/// Builder for creating a `CardGame`.
///
/// Components are constructed in dependency order: settings are validated,
/// the catalog is built from them, then the deck, scorer and victory checker.
///
/// ## Example
///
/// ```
/// use card_round::core::GameSettings;
/// use card_round::engine::CardGameBuilder;
///
/// let mut game = CardGameBuilder::new(GameSettings::default())
///     .seed(42)
///     .build()
///     .unwrap();
///
/// game.execute_round().unwrap();
/// assert_eq!(game.players().len(), 2);
/// ```
pub struct CardGameBuilder {
    settings: GameSettings,
    catalog: Arc<CardCatalog>,
    random_source: Option<Box<dyn RandomSource>>,
    players: Option<PlayerCollection>,
    narrator: Option<Box<dyn Narrator>>,
    commands: Option<CardGameCommands>,
}

impl CardGameBuilder {
    pub fn new(settings: GameSettings) -> Self {
        let catalog = Arc::new(CardCatalog::from_settings(&settings));
        Self {
            settings,
            catalog,
            random_source: None,
            players: None,
            narrator: None,
            commands: None,
        }
    }

    /// Shuffle with a seeded `GameRng`.
    #[must_use]
    pub fn seed(self, seed: u64) -> Self {
        self.random_source(Box::new(GameRng::new(seed).for_context("shuffle")))
    }

    /// Shuffle with a custom random source.
    #[must_use]
    pub fn random_source(mut self, source: Box<dyn RandomSource>) -> Self {
        self.random_source = Some(source);
        self
    }

    /// Starting roster. Defaults to the minimum number of numbered players.
    #[must_use]
    pub fn players(mut self, players: PlayerCollection) -> Self {
        self.players = Some(players);
        self
    }

    #[must_use]
    pub fn narrator(mut self, narrator: Box<dyn Narrator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Replace the default stage handlers.
    #[must_use]
    pub fn commands(mut self, commands: CardGameCommands) -> Self {
        self.commands = Some(commands);
        self
    }

    /// The catalog the game's cards come from, for describing cards.
    #[must_use]
    pub fn catalog(&self) -> Arc<CardCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn scoring_settings(&self) -> ScoringSettings {
        let catalog = Arc::clone(&self.catalog);
        ScoringSettings::new(
            move |card| catalog.card_value(card),
            self.settings.highest_card_score_change,
        )
    }

    pub fn victory_settings(&self) -> VictoryCheckerSettings {
        VictoryCheckerSettings {
            minimum_score_total: self.settings.minimum_victory_score_total,
            required_lead: self.settings.required_victory_score_lead,
            lead_must_be_exact: self.settings.victory_score_lead_must_be_exact,
        }
    }

    /// Build the game.
    ///
    /// Fails on invalid settings, an empty roster, or a roster larger than
    /// the deck.
    pub fn build(self) -> Result<CardGame> {
        self.settings.validate()?;

        let scorer = HighCardScorer::new(self.scoring_settings());
        let victory_checker = LeadVictoryChecker::new(self.victory_settings());

        let players = match self.players {
            Some(players) => players,
            None => PlayerCollection::numbered(self.settings.player_count_minimum)?,
        };

        let rng: Box<dyn RandomSource> = match self.random_source {
            Some(source) => source,
            None => Box::new(GameRng::from_entropy()),
        };
        let deck = Deck::new(self.catalog.cards().to_vec(), rng)?;
        check_roster(&players, &deck)?;

        let game = CardGame::new(
            self.commands.unwrap_or_default(),
            players,
            deck,
            Box::new(scorer),
            Box::new(victory_checker),
        );

        Ok(match self.narrator {
            Some(narrator) => game.with_narrator(narrator),
            None => game,
        })
    }
}
