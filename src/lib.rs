//! # card-round
//!
//! A configurable, round-based card game engine.
//!
//! Every round each player draws one card, the draws are scored, and the
//! standings are checked for a winner.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: Card sets, weights, bonuses and
//!    victory thresholds come from `GameSettings`. Nothing is hardcoded.
//!
//! 2. **Pluggable Rules**: Scoring and victory are traits (`Scorer`,
//!    `VictoryChecker`); each pipeline stage is a swappable `CommandHandler`.
//!
//! 3. **No Rendering in the Core**: The engine reports through `Narrator`
//!    hooks. The text session is one narrator among many.
//!
//! ## Architecture
//!
//! - **Round Pipeline**: draw → score → check-for-end, in strict sequence,
//!   each stage consuming the previous stage's output.
//!
//! - **Identity Values**: Cards, ranks and suits are keys into a
//!   `CardCatalog`; special cards are recognized by `CardId`.
//!
//! ## Modules
//!
//! - `core`: Players, random sources, settings
//! - `cards`: Card values, catalog, deck
//! - `rules`: Scorer and victory checker
//! - `commands`: Pipeline commands, handlers, narration hooks
//! - `engine`: The round engine and its builder
//! - `session`: Interactive text session

pub mod cards;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameSettings, LoadedSettings, Player, PlayerCollection, PlayerId, RandomSource,
    SettingsStore,
};

pub use crate::cards::{Card, CardCatalog, CardId, Deck, RankOrdering};

pub use crate::rules::{
    HighCardScorer, LeadVictoryChecker, Scorer, ScoringSettings, VictoryChecker,
    VictoryCheckerSettings,
};

pub use crate::commands::{CardGameCommands, CommandHandler, Narrator, RoundSummary, SilentNarrator};

pub use crate::engine::{CardGame, CardGameBuilder, RoundOutcome};

pub use crate::error::{EngineError, Result, SettingsError};
