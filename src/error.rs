//! Error types for the engine.

use thiserror::Error;

/// Errors raised by the engine core.
///
/// Usage errors (drawing from an exhausted pile, scoring nothing) and
/// configuration errors (an empty card set, a roster larger than the deck)
/// are reported immediately to the caller. The engine never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot draw from an empty deck; shuffle first")]
    EmptyDeck,

    #[error("cannot score an empty sequence of cards")]
    NoCardsToScore,

    #[error("player collection is empty")]
    NoPlayers,

    #[error("{cards} cards were drawn for {players} players")]
    DrawMismatch { cards: usize, players: usize },

    #[error("a deck needs at least one card")]
    EmptyCardSet,

    #[error("player name {0:?} is already taken")]
    DuplicatePlayer(String),

    #[error("player name must contain at least one non-whitespace character")]
    BlankPlayerName,

    #[error("{players} players exceed the limit of {max}")]
    TooManyPlayers { players: usize, max: usize },

    #[error("deck holds {deck_size} cards but {players} players draw each round")]
    DeckTooSmall { deck_size: usize, players: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("round interrupted: {0}")]
    Interrupted(String),
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    NotFound(String),

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("settings are invalid: {0}")]
    Invalid(String),
}

impl From<SettingsError> for EngineError {
    fn from(err: SettingsError) -> Self {
        EngineError::InvalidSettings(err.to_string())
    }
}
