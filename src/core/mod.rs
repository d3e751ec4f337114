//! Core engine types: players, random sources, configuration.
//!
//! This module contains the building blocks every other module shares.
//! Games configure the engine through `GameSettings` rather than by
//! modifying the core.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    FaceValueSetting, GameSettings, LoadedSettings, SettingsStore, SpecialCardSetting,
    SuitSetting, MAX_WEIGHT, SETTINGS_VERSION,
};
pub use player::{Player, PlayerCollection, PlayerId, MAX_PLAYERS};
pub use rng::{GameRng, RandomSource, SequenceSource};
