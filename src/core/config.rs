//! Game settings and their on-disk store.
//!
//! Games are configured once at startup by a `GameSettings` value:
//! - Roster bounds (player count, name length)
//! - Scoring (`highest_card_score_change`, rank ordering)
//! - Victory thresholds
//! - Key bindings used by the text session
//! - The card set: suits, face values, special cards
//!
//! The schema is versioned and serialized as JSON. Unknown fields, malformed
//! values, other versions and settings that fail `validate` are all
//! configuration errors. `SettingsStore::load_or_default` turns any of them
//! into an explicit fallback to the compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::player::MAX_PLAYERS;
use crate::error::SettingsError;

/// Current settings schema version.
pub const SETTINGS_VERSION: u32 = 1;

/// Largest absolute suit or face value weight accepted by `validate`.
pub const MAX_WEIGHT: i32 = 1_000_000;

/// File name used by `SettingsStore::default_path`.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// A weighted suit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuitSetting {
    pub name: String,
    pub rank: i32,
}

/// A weighted face value entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaceValueSetting {
    pub value: String,
    pub rank: i32,
}

/// A special card valued by override.
///
/// `value` and `suit` are display names only; `None` means the card has no
/// face value or no suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialCardSetting {
    pub value: Option<String>,
    pub suit: Option<String>,
    pub score_change: i32,
    pub count: u32,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSettings {
    /// Schema version; must equal `SETTINGS_VERSION`.
    pub version: u32,

    pub player_count_minimum: usize,
    pub player_count_maximum: usize,
    pub player_name_minimum_length: usize,
    pub player_name_maximum_length: usize,

    /// Flat bonus for drawing the round's highest card.
    pub highest_card_score_change: i32,

    pub minimum_victory_score_total: i32,
    pub required_victory_score_lead: i32,
    pub victory_score_lead_must_be_exact: bool,

    /// Rank weight dominates suit weight when true.
    pub rank_cards_by_face_value_first: bool,

    pub draw_card_key: char,
    pub continue_round_key: char,
    pub exit_key: char,

    pub suits: Vec<SuitSetting>,
    pub face_values: Vec<FaceValueSetting>,
    pub special_cards: Vec<SpecialCardSetting>,
}

impl Default for GameSettings {
    fn default() -> Self {
        let suits = [("Clubs", 0), ("Diamonds", 1), ("Hearts", 2), ("Spades", 3)]
            .into_iter()
            .map(|(name, rank)| SuitSetting {
                name: name.to_string(),
                rank,
            })
            .collect();

        // Four and Five share Two's weight in the shipped defaults.
        let face_values = [
            ("Two", 2),
            ("Three", 3),
            ("Four", 2),
            ("Five", 2),
            ("Six", 6),
            ("Seven", 7),
            ("Eight", 8),
            ("Nine", 9),
            ("Ten", 10),
            ("Jack", 11),
            ("Queen", 12),
            ("King", 13),
            ("Ace", 14),
        ]
        .into_iter()
        .map(|(value, rank)| FaceValueSetting {
            value: value.to_string(),
            rank,
        })
        .collect();

        Self {
            version: SETTINGS_VERSION,
            player_count_minimum: 2,
            player_count_maximum: 4,
            player_name_minimum_length: 1,
            player_name_maximum_length: 10,
            highest_card_score_change: 2,
            minimum_victory_score_total: 21,
            required_victory_score_lead: 2,
            victory_score_lead_must_be_exact: false,
            rank_cards_by_face_value_first: true,
            draw_card_key: 'D',
            continue_round_key: 'D',
            exit_key: '\u{1b}',
            suits,
            face_values,
            special_cards: vec![SpecialCardSetting {
                value: Some("Penalty".to_string()),
                suit: None,
                score_change: -1,
                count: 4,
            }],
        }
    }
}

impl GameSettings {
    /// Number of cards the configured deck holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        let regular = self.suits.len() * self.face_values.len();
        let special: usize = self.special_cards.iter().map(|s| s.count as usize).sum();
        regular + special
    }

    /// Check every cross-field constraint.
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(msg: impl Into<String>) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.into()))
        }

        if self.version != SETTINGS_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: self.version,
                expected: SETTINGS_VERSION,
            });
        }
        if self.player_count_minimum == 0 {
            return invalid("player_count_minimum must be at least 1");
        }
        if self.player_count_minimum > self.player_count_maximum {
            return invalid("player_count_minimum exceeds player_count_maximum");
        }
        if self.player_count_maximum > MAX_PLAYERS {
            return invalid(format!("at most {MAX_PLAYERS} players supported"));
        }
        if self.player_name_maximum_length == 0 {
            return invalid("player_name_maximum_length must be at least 1");
        }
        if self.player_name_minimum_length > self.player_name_maximum_length {
            return invalid("player_name_minimum_length exceeds player_name_maximum_length");
        }
        if has_duplicates(self.suits.iter().map(|s| s.name.as_str())) {
            return invalid("suit names must be unique");
        }
        if has_duplicates(self.face_values.iter().map(|f| f.value.as_str())) {
            return invalid("face values must be unique");
        }
        let mut weights = self.suits.iter().map(|s| s.rank).chain(self.face_values.iter().map(|f| f.rank));
        if weights.any(|w| w.unsigned_abs() > MAX_WEIGHT.unsigned_abs()) {
            return invalid(format!("suit and face value weights must be within ±{MAX_WEIGHT}"));
        }
        if self.special_cards.iter().any(|s| s.count == 0) {
            return invalid("special card count must be at least 1");
        }
        if self.exit_key.eq_ignore_ascii_case(&self.draw_card_key)
            || self.exit_key.eq_ignore_ascii_case(&self.continue_round_key)
        {
            return invalid("exit_key must differ from the draw and continue keys");
        }

        let deck_size = self.deck_size();
        if deck_size == 0 {
            return invalid("deck has no cards");
        }
        if deck_size < self.player_count_maximum {
            return invalid(format!(
                "deck holds {deck_size} cards but up to {} players draw each round",
                self.player_count_maximum
            ));
        }

        Ok(())
    }

    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        #[derive(Deserialize)]
        struct VersionProbe {
            version: u32,
        }

        let probe: VersionProbe = serde_json::from_str(json)?;
        if probe.version != SETTINGS_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: probe.version,
                expected: SETTINGS_VERSION,
            });
        }

        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn has_duplicates<'a>(items: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = rustc_hash::FxHashSet::default();
    items.into_iter().any(|item| !seen.insert(item))
}

/// Settings resolved by `SettingsStore::load_or_default`.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: GameSettings,
    /// Why the defaults were used, if they were.
    pub fallback: Option<SettingsError>,
}

impl LoadedSettings {
    /// Did loading fall back to the defaults?
    #[must_use]
    pub fn used_defaults(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Reads and writes `GameSettings` at a fixed path.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` next to the running executable.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(SETTINGS_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file.
    pub fn load(&self) -> Result<GameSettings, SettingsError> {
        if !self.path.exists() {
            return Err(SettingsError::NotFound(self.path.display().to_string()));
        }
        let json = fs::read_to_string(&self.path)?;
        GameSettings::from_json(&json)
    }

    /// Write `settings` to the file, replacing it.
    pub fn save(&self, settings: &GameSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        fs::write(&self.path, settings.to_json()?)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Load the settings file, falling back to the defaults on any error.
    ///
    /// When falling back, the defaults are written to the file so the next
    /// run reads a valid file. A failure to write is logged and otherwise
    /// ignored.
    pub fn load_or_default(&self) -> LoadedSettings {
        match self.load() {
            Ok(settings) => LoadedSettings {
                settings,
                fallback: None,
            },
            Err(err) => {
                if matches!(err, SettingsError::NotFound(_)) {
                    info!(path = %self.path.display(), "no settings file, loading defaults");
                } else {
                    warn!(path = %self.path.display(), error = %err, "settings unusable, loading defaults");
                }
                let settings = GameSettings::default();
                if let Err(write_err) = self.save(&settings) {
                    warn!(path = %self.path.display(), error = %write_err, "could not write default settings");
                }
                LoadedSettings {
                    settings,
                    fallback: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.deck_size(), 56);
        assert_eq!(settings.exit_key, '\u{1b}');
    }

    #[test]
    fn test_json_round_trip() {
        let settings = GameSettings::default();
        let json = settings.to_json().unwrap();
        let parsed = GameSettings::from_json(&json).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = serde_json::to_value(GameSettings::default()).unwrap();
        value["favourite_colour"] = serde_json::json!("teal");
        let err = GameSettings::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_other_version_rejected() {
        let mut value = serde_json::to_value(GameSettings::default()).unwrap();
        value["version"] = serde_json::json!(2);
        let err = GameSettings::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::UnsupportedVersion { found: 2, expected: 1 }
        ));
    }

    #[test]
    fn test_player_bounds_validated() {
        let settings = GameSettings {
            player_count_minimum: 5,
            player_count_maximum: 3,
            ..GameSettings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_deck_must_cover_players() {
        let settings = GameSettings {
            suits: Vec::new(),
            special_cards: vec![SpecialCardSetting {
                value: Some("Joker".to_string()),
                suit: None,
                score_change: 1,
                count: 3,
            }],
            ..GameSettings::default()
        };
        assert_eq!(settings.deck_size(), 3);
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_suits_rejected() {
        let mut settings = GameSettings::default();
        settings.suits.push(SuitSetting {
            name: "Clubs".to_string(),
            rank: 9,
        });
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_weights_bounded() {
        let mut settings = GameSettings::default();
        settings.face_values.push(FaceValueSetting {
            value: "Huge".to_string(),
            rank: 30_000_000,
        });
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        let mut settings = GameSettings::default();
        settings.suits[0].rank = -MAX_WEIGHT - 1;
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        settings.suits[0].rank = -MAX_WEIGHT;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_player_limit() {
        let settings = GameSettings {
            player_count_maximum: MAX_PLAYERS + 1,
            special_cards: vec![SpecialCardSetting {
                value: Some("Joker".to_string()),
                suit: None,
                score_change: 1,
                count: 1000,
            }],
            ..GameSettings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_exit_key_must_be_distinct() {
        let settings = GameSettings {
            exit_key: 'd',
            ..GameSettings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    /// Shared buffer the test subscriber writes log lines into.
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_file_fallback_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(SETTINGS_FILE_NAME));

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let loaded = tracing::subscriber::with_default(subscriber, || store.load_or_default());
        assert!(matches!(loaded.fallback, Some(SettingsError::NotFound(_))));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("no settings file, loading defaults"), "{output}");
    }
}
