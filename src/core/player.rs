//! Players and the ordered roster.
//!
//! ## PlayerId
//!
//! Position of a player in the roster. Roster order is the draw order.
//!
//! ## PlayerCollection
//!
//! Ordered, name-unique sequence of players backed by `Vec` for O(1) access.
//! Only `score` is ever mutated in place; rosters are replaced wholesale.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{EngineError, Result};

/// Largest roster a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Player position within a roster (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as usize + 1)
    }
}

/// A named participant with a non-negative score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: i32,
}

impl Player {
    /// Create a player with a score of zero.
    ///
    /// Fails if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::BlankPlayerName);
        }
        Ok(Self { name, score: 0 })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Apply a score delta, flooring the result at zero.
    pub fn apply_delta(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta).max(0);
    }

    /// Reset the score to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Ordered roster of players with unique names.
///
/// ## Example
///
/// ```
/// use card_round::core::{PlayerCollection, PlayerId};
///
/// let players = PlayerCollection::numbered(3).unwrap();
/// assert_eq!(players.len(), 3);
/// assert_eq!(players[PlayerId::new(2)].name(), "Player 3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct PlayerCollection {
    players: Vec<Player>,
}

impl PlayerCollection {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from names, in order.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players = Self::new();
        for name in names {
            players.push(Player::new(name)?)?;
        }
        Ok(players)
    }

    /// Create "Player 1" through "Player n".
    ///
    /// Fails if `count` exceeds `MAX_PLAYERS`.
    pub fn numbered(count: usize) -> Result<Self> {
        check_roster_size(count)?;
        let players = (1..=count)
            .map(|i| Player {
                name: format!("Player {i}"),
                score: 0,
            })
            .collect();
        Ok(Self { players })
    }

    /// Append a player, rejecting a name already in the roster or a roster
    /// already at `MAX_PLAYERS`.
    pub fn push(&mut self, player: Player) -> Result<PlayerId> {
        if self.contains_name(player.name()) {
            return Err(EngineError::DuplicatePlayer(player.name));
        }
        let id = u8::try_from(self.players.len())
            .map(PlayerId)
            .map_err(|_| EngineError::TooManyPlayers {
                players: self.players.len() + 1,
                max: MAX_PLAYERS,
            })?;

        self.players.push(player);
        Ok(id)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Iterate over (PlayerId, &Player) pairs in roster order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        (0..=u8::MAX).map(PlayerId).zip(&self.players)
    }

    /// Iterate mutably in roster order. Names cannot be changed through `Player`.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }

    /// Players ordered by descending score; ties keep roster order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Reset every score to zero.
    pub fn zero_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
    }
}

/// Fail if a roster of `count` players cannot be addressed by `PlayerId`.
pub(crate) fn check_roster_size(count: usize) -> Result<()> {
    if count > MAX_PLAYERS {
        return Err(EngineError::TooManyPlayers {
            players: count,
            max: MAX_PLAYERS,
        });
    }
    Ok(())
}

impl TryFrom<Vec<Player>> for PlayerCollection {
    type Error = EngineError;

    fn try_from(players: Vec<Player>) -> Result<Self> {
        let mut collection = Self::new();
        for player in players {
            collection.push(player)?;
        }
        Ok(collection)
    }
}

impl From<PlayerCollection> for Vec<Player> {
    fn from(collection: PlayerCollection) -> Self {
        collection.players
    }
}

impl Index<PlayerId> for PlayerCollection {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl<'a> IntoIterator for &'a PlayerCollection {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Player::new("   "), Err(EngineError::BlankPlayerName));
        assert_eq!(Player::new(""), Err(EngineError::BlankPlayerName));
        assert!(Player::new("Ada").is_ok());
    }

    #[test]
    fn test_score_floor() {
        let mut player = Player::new("Ada").unwrap();
        player.apply_delta(2);
        assert_eq!(player.score(), 2);
        player.apply_delta(-5);
        assert_eq!(player.score(), 0);
        player.apply_delta(-1);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut players = PlayerCollection::new();
        players.push(Player::new("Ada").unwrap()).unwrap();

        let err = players.push(Player::new("Ada").unwrap()).unwrap_err();
        assert_eq!(err, EngineError::DuplicatePlayer("Ada".to_string()));
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_from_names_keeps_order() {
        let players = PlayerCollection::from_names(["Cy", "Ada", "Bo"]).unwrap();
        let names: Vec<_> = players.iter().map(Player::name).collect();
        assert_eq!(names, vec!["Cy", "Ada", "Bo"]);
        assert_eq!(players[PlayerId::new(1)].name(), "Ada");
    }

    #[test]
    fn test_numbered() {
        let players = PlayerCollection::numbered(4).unwrap();
        assert_eq!(players.len(), 4);
        assert_eq!(players[PlayerId::new(0)].name(), "Player 1");
        assert_eq!(players[PlayerId::new(3)].name(), "Player 4");
    }

    #[test]
    fn test_ranked_is_stable() {
        let mut players = PlayerCollection::from_names(["A", "B", "C"]).unwrap();
        players.iter_mut().nth(1).unwrap().apply_delta(3);
        players.iter_mut().nth(2).unwrap().apply_delta(3);

        let ranked: Vec<_> = players.ranked().iter().map(|p| p.name()).collect();
        assert_eq!(ranked, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_zero_scores() {
        let mut players = PlayerCollection::numbered(2).unwrap();
        for player in players.iter_mut() {
            player.apply_delta(7);
        }
        players.zero_scores();
        assert!(players.iter().all(|p| p.score() == 0));
    }

    #[test]
    fn test_collection_serialization() {
        let players = PlayerCollection::from_names(["Ada", "Bo"]).unwrap();
        let json = serde_json::to_string(&players).unwrap();
        let deserialized: PlayerCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(players, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[{"name":"Ada","score":0},{"name":"Ada","score":3}]"#;
        assert!(serde_json::from_str::<PlayerCollection>(json).is_err());
    }

    #[test]
    fn test_roster_limit() {
        let full = PlayerCollection::numbered(MAX_PLAYERS).unwrap();
        let (last_id, last) = full.iter_with_ids().last().unwrap();
        assert_eq!(last_id, PlayerId::new(u8::MAX));
        assert_eq!(last.name(), format!("Player {MAX_PLAYERS}"));

        assert_eq!(
            PlayerCollection::numbered(MAX_PLAYERS + 1).unwrap_err(),
            EngineError::TooManyPlayers {
                players: MAX_PLAYERS + 1,
                max: MAX_PLAYERS
            }
        );

        let mut players = full;
        let err = players.push(Player::new("One too many").unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::TooManyPlayers { .. }));
        assert_eq!(players.len(), MAX_PLAYERS);
    }
}
