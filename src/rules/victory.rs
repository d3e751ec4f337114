//! Victory conditions.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerCollection, PlayerId};
use crate::error::{EngineError, Result};

/// Decides whether the current standings have produced a winner.
pub trait VictoryChecker {
    /// Return the winning player, if any.
    ///
    /// Fails on an empty collection.
    fn victorious_player(&self, players: &PlayerCollection) -> Result<Option<PlayerId>>;
}

/// Victory thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryCheckerSettings {
    /// The leader must have at least this score.
    pub minimum_score_total: i32,
    /// Lead the leader must hold over second place.
    pub required_lead: i32,
    /// Lead must equal `required_lead` exactly instead of exceeding it.
    pub lead_must_be_exact: bool,
}

impl Default for VictoryCheckerSettings {
    fn default() -> Self {
        Self {
            minimum_score_total: 21,
            required_lead: 2,
            lead_must_be_exact: false,
        }
    }
}

/// Score threshold plus lead over second place.
///
/// Players are ranked by descending score; ties keep roster order, so the
/// earlier of two tied leaders is considered first (and cannot win, since
/// its lead is zero unless `required_lead` is exactly zero).
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadVictoryChecker {
    settings: VictoryCheckerSettings,
}

impl LeadVictoryChecker {
    #[must_use]
    pub fn new(settings: VictoryCheckerSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &VictoryCheckerSettings {
        &self.settings
    }

    fn lead_satisfied(&self, lead: i32) -> bool {
        if self.settings.lead_must_be_exact {
            lead == self.settings.required_lead
        } else {
            lead > self.settings.required_lead
        }
    }
}

impl VictoryChecker for LeadVictoryChecker {
    fn victorious_player(&self, players: &PlayerCollection) -> Result<Option<PlayerId>> {
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }

        let mut ranked: Vec<_> = players.iter_with_ids().collect();
        ranked.sort_by(|(_, a), (_, b)| b.score().cmp(&a.score()));

        let (leader, top) = ranked[0];
        if top.score() < self.settings.minimum_score_total {
            return Ok(None);
        }

        match ranked.get(1) {
            None => Ok(Some(leader)),
            Some((_, second)) if self.lead_satisfied(top.score() - second.score()) => {
                Ok(Some(leader))
            }
            Some(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(scores: &[i32]) -> PlayerCollection {
        let mut players = PlayerCollection::numbered(scores.len()).unwrap();
        for (player, &score) in players.iter_mut().zip(scores) {
            player.apply_delta(score);
        }
        players
    }

    fn checker(minimum: i32, lead: i32, exact: bool) -> LeadVictoryChecker {
        LeadVictoryChecker::new(VictoryCheckerSettings {
            minimum_score_total: minimum,
            required_lead: lead,
            lead_must_be_exact: exact,
        })
    }

    #[test]
    fn test_empty_rejected() {
        let result = checker(21, 2, false).victorious_player(&PlayerCollection::new());
        assert_eq!(result, Err(EngineError::NoPlayers));
    }

    #[test]
    fn test_below_minimum() {
        let result = checker(21, 2, false).victorious_player(&roster(&[20, 0]));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_lead_must_exceed() {
        let c = checker(21, 2, false);
        assert_eq!(c.victorious_player(&roster(&[21, 19])), Ok(None));
        assert_eq!(c.victorious_player(&roster(&[18, 21])), Ok(Some(PlayerId::new(1))));
    }

    #[test]
    fn test_exact_lead() {
        let c = checker(21, 2, true);
        assert_eq!(c.victorious_player(&roster(&[21, 19])), Ok(Some(PlayerId::new(0))));
        assert_eq!(c.victorious_player(&roster(&[22, 19])), Ok(None));
    }

    #[test]
    fn test_single_player_wins_at_minimum() {
        let c = checker(21, 2, true);
        assert_eq!(c.victorious_player(&roster(&[21])), Ok(Some(PlayerId::new(0))));
    }

    #[test]
    fn test_tied_leaders_with_zero_exact_lead() {
        // Stable ordering reports the earlier player.
        let c = checker(5, 0, true);
        assert_eq!(c.victorious_player(&roster(&[3, 6, 6])), Ok(Some(PlayerId::new(1))));
    }

    #[test]
    fn test_last_seat_of_full_roster_wins() {
        let mut scores = vec![0; crate::core::player::MAX_PLAYERS];
        *scores.last_mut().unwrap() = 30;
        let players = roster(&scores);

        let winner = checker(21, 2, false).victorious_player(&players).unwrap().unwrap();
        assert_eq!(winner, PlayerId::new(u8::MAX));
        assert_eq!(players[winner].name(), "Player 256");
    }
}
