//! Round scoring.
//!
//! A scorer maps the cards drawn in one round to per-card score deltas,
//! positionally aligned with the input.

use std::sync::Arc;

use crate::cards::Card;
use crate::error::{EngineError, Result};

/// Valuation function supplied by configuration.
pub type CardValueFn = Arc<dyn Fn(&Card) -> i32 + Send + Sync>;

/// Scorer trait.
///
/// `score(cards)[i]` is the delta for the player who drew `cards[i]`.
pub trait Scorer {
    /// Score one round. Fails on an empty sequence.
    fn score(&self, cards: &[Card]) -> Result<Vec<i32>>;
}

/// Scoring configuration.
#[derive(Clone)]
pub struct ScoringSettings {
    /// Raw value of a card, including special-card overrides.
    pub card_value: CardValueFn,
    /// Flat bonus for each card tied for the round's highest value.
    pub winner_bonus: i32,
}

impl ScoringSettings {
    pub fn new(card_value: impl Fn(&Card) -> i32 + Send + Sync + 'static, winner_bonus: i32) -> Self {
        Self {
            card_value: Arc::new(card_value),
            winner_bonus,
        }
    }
}

impl std::fmt::Debug for ScoringSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringSettings")
            .field("winner_bonus", &self.winner_bonus)
            .finish_non_exhaustive()
    }
}

/// Highest card wins the bonus; penalties always apply.
///
/// - If every raw value is negative, the raw values are returned unchanged.
/// - Otherwise every card whose raw value equals the maximum gets
///   `winner_bonus`, other negative cards keep their raw value, and the
///   rest get zero.
///
/// Ties are not broken here: every card sharing the maximum gets the bonus.
///
/// ## Example
///
/// ```
/// use card_round::cards::{Card, CardId};
/// use card_round::rules::{HighCardScorer, Scorer, ScoringSettings};
///
/// let value = |card: &Card| card.id.raw() as i32;
/// let scorer = HighCardScorer::new(ScoringSettings::new(value, 2));
///
/// let cards = [Card::new(CardId::new(10), None, None), Card::new(CardId::new(3), None, None)];
/// assert_eq!(scorer.score(&cards).unwrap(), vec![2, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct HighCardScorer {
    settings: ScoringSettings,
}

impl HighCardScorer {
    #[must_use]
    pub fn new(settings: ScoringSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn winner_bonus(&self) -> i32 {
        self.settings.winner_bonus
    }
}

impl Scorer for HighCardScorer {
    fn score(&self, cards: &[Card]) -> Result<Vec<i32>> {
        let raw: Vec<i32> = cards.iter().map(|c| (self.settings.card_value)(c)).collect();
        let highest = *raw.iter().max().ok_or(EngineError::NoCardsToScore)?;

        if highest < 0 {
            return Ok(raw);
        }

        let bonus = self.settings.winner_bonus;
        Ok(raw
            .into_iter()
            .map(|value| {
                if value == highest {
                    bonus
                } else if value < 0 {
                    value
                } else {
                    0
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    /// Cards whose value is encoded in their id, offset so negatives fit.
    fn cards(values: &[i32]) -> Vec<Card> {
        values
            .iter()
            .map(|&v| Card::new(CardId::new((v + 1000) as u32), None, None))
            .collect()
    }

    fn scorer(bonus: i32) -> HighCardScorer {
        HighCardScorer::new(ScoringSettings::new(
            |c: &Card| c.id.raw() as i32 - 1000,
            bonus,
        ))
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(scorer(2).score(&[]), Err(EngineError::NoCardsToScore));
    }

    #[test]
    fn test_highest_gets_bonus() {
        assert_eq!(scorer(2).score(&cards(&[10, 3])).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_all_tied_share_bonus() {
        assert_eq!(scorer(5).score(&cards(&[7, 7, 1])).unwrap(), vec![5, 5, 0]);
    }

    #[test]
    fn test_penalty_persists_when_not_highest() {
        assert_eq!(scorer(2).score(&cards(&[-1, 9, -1])).unwrap(), vec![-1, 2, -1]);
    }

    #[test]
    fn test_all_negative_returns_raw() {
        assert_eq!(scorer(2).score(&cards(&[-1, -3])).unwrap(), vec![-1, -3]);
    }

    #[test]
    fn test_zero_is_not_negative() {
        // Highest is 0, so the zero-valued cards get the bonus.
        assert_eq!(scorer(2).score(&cards(&[0, -1, 0])).unwrap(), vec![2, -1, 2]);
    }

    #[test]
    fn test_bonus_is_flat() {
        assert_eq!(scorer(2).score(&cards(&[1403])).unwrap(), vec![2]);
    }
}
