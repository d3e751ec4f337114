//! The deck: a fixed card multiset plus a shuffled working pile.
//!
//! `cards` never changes after construction. The working pile is rebuilt
//! only by `shuffle`, and `draw` removes exactly one card from its top.

use tracing::debug;

use super::definition::Card;
use crate::core::rng::RandomSource;
use crate::error::{EngineError, Result};

/// A deck of cards drawn without replacement.
///
/// ## Example
///
/// ```
/// use card_round::cards::{Card, CardId, Deck};
/// use card_round::core::GameRng;
///
/// let cards = vec![Card::new(CardId::new(0), None, None); 3];
/// let mut deck = Deck::new(cards, Box::new(GameRng::new(42))).unwrap();
///
/// assert_eq!(deck.remaining(), 3);
/// deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 2);
/// ```
pub struct Deck {
    cards: Vec<Card>,
    /// Working pile; the top is the last element.
    current: Vec<Card>,
    rng: Box<dyn RandomSource>,
}

impl Deck {
    /// Create a deck and shuffle it once.
    ///
    /// Fails if `cards` is empty.
    pub fn new(cards: Vec<Card>, rng: Box<dyn RandomSource>) -> Result<Self> {
        if cards.is_empty() {
            return Err(EngineError::EmptyCardSet);
        }

        let mut deck = Self {
            current: Vec::with_capacity(cards.len()),
            cards,
            rng,
        };
        deck.shuffle();
        Ok(deck)
    }

    /// Rebuild the working pile as a random permutation of every card.
    ///
    /// Each card is tagged with a fresh key in `0..i32::MAX` and the deck is
    /// stable-sorted by key. The sorted cards are pushed onto the pile in
    /// order, so the last one sorted is drawn first.
    pub fn shuffle(&mut self) {
        let rng = &mut self.rng;
        let mut keyed: Vec<(i32, Card)> = self
            .cards
            .iter()
            .map(|&card| (rng.next(0, i32::MAX), card))
            .collect();
        keyed.sort_by_key(|&(key, _)| key);

        self.current.clear();
        self.current.extend(keyed.into_iter().map(|(_, card)| card));

        debug!(cards = self.current.len(), "deck shuffled");
    }

    /// Remove and return the top card of the working pile.
    pub fn draw(&mut self) -> Result<Card> {
        self.current.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Number of configured cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: construction rejects an empty card set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left in the working pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.current.len()
    }

    /// The full configured multiset.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards.len())
            .field("remaining", &self.current.len())
            .finish()
    }
}
