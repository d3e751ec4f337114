//! Card catalog: registered ranks, suits, special cards and card valuation.
//!
//! The catalog is the single owner of rank and suit identities. Every card
//! in a deck is minted here, and `card_value` is the valuation the scorer
//! consumes.
//!
//! ## Valuation
//!
//! - Special cards (looked up by `CardId`) return their configured score change.
//! - Otherwise the value is `rank_weight * rank_modifier + suit_weight * suit_modifier`,
//!   where the modifiers depend on [`RankOrdering`]. Unweighted or missing
//!   ranks and suits contribute zero. The arithmetic saturates at the `i32`
//!   bounds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, Rank, RankId, Suit, SuitId};
use crate::core::config::GameSettings;

/// Which component dominates a card's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankOrdering {
    /// Rank weight × 100 plus suit weight.
    #[default]
    FaceValueFirst,
    /// Suit weight × 100 plus rank weight.
    SuitFirst,
}

impl RankOrdering {
    const MAJOR: i32 = 100;
    const MINOR: i32 = 1;

    fn modifiers(self) -> (i32, i32) {
        match self {
            RankOrdering::FaceValueFirst => (Self::MAJOR, Self::MINOR),
            RankOrdering::SuitFirst => (Self::MINOR, Self::MAJOR),
        }
    }
}

/// Registry of ranks, suits and cards for one game configuration.
///
/// ## Example
///
/// ```
/// use card_round::cards::{CardCatalog, RankOrdering};
///
/// let mut catalog = CardCatalog::new(RankOrdering::FaceValueFirst);
/// let hearts = catalog.add_suit("Hearts", 2);
/// let ten = catalog.add_rank("Ten", 10);
/// let card = catalog.add_card(Some(ten), Some(hearts));
///
/// assert_eq!(catalog.card_value(&card), 1002);
/// assert_eq!(catalog.describe(&card), "the Ten of Hearts");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    ranks: Vec<Rank>,
    suits: Vec<Suit>,
    /// Full deck multiset, in registration order.
    cards: Vec<Card>,
    /// Score overrides for special cards.
    special: FxHashMap<CardId, i32>,
    ordering: RankOrdering,
    next_id: u32,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(ordering: RankOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    /// Build the catalog described by `settings`.
    ///
    /// Deck order: every suit crossed with every face value (suits outer),
    /// followed by each special card repeated `count` times. Special cards
    /// get their own unweighted rank and suit entries.
    #[must_use]
    pub fn from_settings(settings: &GameSettings) -> Self {
        let ordering = if settings.rank_cards_by_face_value_first {
            RankOrdering::FaceValueFirst
        } else {
            RankOrdering::SuitFirst
        };
        let mut catalog = Self::new(ordering);

        let suits: Vec<_> = settings
            .suits
            .iter()
            .map(|s| catalog.add_suit(s.name.clone(), s.rank))
            .collect();
        let ranks: Vec<_> = settings
            .face_values
            .iter()
            .map(|f| catalog.add_rank(f.value.clone(), f.rank))
            .collect();

        for &suit in &suits {
            for &rank in &ranks {
                catalog.add_card(Some(rank), Some(suit));
            }
        }

        for special in &settings.special_cards {
            let rank = special
                .value
                .as_ref()
                .map(|v| catalog.add_unweighted_rank(v.clone()));
            let suit = special
                .suit
                .as_ref()
                .map(|s| catalog.add_unweighted_suit(s.clone()));
            catalog.add_special_card(rank, suit, special.score_change, special.count);
        }

        catalog
    }

    /// Register a weighted suit.
    pub fn add_suit(&mut self, name: impl Into<String>, weight: i32) -> SuitId {
        self.push_suit(name.into(), Some(weight))
    }

    /// Register a suit that carries no weight.
    pub fn add_unweighted_suit(&mut self, name: impl Into<String>) -> SuitId {
        self.push_suit(name.into(), None)
    }

    /// Register a weighted rank.
    pub fn add_rank(&mut self, value: impl Into<String>, weight: i32) -> RankId {
        self.push_rank(value.into(), Some(weight))
    }

    /// Register a rank that carries no weight.
    pub fn add_unweighted_rank(&mut self, value: impl Into<String>) -> RankId {
        self.push_rank(value.into(), None)
    }

    fn push_suit(&mut self, name: String, weight: Option<i32>) -> SuitId {
        let id = SuitId(self.suits.len() as u16);
        self.suits.push(Suit { name, weight });
        id
    }

    fn push_rank(&mut self, value: String, weight: Option<i32>) -> RankId {
        let id = RankId(self.ranks.len() as u16);
        self.ranks.push(Rank { value, weight });
        id
    }

    fn mint(&mut self, rank: Option<RankId>, suit: Option<SuitId>) -> Card {
        let card = Card::new(CardId::new(self.next_id), rank, suit);
        self.next_id += 1;
        card
    }

    /// Mint a card and add one copy of it to the deck.
    pub fn add_card(&mut self, rank: Option<RankId>, suit: Option<SuitId>) -> Card {
        let card = self.mint(rank, suit);
        self.cards.push(card);
        card
    }

    /// Mint a special card valued at `score_change` and add `count` copies.
    pub fn add_special_card(
        &mut self,
        rank: Option<RankId>,
        suit: Option<SuitId>,
        score_change: i32,
        count: u32,
    ) -> Card {
        let card = self.mint(rank, suit);
        self.special.insert(card.id, score_change);
        self.cards
            .extend(std::iter::repeat(card).take(count as usize));
        card
    }

    /// The full card multiset.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn rank(&self, id: RankId) -> Option<&Rank> {
        self.ranks.get(id.0 as usize)
    }

    #[must_use]
    pub fn suit(&self, id: SuitId) -> Option<&Suit> {
        self.suits.get(id.0 as usize)
    }

    #[must_use]
    pub fn is_special(&self, card: &Card) -> bool {
        self.special.contains_key(&card.id)
    }

    /// Raw value of a card.
    #[must_use]
    pub fn card_value(&self, card: &Card) -> i32 {
        if let Some(&score_change) = self.special.get(&card.id) {
            return score_change;
        }

        let (rank_modifier, suit_modifier) = self.ordering.modifiers();
        let rank_weight = card
            .rank
            .and_then(|r| self.rank(r))
            .and_then(|r| r.weight)
            .unwrap_or(0);
        let suit_weight = card
            .suit
            .and_then(|s| self.suit(s))
            .and_then(|s| s.weight)
            .unwrap_or(0);

        rank_weight
            .saturating_mul(rank_modifier)
            .saturating_add(suit_weight.saturating_mul(suit_modifier))
    }

    /// Human-readable name: "the Ten of Hearts" or "a Penalty card".
    #[must_use]
    pub fn describe(&self, card: &Card) -> String {
        let rank = card
            .rank
            .and_then(|r| self.rank(r))
            .map_or("", |r| r.value.as_str());

        match card.suit.and_then(|s| self.suit(s)) {
            Some(suit) if rank.is_empty() => format!("the {} card", suit.name),
            Some(suit) => format!("the {} of {}", rank, suit.name),
            None if rank.is_empty() => "a card".to_string(),
            None => format!("{} card", with_article(rank)),
        }
    }
}

/// Prefix `text` with "a" or "an" depending on its first letter.
#[must_use]
pub fn with_article(text: &str) -> String {
    match text.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A' | 'E' | 'I' | 'O' | 'U') => format!("an {text}"),
        _ => format!("a {text}"),
    }
}
