//! Card value objects.
//!
//! A `Card` is an immutable identity value. Its rank and suit are keys into
//! the `CardCatalog`, where every configured rank and suit is registered
//! exactly once. Two cards share a rank only if they carry the same `RankId`;
//! matching text is not enough.

use serde::{Deserialize, Serialize};

/// Identity of a card within a catalog.
///
/// Duplicates in a deck (e.g. four penalty cards) are the same card and
/// therefore carry the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Key of a registered rank (face value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankId(pub u16);

/// Key of a registered suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitId(pub u16);

/// A registered rank.
///
/// `weight` is `None` for ranks that exist only to name a special card; such
/// ranks contribute nothing to a card's value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub value: String,
    pub weight: Option<i32>,
}

/// A registered suit. See [`Rank`] for the meaning of `weight`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suit {
    pub name: String,
    pub weight: Option<i32>,
}

/// A playing card.
///
/// A card without a suit is a wild or special card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Option<RankId>,
    pub suit: Option<SuitId>,
}

impl Card {
    /// Create a card. Cards are normally minted by the catalog.
    #[must_use]
    pub const fn new(id: CardId, rank: Option<RankId>, suit: Option<SuitId>) -> Self {
        Self { id, rank, suit }
    }

    /// Does this card belong to a suit?
    #[must_use]
    pub const fn has_suit(&self) -> bool {
        self.suit.is_some()
    }
}
