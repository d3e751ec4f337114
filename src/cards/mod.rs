//! Card system: value objects, catalog, and deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable identity value with optional rank and suit
//! - `CardCatalog`: Registered ranks and suits, special cards, card valuation
//! - `Deck`: Fixed card multiset plus a shuffled working pile
//!
//! ## Special Cards
//!
//! Cards without a suit are wild cards. Special cards (e.g. penalty cards)
//! are recognized by `CardId` and valued by an override, not by rank or suit.

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::{with_article, CardCatalog, RankOrdering};
pub use deck::Deck;
pub use definition::{Card, CardId, Rank, RankId, Suit, SuitId};
