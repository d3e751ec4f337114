//! Round engine and its composition root.
//!
//! - `CardGame`: runs draw, score and end-check stages each round and
//!   tracks whether the game is over
//! - `CardGameBuilder`: assembles a `CardGame` from `GameSettings`

pub mod builder;
pub mod game;

pub use builder::CardGameBuilder;
pub use game::{CardGame, RoundOutcome};
