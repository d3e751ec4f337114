//! Scoring and victory rules.
//!
//! Both are pure functions behind traits:
//! - `Scorer` turns a round's drawn cards into per-card score deltas
//! - `VictoryChecker` turns the current standings into an optional winner
//!
//! The engine calls into these traits but never interprets card values or
//! thresholds directly.

pub mod scorer;
pub mod victory;

pub use scorer::{CardValueFn, HighCardScorer, Scorer, ScoringSettings};
pub use victory::{LeadVictoryChecker, VictoryChecker, VictoryCheckerSettings};
