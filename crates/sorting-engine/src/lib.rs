//! Sorting Engine
//!
//! Rules and round state for the "sort the waste" game: items are dropped
//! onto category bins, correct drops are scored and removed, and the round
//! completes when nothing is left to sort.
//!
//! The crate knows nothing about the DOM. A presentation layer owns one
//! [`SortingGame`] per board and forwards drops to it.

mod category;
mod config;
mod engine;
mod error;
mod item;
mod outcome;
mod summary;

#[cfg(test)]
mod tests;

pub use category::{Category, ParseCategoryError};
pub use config::{GameConfig, ItemSpec};
pub use engine::SortingGame;
pub use error::{GameError, GameResult};
pub use item::{Bin, Item, ItemId};
pub use outcome::{Outcome, Placement, RoundPhase, RoundReport, ScoreSnapshot};
pub use summary::{percent_of, Rating, RoundSummary};
