//! Placement Outcomes
//!
//! Values handed back to the presentation layer after each drop.

use crate::category::Category;
use crate::item::{Item, ItemId};

/// Result of comparing an item's category with the bin it was dropped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { expected: Category },
}

/// A scored placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub item: Item,
    pub bin: Category,
    pub outcome: Outcome,
    /// Set on the placement that emptied the unsorted pool
    pub round_complete: bool,
}

impl Placement {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, Outcome::Correct)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub score: u32,
    pub attempts: u32,
}

/// Round lifecycle; `Completed` is left only by starting a new round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundPhase {
    #[default]
    InProgress,
    Completed,
}

/// What `start_round` found while setting up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub size: usize,
    /// Items with no matching bin; the round cannot complete while they remain
    pub unplaceable: Vec<ItemId>,
}

impl RoundReport {
    pub fn is_completable(&self) -> bool {
        self.unplaceable.is_empty()
    }
}
