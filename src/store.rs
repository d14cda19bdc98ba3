//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The engine is
//! the source of truth; the store mirrors what the board renders.

use leptos::prelude::*;
use reactive_stores::Store;
use sorting_engine::{Bin, Item, RoundSummary, SortingGame};

use crate::feedback::{BinFlash, Feedback};

/// Rendered board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Items still in the tray
    pub unsorted: Vec<Item>,
    /// Bins with their sorted items
    pub bins: Vec<Bin>,
    pub score: u32,
    pub attempts: u32,
    /// Percent of the round sorted
    pub progress: u32,
    /// Shown once the completion delay has passed
    pub summary: Option<RoundSummary>,
    pub feedback: Option<Feedback>,
    /// Bumped on every new message, so stale auto-hide timers do nothing
    pub feedback_seq: u32,
    pub flashes: Vec<BinFlash>,
    pub hints_visible: bool,
}

impl BoardState {
    pub fn from_engine(game: &SortingGame) -> Self {
        let score = game.current_score();
        Self {
            unsorted: game.unsorted().to_vec(),
            bins: game.bins().to_vec(),
            score: score.score,
            attempts: score.attempts,
            progress: game.progress_percent(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Copy round state from the engine into the store
pub fn store_sync_round(store: &BoardStore, game: &SortingGame) {
    let score = game.current_score();
    *store.unsorted().write() = game.unsorted().to_vec();
    *store.bins().write() = game.bins().to_vec();
    *store.score().write() = score.score;
    *store.attempts().write() = score.attempts;
    *store.progress().write() = game.progress_percent();
}

/// Replace the banner message, returning its sequence number
pub fn store_show_feedback(store: &BoardStore, feedback: Feedback) -> u32 {
    let seq = store.feedback_seq().get_untracked().wrapping_add(1);
    *store.feedback_seq().write() = seq;
    *store.feedback().write() = Some(feedback);
    seq
}

/// Clear the banner if it still shows message `seq`
pub fn store_hide_feedback(store: &BoardStore, seq: u32) {
    if store.feedback_seq().get_untracked() == seq {
        *store.feedback().write() = None;
    }
}

pub fn store_add_flash(store: &BoardStore, flash: BinFlash) {
    store.flashes().write().push(flash);
}

pub fn store_remove_flash(store: &BoardStore, flash_id: u32) {
    store.flashes().write().retain(|flash| flash.id != flash_id);
}
