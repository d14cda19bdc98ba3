//! Sorting Game Engine
//!
//! Owns the state of one game board: bins, the unsorted pool and the
//! score counters. All rules live here; callers only translate gestures
//! into [`SortingGame::attempt_placement`] calls and render the results.
//!
//! A board is `InProgress` until the last pending item is placed correctly,
//! then `Completed` until a new round starts.
//!
//! Item ids are never reused within a session: rounds built by the engine
//! take fresh ids, so an id always names the same item.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::category::Category;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::item::{Bin, Item, ItemId};
use crate::outcome::{Outcome, Placement, RoundPhase, RoundReport, ScoreSnapshot};
use crate::summary::{percent_of, RoundSummary};

/// Mutable state of the current round
#[derive(Debug, Clone, Default)]
struct RoundState {
    score: u32,
    attempts: u32,
    /// Number of items the round started with
    total: usize,
    unsorted: Vec<Item>,
    phase: RoundPhase,
}

/// One game board
///
/// The random generator is injected so challenge draws are reproducible
/// under a fixed seed.
#[derive(Debug, Clone)]
pub struct SortingGame<R = StdRng> {
    bins: Vec<Bin>,
    round: RoundState,
    /// Lowest id not yet handed to any round
    next_id: u32,
    rng: R,
}

impl SortingGame<StdRng> {
    pub fn seeded(bins: impl IntoIterator<Item = Category>, seed: u64) -> Self {
        Self::new(bins, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SortingGame<R> {
    /// Creates a board with the given bins and no items. Repeated
    /// categories collapse into one bin.
    pub fn new(bins: impl IntoIterator<Item = Category>, rng: R) -> Self {
        let mut seen = HashSet::new();
        let bins = bins
            .into_iter()
            .filter(|c| seen.insert(*c))
            .map(Bin::new)
            .collect();
        Self {
            bins,
            round: RoundState::default(),
            next_id: 0,
            rng,
        }
    }

    /// Creates a board for `config` and starts the starter round
    pub fn from_config(config: &GameConfig, rng: R) -> GameResult<Self> {
        let mut game = Self::new(config.bins.iter().copied(), rng);
        game.reset(config)?;
        Ok(game)
    }

    /// Begins a new round with `items`, in the order given.
    ///
    /// Items whose category has no bin are reported in the returned
    /// [`RoundReport`]; the round still starts. Ids chosen by the caller
    /// are reserved, so later engine-built rounds never reuse them.
    pub fn start_round(&mut self, items: Vec<Item>) -> GameResult<RoundReport> {
        if items.is_empty() {
            return Err(GameError::EmptyRound);
        }
        let mut ids = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !ids.insert(item.id)) {
            return Err(GameError::DuplicateItem(dup.id));
        }

        if let Some(max) = items.iter().map(|item| item.id.0).max() {
            self.next_id = self.next_id.max(max.saturating_add(1));
        }
        for bin in &mut self.bins {
            bin.sorted.clear();
        }
        self.round = RoundState {
            total: items.len(),
            unsorted: items,
            ..RoundState::default()
        };
        info!(items = self.round.total, "round started");

        let unplaceable = self.unplaceable();
        for id in &unplaceable {
            warn!(item = %id, "item has no matching bin, round cannot complete");
        }
        Ok(RoundReport {
            size: self.round.total,
            unplaceable,
        })
    }

    /// Pending items that no bin accepts
    pub fn unplaceable(&self) -> Vec<ItemId> {
        self.round
            .unsorted
            .iter()
            .filter(|item| !self.has_bin(item.category))
            .map(|item| item.id)
            .collect()
    }

    /// Scores dropping `item_id` onto the bin for `bin`.
    ///
    /// Fails with [`GameError::UnknownItem`] without touching any counter
    /// when the item is not pending, which absorbs repeated drops of the
    /// same gesture.
    pub fn attempt_placement(&mut self, item_id: ItemId, bin: Category) -> GameResult<Placement> {
        let index = self
            .round
            .unsorted
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| {
                debug!(item = %item_id, "placement for an item that is not pending");
                GameError::UnknownItem(item_id)
            })?;

        self.round.attempts += 1;
        let expected = self.round.unsorted[index].category;

        let (item, outcome) = if expected == bin {
            self.round.score += 1;
            let item = self.round.unsorted.remove(index);
            if let Some(target) = self.bins.iter_mut().find(|b| b.accepts(bin)) {
                target.sorted.push(item.clone());
            }
            (item, Outcome::Correct)
        } else {
            (self.round.unsorted[index].clone(), Outcome::Incorrect { expected })
        };
        debug!(item = %item.id, %bin, ?outcome, score = self.round.score, attempts = self.round.attempts, "placement scored");

        let round_complete =
            self.round.unsorted.is_empty() && self.round.phase == RoundPhase::InProgress;
        if round_complete {
            self.round.phase = RoundPhase::Completed;
            info!(score = self.round.score, attempts = self.round.attempts, "round complete");
        }

        Ok(Placement {
            item,
            bin,
            outcome,
            round_complete,
        })
    }

    pub fn current_score(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            score: self.round.score,
            attempts: self.round.attempts,
        }
    }

    /// Draws `count` distinct items from `pool` and starts a round with them.
    ///
    /// Duplicate ids in `pool` count once. Drawn items get fresh ids.
    /// Nothing changes when the pool is too small.
    pub fn new_challenge(&mut self, pool: &[Item], count: usize) -> GameResult<(Vec<Item>, RoundReport)> {
        if count == 0 {
            return Err(GameError::EmptyRound);
        }
        let mut seen = HashSet::with_capacity(pool.len());
        let distinct: Vec<&Item> = pool.iter().filter(|item| seen.insert(item.id)).collect();
        if distinct.len() < count {
            return Err(GameError::InsufficientPool {
                requested: count,
                available: distinct.len(),
            });
        }

        let drawn: Vec<Item> = distinct
            .choose_multiple(&mut self.rng, count)
            .map(|item| (*item).clone())
            .collect();
        let drawn = self.issue_ids(drawn);

        let report = self.start_round(drawn.clone())?;
        Ok((drawn, report))
    }

    /// Restarts with the catalog's starter set, under fresh ids
    pub fn reset(&mut self, config: &GameConfig) -> GameResult<RoundReport> {
        let items = self.issue_ids(config.starter_items());
        self.start_round(items)
    }

    /// New challenge drawn from the catalog's pool at its configured size
    pub fn challenge_from_config(&mut self, config: &GameConfig) -> GameResult<(Vec<Item>, RoundReport)> {
        self.new_challenge(&config.challenge_items(), config.challenge_size)
    }

    fn issue_ids(&mut self, items: Vec<Item>) -> Vec<Item> {
        items
            .into_iter()
            .map(|item| {
                let id = ItemId(self.next_id);
                self.next_id = self.next_id.wrapping_add(1);
                Item { id, ..item }
            })
            .collect()
    }

    pub fn has_bin(&self, category: Category) -> bool {
        self.bins.iter().any(|b| b.accepts(category))
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Items still waiting to be sorted, in round order
    pub fn unsorted(&self) -> &[Item] {
        &self.round.unsorted
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn is_completed(&self) -> bool {
        self.round.phase == RoundPhase::Completed
    }

    pub fn round_size(&self) -> usize {
        self.round.total
    }

    /// Share of the round's items sorted so far
    pub fn progress_percent(&self) -> u32 {
        percent_of(self.round.score, self.round.total)
    }

    /// Score card, available once the round is complete
    pub fn summary(&self) -> Option<RoundSummary> {
        self.is_completed()
            .then(|| RoundSummary::new(self.round.score, self.round.total, self.round.attempts))
    }
}
