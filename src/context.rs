//! Game Context
//!
//! The board's engine instance, provided via Leptos Context API.
//! Components call into it instead of touching engine state directly.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reactive_stores::Store;
use sorting_engine::{Category, GameConfig, GameError, GameResult, ItemId, RoundReport, SortingGame};
use tracing::{debug, info, warn};

use crate::feedback::{self, BinFlash, Feedback, FlashKind, COMPLETION_DELAY_MS, FEEDBACK_HIDE_MS};
use crate::store::{
    store_add_flash, store_hide_feedback, store_remove_flash, store_show_feedback, store_sync_round,
    BoardState, BoardStateStoreFields, BoardStore,
};

/// One game board: engine, catalog and rendered state
#[derive(Clone, Copy)]
pub struct GameContext {
    engine: StoredValue<SortingGame>,
    config: StoredValue<GameConfig>,
    /// Rendered state, read by components
    pub board: BoardStore,
    next_flash_id: StoredValue<u32>,
}

impl GameContext {
    /// Builds the board and starts the starter round
    pub fn new(config: GameConfig, seed: u64) -> GameResult<Self> {
        let game = SortingGame::from_config(&config, StdRng::seed_from_u64(seed))?;
        let board = Store::new(BoardState::from_engine(&game));
        info!(seed, bins = game.bins().len(), "sorting game ready");

        let ctx = Self {
            engine: StoredValue::new(game),
            config: StoredValue::new(config),
            board,
            next_flash_id: StoredValue::new(0),
        };
        ctx.show(Feedback::info("🎯 Drag items to the correct bins to start playing!"));
        Ok(ctx)
    }

    pub fn bin_categories(&self) -> Vec<Category> {
        self.engine
            .with_value(|game| game.bins().iter().map(|bin| bin.category).collect())
    }

    /// Handle a finished drop of `item` onto `bin`
    pub fn place(&self, item: ItemId, bin: Category) {
        let Some(result) = self
            .engine
            .try_update_value(|game| game.attempt_placement(item, bin))
        else {
            return;
        };

        match result {
            Ok(placement) => {
                self.sync();
                self.show(feedback::for_placement(&placement));
                for (bin, kind) in feedback::flashes_for(&placement) {
                    self.flash(bin, kind);
                }
                if placement.round_complete {
                    self.schedule_completion();
                }
            }
            // Repeated drop from the same gesture
            Err(GameError::UnknownItem(id)) => debug!(item = %id, "ignoring stale drop"),
            Err(err) => warn!(%err, "placement rejected"),
        }
    }

    /// Restart with the starter items
    pub fn reset(&self) {
        let config = self.config;
        let result = self
            .engine
            .try_update_value(|game| config.with_value(|config| game.reset(config)));
        if let Some(result) = result {
            self.after_new_round(result, "🔄 Game reset! Try again!");
        }
    }

    /// Restart with a random draw from the pool
    pub fn new_challenge(&self) {
        let config = self.config;
        let result = self.engine.try_update_value(|game| {
            config
                .with_value(|config| game.challenge_from_config(config))
                .map(|(_, report)| report)
        });
        if let Some(result) = result {
            self.after_new_round(result, "🎲 New challenge created! Good luck!");
        }
    }

    pub fn toggle_hints(&self) {
        let visible = !self.board.hints_visible().get_untracked();
        *self.board.hints_visible().write() = visible;
        let message = if visible { "💡 Hints are now visible!" } else { "💡 Hints hidden!" };
        self.show(Feedback::info(message));
    }

    /// Show a banner message that hides itself after a while
    pub fn show(&self, feedback: Feedback) {
        let board = self.board;
        let seq = store_show_feedback(&board, feedback);
        Timeout::new(FEEDBACK_HIDE_MS, move || store_hide_feedback(&board, seq)).forget();
    }

    fn after_new_round(&self, result: GameResult<RoundReport>, message: &str) {
        match result {
            Ok(report) => {
                self.sync();
                *self.board.summary().write() = None;
                self.board.flashes().write().clear();
                match feedback::for_round_report(&report) {
                    Some(warning) => self.show(warning),
                    None => self.show(Feedback::info(message)),
                }
            }
            Err(err) => {
                warn!(%err, "could not start a new round");
                self.show(Feedback::new(feedback::FeedbackKind::Error, format!("❌ {}", err)));
            }
        }
    }

    fn sync(&self) {
        let board = self.board;
        self.engine.with_value(|game| store_sync_round(&board, game));
    }

    fn flash(&self, bin: Category, kind: FlashKind) {
        let Some(id) = self.next_flash_id.try_update_value(|next| {
            *next = next.wrapping_add(1);
            *next
        }) else {
            return;
        };
        let board = self.board;
        store_add_flash(&board, BinFlash { id, bin, kind });
        Timeout::new(kind.duration_ms(), move || store_remove_flash(&board, id)).forget();
    }

    fn schedule_completion(&self) {
        let ctx = *self;
        Timeout::new(COMPLETION_DELAY_MS, move || {
            // None if a new round started during the delay
            let Some(summary) = ctx.engine.try_with_value(|game| game.summary()).flatten() else {
                return;
            };
            *ctx.board.summary().write() = Some(summary);
            ctx.show(feedback::for_completion(&summary));
        })
        .forget();
    }
}

/// Get the game context
pub fn use_game() -> GameContext {
    use_context::<GameContext>().expect("GameContext should be provided")
}
