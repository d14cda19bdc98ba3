//! UI Components
//!
//! Leptos components for the sorting board.

mod feedback_banner;
mod game_controls;
mod item_tray;
mod recycling_bin;
mod score_board;

pub use feedback_banner::{CompletionCard, FeedbackBanner};
pub use game_controls::GameControls;
pub use item_tray::ItemTray;
pub use recycling_bin::RecyclingBin;
pub use score_board::ScoreBoard;
