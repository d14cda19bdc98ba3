//! Engine Errors
//!
//! Every failure here is local and recoverable. Round state is never
//! modified by a call that returns an error.

use thiserror::Error;

use crate::item::ItemId;

/// Common result type for engine operations
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Placement for an item that is not pending (stale or repeated drop)
    #[error("item {0} is not waiting to be sorted")]
    UnknownItem(ItemId),

    #[error("challenge needs {requested} distinct items but the pool has {available}")]
    InsufficientPool { requested: usize, available: usize },

    #[error("a round needs at least one item")]
    EmptyRound,

    #[error("item id {0} appears more than once in the round")]
    DuplicateItem(ItemId),

    #[error("invalid catalog: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Catalog(err.to_string())
    }
}
