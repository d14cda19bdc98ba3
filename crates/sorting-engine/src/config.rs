//! Game Catalog
//!
//! Bins, starter items and the challenge pool, read once at startup.
//! A default catalog is embedded in the crate.

use std::collections::HashSet;

use serde::Deserialize;

use crate::category::Category;
use crate::error::{GameError, GameResult};
use crate::item::Item;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Catalog entry, turned into an [`Item`] when a round is built
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub category: Category,
}

impl ItemSpec {
    pub fn to_item(&self, id: u32) -> Item {
        Item::new(id, self.name.clone(), self.emoji.clone(), self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    pub bins: Vec<Category>,
    pub starter_items: Vec<ItemSpec>,
    pub challenge_pool: Vec<ItemSpec>,
    #[serde(default = "default_challenge_size")]
    pub challenge_size: usize,
}

fn default_challenge_size() -> usize {
    6
}

impl GameConfig {
    /// The catalog shipped with the game
    pub fn builtin() -> GameResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects catalogs that could never start a round
    pub fn validate(&self) -> GameResult<()> {
        if self.bins.is_empty() {
            return Err(GameError::Catalog("no bins configured".to_string()));
        }
        if self.starter_items.is_empty() {
            return Err(GameError::Catalog("no starter items configured".to_string()));
        }
        if self.challenge_size == 0 {
            return Err(GameError::Catalog("challenge size must be at least 1".to_string()));
        }
        // Each pool entry becomes its own item id, so entries must differ
        let mut distinct = HashSet::with_capacity(self.challenge_pool.len());
        if let Some(dup) = self.challenge_pool.iter().find(|spec| !distinct.insert(*spec)) {
            return Err(GameError::Catalog(format!(
                "challenge pool lists \"{}\" more than once",
                dup.name
            )));
        }
        if self.challenge_pool.len() < self.challenge_size {
            return Err(GameError::Catalog(format!(
                "challenge size {} exceeds the {} pool items",
                self.challenge_size,
                self.challenge_pool.len()
            )));
        }
        Ok(())
    }

    /// Starter set, numbered from 1
    pub fn starter_items(&self) -> Vec<Item> {
        numbered(&self.starter_items)
    }

    /// Challenge pool, numbered from 1 in catalog order
    pub fn challenge_items(&self) -> Vec<Item> {
        numbered(&self.challenge_pool)
    }
}

fn numbered(specs: &[ItemSpec]) -> Vec<Item> {
    specs
        .iter()
        .zip(1u32..)
        .map(|(spec, id)| spec.to_item(id))
        .collect()
}
