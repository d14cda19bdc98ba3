//! Items and Bins
//!
//! Sortable pieces of waste and the bins they are dropped into.

use std::fmt;

use crate::category::Category;

/// Identifier of an item; the engine never reuses one within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sortable piece of waste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub emoji: String,
    pub category: Category,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, emoji: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            emoji: emoji.into(),
            category,
        }
    }

    /// Display text: icon followed by name
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.emoji, self.name)
        }
    }

    /// Copy of this item under a different id
    pub fn with_id(&self, id: ItemId) -> Self {
        Self { id, ..self.clone() }
    }
}

/// A drop target accepting one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    pub category: Category,
    /// Items correctly sorted into this bin during the current round
    pub sorted: Vec<Item>,
}

impl Bin {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            sorted: Vec::new(),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_puts_icon_first() {
        let item = Item::new(1, "Newspaper", "📰", Category::Paper);
        assert_eq!(item.label(), "📰 Newspaper");

        let plain = Item::new(2, "Mystery", "", Category::Metal);
        assert_eq!(plain.label(), "Mystery");
    }

    #[test]
    fn test_with_id_keeps_everything_else() {
        let item = Item::new(7, "Battery", "🔋", Category::Electronics);
        let moved = item.with_id(ItemId(0));
        assert_eq!(moved.id, ItemId(0));
        assert_eq!(moved.name, item.name);
        assert_eq!(moved.category, item.category);
    }

    #[test]
    fn test_bin_accepts_only_its_category() {
        let bin = Bin::new(Category::Glass);
        assert!(bin.accepts(Category::Glass));
        assert!(!bin.accepts(Category::Plastic));
        assert!(bin.sorted.is_empty());
    }
}
