//! Material Categories
//!
//! The closed set of waste categories items are sorted into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Material category shared by items and bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Paper,
    Plastic,
    Glass,
    Metal,
    Organic,
    Electronics,
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Every category, in bin display order
    pub const ALL: [Category; 6] = [
        Category::Paper,
        Category::Plastic,
        Category::Glass,
        Category::Metal,
        Category::Organic,
        Category::Electronics,
    ];

    /// Stable lowercase key, used in catalogs and `data-*` attributes
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Glass => "glass",
            Category::Metal => "metal",
            Category::Organic => "organic",
            Category::Electronics => "electronics",
        }
    }

    /// Name shown on the bin
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Glass => "Glass",
            Category::Metal => "Metal",
            Category::Organic => "Organic",
            Category::Electronics => "E-Waste",
        }
    }

    /// What belongs in this bin
    pub fn hint(self) -> &'static str {
        match self {
            Category::Paper => "Newspapers, magazines, cardboard",
            Category::Plastic => "Bottles, containers with recycling codes",
            Category::Glass => "Bottles and jars only",
            Category::Metal => "Cans and aluminum foil",
            Category::Organic => "Food scraps and yard waste",
            Category::Electronics => "Phones, computers, batteries",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Paper => "📄",
            Category::Plastic => "🧴",
            Category::Glass => "🍾",
            Category::Metal => "🥫",
            Category::Organic => "🍂",
            Category::Electronics => "🔌",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the lowercase key
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Paper".parse::<Category>().is_err());
        assert!(" paper".parse::<Category>().is_err());
        assert_eq!(
            "e-waste".parse::<Category>(),
            Err(ParseCategoryError("e-waste".to_string()))
        );
    }

    #[test]
    fn test_electronics_bin_is_labelled_e_waste() {
        assert_eq!(Category::Electronics.display_name(), "E-Waste");
        assert_eq!(Category::Glass.hint(), "Bottles and jars only");
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Category::Organic).unwrap();
        assert_eq!(json, "\"organic\"");
        let back: Category = serde_json::from_str("\"metal\"").unwrap();
        assert_eq!(back, Category::Metal);
    }
}
