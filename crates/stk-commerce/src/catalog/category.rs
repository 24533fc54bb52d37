//! Product categories.

use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapons,
    Money,
    Watches,
    Scripts,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Category; 4] = [
        Category::Weapons,
        Category::Money,
        Category::Watches,
        Category::Scripts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapons => "weapons",
            Category::Money => "money",
            Category::Watches => "watches",
            Category::Scripts => "scripts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Weapons => "Weapons",
            Category::Money => "Money",
            Category::Watches => "Watches",
            Category::Scripts => "Scripts",
        }
    }

    /// Whether products in this line need a variant chosen before they can
    /// be added to the cart.
    pub fn requires_variant(&self) -> bool {
        matches!(self, Category::Weapons)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weapons" => Ok(Category::Weapons),
            "money" => Ok(Category::Money),
            "watches" => Ok(Category::Watches),
            "scripts" => Ok(Category::Scripts),
            _ => Err(ShopError::InvalidCategory(s.to_string())),
        }
    }
}

/// Category selection in the filter state: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ShopError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("weapons".parse::<Category>().unwrap(), Category::Weapons);
        assert_eq!(" Money ".parse::<Category>().unwrap(), Category::Money);
        assert!("electronics".parse::<Category>().is_err());
    }

    #[test]
    fn test_requires_variant() {
        assert!(Category::Weapons.requires_variant());
        assert!(!Category::Money.requires_variant());
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Scripts));
        assert!(CategoryFilter::Only(Category::Money).matches(Category::Money));
        assert!(!CategoryFilter::Only(Category::Money).matches(Category::Watches));
    }

    #[test]
    fn test_filter_serde() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Watches)).unwrap();
        assert_eq!(json, "\"watches\"");

        let all: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, CategoryFilter::All);

        assert!(serde_json::from_str::<CategoryFilter>("\"books\"").is_err());
    }
}
