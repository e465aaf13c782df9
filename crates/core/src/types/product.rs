//! Catalog product records.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Laptops,
    Desktops,
    Accessories,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 3] = [Self::Laptops, Self::Desktops, Self::Accessories];

    /// The URL slug for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Laptops => "laptops",
            Self::Desktops => "desktops",
            Self::Accessories => "accessories",
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Laptops => "Laptops",
            Self::Desktops => "Desktops",
            Self::Accessories => "Accessories",
        }
    }

    /// Parse a URL slug. Unknown slugs return `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a product's specification sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub key: String,
    pub value: String,
}

/// An immutable catalog record.
///
/// `condition` is kept as the raw text from the catalog table. Some records
/// list several conditions joined by commas (`"new,used"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub condition: String,
    /// Path of the product image under `/static`.
    pub image: String,
    /// Average review score out of 5.
    pub rating: f32,
    /// Specification sheet, in display order.
    pub specs: Vec<ProductSpec>,
}
