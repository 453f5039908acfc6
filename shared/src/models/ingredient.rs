//! Ingredient Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ingredient category
///
/// Canonical names are singular. Plural spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    #[serde(alias = "tortillas")]
    Tortilla,
    #[serde(alias = "proteins")]
    Protein,
    #[serde(alias = "vegetables")]
    Vegetable,
    #[serde(alias = "sauces")]
    Sauce,
    #[serde(alias = "extras")]
    Extra,
}

impl IngredientCategory {
    /// Display order used by the menu and the renderers
    pub const ALL: [IngredientCategory; 5] = [
        Self::Tortilla,
        Self::Protein,
        Self::Vegetable,
        Self::Sauce,
        Self::Extra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tortilla => "tortilla",
            Self::Protein => "protein",
            Self::Vegetable => "vegetable",
            Self::Sauce => "sauce",
            Self::Extra => "extra",
        }
    }

    /// At most one ingredient of this category may be in a composition
    pub fn is_single_selection(&self) -> bool {
        matches!(self, Self::Tortilla)
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ingredient category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for IngredientCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tortilla" | "tortillas" => Ok(Self::Tortilla),
            "protein" | "proteins" => Ok(Self::Protein),
            "vegetable" | "vegetables" => Ok(Self::Vegetable),
            "sauce" | "sauces" => Ok(Self::Sauce),
            "extra" | "extras" => Ok(Self::Extra),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Ingredient entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    pub category: IngredientCategory,
    /// Unit price in dollars
    pub price: f64,
    /// Protein in grams
    pub protein: f64,
    /// Weight in grams
    pub weight: f64,
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Phrase used when building image prompts (e.g. "golden grilled chicken strips")
    #[serde(default)]
    pub visual_description: String,
    /// Swatch color for the local renderers
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_true")]
    pub available: bool,
    /// Derived from the category when loading; tortillas only
    #[serde(default)]
    pub single_selection: bool,
}
