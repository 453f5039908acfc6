//! Catalog
//!
//! Single source of truth for ingredients, sizes and popular presets.
//! Built once at startup (built-in menu or `CATALOG_PATH`) and shared
//! read-only through `Arc<Catalog>`.

pub mod defaults;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::models::{
    Ingredient, IngredientCategory, IngredientListing, MenuConfig, SizeKey, SizeSpec,
};

use crate::utils::{AppError, AppResult, ErrorCode};

/// Preset composition shown on the popular shelf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboPreset {
    pub id: u32,
    pub name: String,
    pub size: SizeKey,
    pub ingredients: Vec<u32>,
    pub description: String,
}

/// On-disk catalog format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    ingredients: Vec<Ingredient>,
    sizes: Vec<SizeSpec>,
    #[serde(default)]
    popular: Option<Vec<ComboPreset>>,
}

/// Swatch color used when a catalog entry carries none
fn fallback_color(category: IngredientCategory) -> &'static str {
    match category {
        IngredientCategory::Tortilla => "#F5E6D3",
        IngredientCategory::Protein => "#DEB887",
        IngredientCategory::Vegetable => "#90EE90",
        IngredientCategory::Sauce => "#F5F5DC",
        IngredientCategory::Extra => "#FFD700",
    }
}

fn load_error(msg: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::CatalogLoadFailed, msg)
}

#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    by_id: HashMap<u32, usize>,
    sizes: BTreeMap<SizeKey, SizeSpec>,
    combos: Vec<ComboPreset>,
}

impl Catalog {
    /// Build and validate a catalog
    pub fn new(
        ingredients: Vec<Ingredient>,
        sizes: Vec<SizeSpec>,
        combos: Vec<ComboPreset>,
    ) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(ingredients.len());
        let mut normalized = Vec::with_capacity(ingredients.len());

        for (idx, mut ing) in ingredients.into_iter().enumerate() {
            if by_id.insert(ing.id, idx).is_some() {
                return Err(load_error(format!("Duplicate ingredient id {}", ing.id)));
            }
            if ing.price < 0.0 || ing.protein < 0.0 || ing.weight < 0.0 {
                return Err(load_error(format!(
                    "Ingredient {} has a negative price, protein or weight",
                    ing.id
                )));
            }
            ing.single_selection = ing.category.is_single_selection();
            if ing.color.trim().is_empty() {
                ing.color = fallback_color(ing.category).to_string();
            }
            if ing.visual_description.trim().is_empty() {
                ing.visual_description = ing.name.to_lowercase();
            }
            normalized.push(ing);
        }

        let sizes: BTreeMap<SizeKey, SizeSpec> = sizes.into_iter().map(|s| (s.key, s)).collect();
        if let Some(missing) = SizeKey::ALL.iter().find(|k| !sizes.contains_key(k)) {
            return Err(load_error(format!("Catalog is missing size '{}'", missing)));
        }

        for combo in &combos {
            let unknown: Vec<u32> = combo
                .ingredients
                .iter()
                .copied()
                .filter(|id| !by_id.contains_key(id))
                .collect();
            if !unknown.is_empty() {
                tracing::warn!(
                    combo = %combo.name,
                    unknown = ?unknown,
                    "Popular combo references unknown ingredients"
                );
            }
        }

        Ok(Self {
            ingredients: normalized,
            by_id,
            sizes,
            combos,
        })
    }

    /// Built-in menu
    pub fn builtin() -> Self {
        let ingredients = defaults::ingredients();
        Self {
            by_id: ingredients
                .iter()
                .enumerate()
                .map(|(idx, ing)| (ing.id, idx))
                .collect(),
            ingredients,
            sizes: defaults::sizes().into_iter().map(|s| (s.key, s)).collect(),
            combos: defaults::combos(),
        }
    }

    /// Load a catalog from a JSON file
    ///
    /// Popular presets fall back to the built-in ones when the file has none.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| load_error(format!("Cannot read {}: {}", path.display(), e)))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .map_err(|e| load_error(format!("Invalid catalog {}: {}", path.display(), e)))?;

        let combos = file.popular.unwrap_or_else(defaults::combos);
        let catalog = Self::new(file.ingredients, file.sizes, combos)?;
        tracing::info!(
            path = %path.display(),
            ingredients = catalog.ingredients.len(),
            "Catalog loaded from file"
        );
        Ok(catalog)
    }

    /// `CATALOG_PATH` when configured, built-in menu otherwise
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Ingredient> {
        self.by_id.get(&id).map(|&idx| &self.ingredients[idx])
    }

    /// Ingredients in display order, optionally filtered by category
    pub fn list(&self, category: Option<IngredientCategory>) -> Vec<Ingredient> {
        self.ingredients
            .iter()
            .filter(|ing| category.is_none_or(|c| ing.category == c))
            .cloned()
            .collect()
    }

    pub fn size(&self, key: SizeKey) -> Option<&SizeSpec> {
        self.sizes.get(&key)
    }

    pub fn sizes(&self) -> &BTreeMap<SizeKey, SizeSpec> {
        &self.sizes
    }

    pub fn categories(&self) -> Vec<IngredientCategory> {
        IngredientCategory::ALL.to_vec()
    }

    /// Base used by the preview when the selection has no tortilla
    pub fn default_base(&self) -> Option<&Ingredient> {
        self.ingredients
            .iter()
            .find(|ing| ing.category == IngredientCategory::Tortilla)
    }

    pub fn combo_presets(&self) -> &[ComboPreset] {
        &self.combos
    }

    /// Swatch color for an ingredient name, if it is on the menu
    pub fn color_for_name(&self, name: &str) -> Option<&str> {
        self.ingredients
            .iter()
            .find(|ing| ing.name.eq_ignore_ascii_case(name))
            .map(|ing| ing.color.as_str())
    }

    /// Full menu snapshot for the builder
    pub fn menu(&self) -> MenuConfig {
        MenuConfig {
            base_prices: self.sizes.clone(),
            ingredient_categories: self.categories(),
            sizes: SizeKey::ALL.to_vec(),
            ingredients: self.list(None),
        }
    }

    pub fn listing(&self, category: Option<IngredientCategory>) -> IngredientListing {
        IngredientListing {
            ingredients: self.list(category),
            base_prices: self.sizes.clone(),
            categories: self.categories(),
            sizes: SizeKey::ALL.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
