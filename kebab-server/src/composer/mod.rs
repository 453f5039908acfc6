//! Composer
//!
//! Resolves a client selection (size key + ingredient ids) against the
//! catalog. Unknown or unavailable ids are dropped, duplicates are kept.

pub mod selection;

pub use selection::{Selection, ToggleOutcome};

use shared::models::{Ingredient, IngredientCategory, SizeKey, SizeSpec};

use crate::catalog::Catalog;
use crate::utils::{AppError, AppResult, ErrorCode};

/// A selection resolved against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComposition {
    pub size: SizeSpec,
    /// Resolved ingredients in request order, duplicates included
    pub ingredients: Vec<Ingredient>,
    /// Ids that did not resolve
    pub dropped: Vec<u32>,
}

impl ResolvedComposition {
    pub fn size_key(&self) -> SizeKey {
        self.size.key
    }

    pub fn in_category(&self, category: IngredientCategory) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|ing| ing.category == category)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// The single tortilla, or `MissingBase` / `MultipleBase`
    pub fn validate_base(&self) -> AppResult<&Ingredient> {
        let tortillas = self.in_category(IngredientCategory::Tortilla);
        match tortillas.as_slice() {
            [base] => Ok(*base),
            [] => Err(AppError::new(ErrorCode::MissingBase)
                .with_detail("field", "selectedIngredients")),
            many => Err(AppError::new(ErrorCode::MultipleBase)
                .with_detail("field", "selectedIngredients")
                .with_detail(
                    "ingredients",
                    many.iter().map(|ing| ing.id).collect::<Vec<_>>(),
                )),
        }
    }
}

/// Parse a size key, mapping anything unknown (or missing) to `InvalidSize`
pub fn parse_size(size_key: Option<&str>) -> AppResult<SizeKey> {
    let raw = size_key.unwrap_or_default();
    raw.parse().map_err(|_| AppError::invalid_size(raw))
}

/// Resolve a selection against the catalog
///
/// Fails only with `InvalidSize`. No pricing or base checks happen here.
pub fn resolve_composition(
    catalog: &Catalog,
    size_key: Option<&str>,
    ingredient_ids: &[u32],
) -> AppResult<ResolvedComposition> {
    let key = parse_size(size_key)?;
    let size = catalog
        .size(key)
        .cloned()
        .ok_or_else(|| AppError::invalid_size(key.as_str()))?;

    let mut ingredients = Vec::with_capacity(ingredient_ids.len());
    let mut dropped = Vec::new();

    for &id in ingredient_ids {
        match catalog.get(id) {
            Some(ing) if ing.available => ingredients.push(ing.clone()),
            _ => dropped.push(id),
        }
    }

    if !dropped.is_empty() {
        tracing::debug!(dropped = ?dropped, "Ignoring unresolved ingredient ids");
    }

    Ok(ResolvedComposition {
        size,
        ingredients,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults;

    #[test]
    fn test_invalid_size() {
        let catalog = Catalog::builtin();
        for bad in [None, Some(""), Some("jumbo"), Some("MEDIUM")] {
            let err = resolve_composition(&catalog, bad, &[1]).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidSize);
            assert_eq!(err.field(), Some("size"));
        }
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let catalog = Catalog::builtin();
        let comp = resolve_composition(&catalog, Some("small"), &[21, 999, 1, 0]).unwrap();
        assert_eq!(
            comp.ingredients.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![21, 1]
        );
        assert_eq!(comp.dropped, vec![999, 0]);
        assert_eq!(comp.size_key(), SizeKey::Small);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let catalog = Catalog::builtin();
        let comp = resolve_composition(&catalog, Some("large"), &[1, 1, 11]).unwrap();
        assert_eq!(comp.ingredients.len(), 3);
    }

    #[test]
    fn test_unavailable_ingredient_dropped() {
        let mut ingredients = defaults::ingredients();
        for ing in ingredients.iter_mut().filter(|i| i.id == 24) {
            ing.available = false;
        }
        let catalog = Catalog::new(ingredients, defaults::sizes(), vec![]).unwrap();
        let comp = resolve_composition(&catalog, Some("medium"), &[20, 24]).unwrap();
        assert_eq!(comp.ingredients.len(), 1);
        assert_eq!(comp.dropped, vec![24]);
    }

    #[test]
    fn test_validate_base() {
        let catalog = Catalog::builtin();

        let comp = resolve_composition(&catalog, Some("medium"), &[20, 1]).unwrap();
        assert_eq!(comp.validate_base().unwrap().id, 20);

        let comp = resolve_composition(&catalog, Some("medium"), &[1, 5]).unwrap();
        assert_eq!(comp.validate_base().unwrap_err().code, ErrorCode::MissingBase);

        let comp = resolve_composition(&catalog, Some("medium"), &[20, 21, 1]).unwrap();
        assert_eq!(
            comp.validate_base().unwrap_err().code,
            ErrorCode::MultipleBase
        );
    }
}
