//! Client-owned selection state
//!
//! Mirrors the cart-side builder state the storefront keeps locally. The
//! server never stores a `Selection`; it only receives its size and ids.
//! Tortillas behave like a radio group, everything else toggles.

use serde::{Deserialize, Serialize};
use shared::models::SizeKey;

use crate::catalog::Catalog;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// A single-selection ingredient replaced the previous one
    Replaced { previous: u32 },
    /// Not on the menu or not available; selection unchanged
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub size: Option<SizeKey>,
    pub selected_ingredients: Vec<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_size(&mut self, size: SizeKey) {
        self.size = Some(size);
    }

    pub fn contains(&self, id: u32) -> bool {
        self.selected_ingredients.contains(&id)
    }

    pub fn ingredient_ids(&self) -> &[u32] {
        &self.selected_ingredients
    }

    pub fn clear(&mut self) {
        self.size = None;
        self.selected_ingredients.clear();
    }

    /// Toggle an ingredient on or off
    pub fn toggle(&mut self, catalog: &Catalog, id: u32) -> ToggleOutcome {
        let Some(ingredient) = catalog.get(id) else {
            return ToggleOutcome::Rejected;
        };

        if self.contains(id) {
            self.selected_ingredients.retain(|&x| x != id);
            return ToggleOutcome::Removed;
        }

        if !ingredient.available {
            return ToggleOutcome::Rejected;
        }

        if ingredient.single_selection {
            let previous = self.selected_ingredients.iter().copied().find(|&x| {
                catalog
                    .get(x)
                    .is_some_and(|other| other.category == ingredient.category)
            });
            if let Some(prev) = previous {
                self.selected_ingredients
                    .retain(|&x| catalog.get(x).is_none_or(|o| o.category != ingredient.category));
                self.selected_ingredients.push(id);
                return ToggleOutcome::Replaced { previous: prev };
            }
        }

        self.selected_ingredients.push(id);
        ToggleOutcome::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::resolve_composition;

    #[test]
    fn test_second_tortilla_replaces_first() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.select_size(SizeKey::Medium);

        assert_eq!(sel.toggle(&catalog, 20), ToggleOutcome::Added);
        assert_eq!(sel.toggle(&catalog, 1), ToggleOutcome::Added);
        assert_eq!(
            sel.toggle(&catalog, 22),
            ToggleOutcome::Replaced { previous: 20 }
        );
        assert_eq!(sel.ingredient_ids(), &[1, 22]);

        let comp =
            resolve_composition(&catalog, sel.size.map(|s| s.as_str()), sel.ingredient_ids())
                .unwrap();
        assert_eq!(comp.validate_base().unwrap().id, 22);
    }

    #[test]
    fn test_same_tortilla_deselects() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.toggle(&catalog, 21);
        assert_eq!(sel.toggle(&catalog, 21), ToggleOutcome::Removed);
        assert!(sel.ingredient_ids().is_empty());
    }

    #[test]
    fn test_multi_select_categories_toggle() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(&catalog, 5), ToggleOutcome::Added);
        assert_eq!(sel.toggle(&catalog, 6), ToggleOutcome::Added);
        assert_eq!(sel.toggle(&catalog, 5), ToggleOutcome::Removed);
        assert_eq!(sel.ingredient_ids(), &[6]);
    }

    #[test]
    fn test_unknown_ingredient_rejected() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(&catalog, 404), ToggleOutcome::Rejected);
        assert!(sel.ingredient_ids().is_empty());
    }

    #[test]
    fn test_serializes_like_request_body() {
        let mut sel = Selection::new();
        sel.select_size(SizeKey::Large);
        sel.selected_ingredients = vec![20, 2];
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["size"], "large");
        assert_eq!(json["selectedIngredients"], serde_json::json!([20, 2]));
    }
}
