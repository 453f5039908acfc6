//! Prompt builder
//!
//! Prompts are assembled from each ingredient's `visual_description`, so new
//! menu items need no code change here.

use shared::models::{Ingredient, IngredientCategory, KebabData, Measurements, PromptSet};

use crate::composer::ResolvedComposition;

/// Unique ingredients in selection order
fn distinct(composition: &ResolvedComposition) -> Vec<&Ingredient> {
    let mut seen = Vec::new();
    for ing in &composition.ingredients {
        if !seen.iter().any(|s: &&Ingredient| s.id == ing.id) {
            seen.push(ing);
        }
    }
    seen
}

/// Generator input summary for a composition
pub fn kebab_data(composition: &ResolvedComposition) -> KebabData {
    let size = &composition.size;
    KebabData {
        size: size.key.as_str().to_string(),
        ingredients: distinct(composition)
            .into_iter()
            .map(|ing| ing.name.clone())
            .collect(),
        measurements: Measurements {
            length: size.length,
            diameter: size.diameter,
            weight: size.weight,
        },
    }
}

pub fn build_prompts(composition: &ResolvedComposition) -> PromptSet {
    let size = &composition.size;
    let label = size.key.as_str();
    let ingredients = distinct(composition);

    let fillings: Vec<&str> = ingredients
        .iter()
        .filter(|ing| ing.category != IngredientCategory::Tortilla)
        .map(|ing| ing.visual_description.as_str())
        .collect();
    let wrap = ingredients
        .iter()
        .find(|ing| ing.category == IngredientCategory::Tortilla)
        .map(|ing| ing.visual_description.as_str())
        .unwrap_or("a soft flour tortilla");
    let names: Vec<&str> = ingredients
        .iter()
        .filter(|ing| ing.category != IngredientCategory::Tortilla)
        .map(|ing| ing.name.as_str())
        .collect();

    let filling_text = if fillings.is_empty() {
        "no fillings".to_string()
    } else {
        fillings.join(", ")
    };

    let open_kebab_prompt = format!(
        "Professional food photography of an open {label} kebab laid flat on a wooden board, \
         top-down view. Base: {wrap}. Toppings spread evenly: {filling_text}. \
         {length} cm long, natural daylight, shallow depth of field, high detail, appetizing",
        length = size.length,
    );
    let wrapped_kebab_prompt = format!(
        "Professional food photography of a tightly wrapped {label} kebab made with {wrap}, \
         {length} cm long and {diameter} cm in diameter, about {weight} g, side view on a white \
         plate next to a ruler for scale, studio lighting, high detail",
        length = size.length,
        diameter = size.diameter,
        weight = size.weight,
    );

    let open_kebab_prompt_compact = if names.is_empty() {
        format!("open {label} kebab, plain tortilla, top-down food photo")
    } else {
        format!("open {label} kebab with {}, top-down food photo", names.join(", "))
    };
    let wrapped_kebab_prompt_compact = format!(
        "wrapped {label} kebab, {} cm x {} cm, food photo, white background",
        size.length, size.diameter
    );

    PromptSet {
        open_kebab_prompt,
        wrapped_kebab_prompt,
        open_kebab_prompt_compact,
        wrapped_kebab_prompt_compact,
        kebab_data: kebab_data(composition),
    }
}
