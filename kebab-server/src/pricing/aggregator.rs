//! Price / protein / weight aggregator
//!
//! - `basePrice = size.price`
//! - `ingredientsPrice = Σ price` (duplicates summed)
//! - `totalPrice` rounded to 2 dp, `totalProtein` to 1 dp, `totalWeight` to whole grams
//!
//! Rounding is half away from zero.

use rust_decimal::prelude::*;
use shared::models::{BreakdownLines, Ingredient, PopularCombo, PriceBreakdown, SizeSpec};

use crate::catalog::Catalog;
use crate::composer::{ResolvedComposition, resolve_composition};

const PRICE_DP: u32 = 2;
const PROTEIN_DP: u32 = 1;
const WEIGHT_DP: u32 = 0;

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to `dp` decimal places
#[inline]
pub fn round_to(value: Decimal, dp: u32) -> f64 {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert a monetary Decimal back to f64 (2 decimal places)
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_to(value, PRICE_DP)
}

// ==================== Aggregation ====================

/// Totals for a size and its resolved ingredients
pub fn aggregate(size: &SizeSpec, ingredients: &[Ingredient]) -> PriceBreakdown {
    let base = to_decimal(size.price);

    let (price, protein, weight) = ingredients.iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(price, protein, weight), ing| {
            (
                price + to_decimal(ing.price),
                protein + to_decimal(ing.protein),
                weight + to_decimal(ing.weight),
            )
        },
    );

    PriceBreakdown {
        size: size.key,
        base_price: to_f64(base),
        ingredients_price: to_f64(price),
        total_price: to_f64(base + price),
        total_protein: round_to(protein, PROTEIN_DP),
        total_weight: round_to(weight, WEIGHT_DP),
    }
}

pub fn price_composition(composition: &ResolvedComposition) -> PriceBreakdown {
    aggregate(&composition.size, &composition.ingredients)
}

/// Receipt lines shown under the builder
pub fn breakdown_lines(totals: &PriceBreakdown) -> BreakdownLines {
    BreakdownLines {
        base: format!("{} kebab: ${:.2}", totals.size, totals.base_price),
        ingredients: format!("Ingredients: ${:.2}", totals.ingredients_price),
        total: format!("Total: ${:.2}", totals.total_price),
        protein: format!("Total Protein: {:.1}g", totals.total_protein),
        weight: format!("Total Weight: {:.0}g", totals.total_weight),
    }
}

/// Popular presets priced against the current catalog
pub fn popular_combos(catalog: &Catalog) -> Vec<PopularCombo> {
    catalog
        .combo_presets()
        .iter()
        .filter_map(|preset| {
            match resolve_composition(catalog, Some(preset.size.as_str()), &preset.ingredients) {
                Ok(composition) => Some(PopularCombo {
                    id: preset.id,
                    name: preset.name.clone(),
                    size: preset.size,
                    ingredients: preset.ingredients.clone(),
                    description: preset.description.clone(),
                    estimated_price: price_composition(&composition).total_price,
                }),
                Err(e) => {
                    tracing::warn!(combo = %preset.name, error = %e, "Skipping popular combo");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SizeKey;

    fn resolve(size: &str, ids: &[u32]) -> ResolvedComposition {
        resolve_composition(&Catalog::builtin(), Some(size), ids).unwrap()
    }

    #[test]
    fn test_medium_wheat_chicken() {
        // medium $7.00 + whole wheat $0.50 + grilled chicken $4.50
        let totals = price_composition(&resolve("medium", &[21, 1]));
        assert_eq!(totals.base_price, 7.0);
        assert_eq!(totals.ingredients_price, 5.0);
        assert_eq!(totals.total_price, 12.0);
        assert_eq!(totals.total_protein, 29.5);
        assert_eq!(totals.total_weight, 175.0);
    }

    #[test]
    fn test_unknown_ids_excluded_from_totals() {
        let with_unknown = price_composition(&resolve("medium", &[21, 999, 1]));
        let without = price_composition(&resolve("medium", &[21, 1]));
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_duplicates_are_summed() {
        let totals = price_composition(&resolve("small", &[11, 11, 11]));
        // 3 x garlic aioli $0.30, protein 0.5, weight 15
        assert_eq!(totals.ingredients_price, 0.9);
        assert_eq!(totals.total_price, 5.9);
        assert_eq!(totals.total_protein, 1.5);
        assert_eq!(totals.total_weight, 45.0);
    }

    #[test]
    fn test_no_float_drift() {
        // 0.1-style sums that drift in plain f64 arithmetic
        let totals = price_composition(&resolve("family", &[12, 11, 6, 9, 27]));
        assert_eq!(totals.ingredients_price, 2.95);
        assert_eq!(totals.total_price, 16.95);
    }

    #[test]
    fn test_empty_selection_is_base_only() {
        let totals = price_composition(&resolve("large", &[]));
        assert_eq!(totals.total_price, 9.0);
        assert_eq!(totals.total_protein, 0.0);
        assert_eq!(totals.total_weight, 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(Decimal::new(125, 3), 2), 0.13);
        assert_eq!(round_to(Decimal::new(25, 2), 1), 0.3);
        assert_eq!(round_to(Decimal::new(1755, 1), 0), 176.0);
    }

    #[test]
    fn test_breakdown_lines() {
        let totals = price_composition(&resolve("medium", &[21, 1]));
        let lines = breakdown_lines(&totals);
        assert_eq!(lines.base, "medium kebab: $7.00");
        assert_eq!(lines.ingredients, "Ingredients: $5.00");
        assert_eq!(lines.total, "Total: $12.00");
        assert_eq!(lines.protein, "Total Protein: 29.5g");
        assert_eq!(lines.weight, "Total Weight: 175g");
    }

    #[test]
    fn test_popular_combos_are_priced_live() {
        let combos = popular_combos(&Catalog::builtin());
        assert_eq!(combos.len(), 4);

        let classic = &combos[0];
        assert_eq!(classic.name, "Classic Chicken Kebab");
        assert_eq!(classic.size, SizeKey::Medium);
        // 7.00 + 0.00 + 4.50 + 0.50 + 0.75 + 0.50 + 0.30 + 0.40
        assert_eq!(classic.estimated_price, 13.95);

        let meat = &combos[3];
        // 9.00 + 0.00 + 5.75 + 0.75 + 0.50 + 0.30 + 1.00 + 3.00
        assert_eq!(meat.estimated_price, 20.3);
    }
}
