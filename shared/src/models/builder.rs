//! Kebab builder request/response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ingredient::{Ingredient, IngredientCategory};
use super::order::{Address, DeliveryType, OrderSource, PaymentMethod};
use super::size::{SizeKey, SizeSpec};

// =============================================================================
// Menu
// =============================================================================

/// Full menu snapshot consumed by the frontend composer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    pub base_prices: BTreeMap<SizeKey, SizeSpec>,
    pub ingredient_categories: Vec<IngredientCategory>,
    pub sizes: Vec<SizeKey>,
    pub ingredients: Vec<Ingredient>,
}

/// `GET /api/ingredients` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientListing {
    pub ingredients: Vec<Ingredient>,
    pub base_prices: BTreeMap<SizeKey, SizeSpec>,
    pub categories: Vec<IngredientCategory>,
    pub sizes: Vec<SizeKey>,
}

/// Preset composition with a live-computed price
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularCombo {
    pub id: u32,
    pub name: String,
    pub size: SizeKey,
    pub ingredients: Vec<u32>,
    pub description: String,
    pub estimated_price: f64,
}

// =============================================================================
// Pricing
// =============================================================================

/// Totals for a resolved composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub size: SizeKey,
    pub base_price: f64,
    pub ingredients_price: f64,
    pub total_price: f64,
    pub total_protein: f64,
    pub total_weight: f64,
}

/// Human readable receipt lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLines {
    pub base: String,
    pub ingredients: String,
    pub total: String,
    pub protein: String,
    pub weight: String,
}

/// Body shared by calculate, preview and prompts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRequest {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub selected_ingredients: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub totals: PriceBreakdown,
    pub selected_ingredients: Vec<Ingredient>,
    pub breakdown: BreakdownLines,
}

/// `POST /api/kebab-builder/create` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKebabRequest {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub selected_ingredients: Vec<u32>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default)]
    pub delivery_address: Option<Address>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub order_source: Option<OrderSource>,
}

// =============================================================================
// Preview
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Base,
    Protein,
    Vegetable,
    Sauce,
    Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLayer {
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub name: String,
    pub color: String,
    pub image: String,
    /// Percent of the tortilla covered; absent for the base layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSize {
    pub name: SizeKey,
    pub dimensions: String,
    pub length: f64,
    pub width: f64,
    pub weight: f64,
    pub serves: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visualization {
    pub svg: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KebabPreview {
    pub size: PreviewSize,
    pub layers: Vec<PreviewLayer>,
    pub visualization: Visualization,
}

// =============================================================================
// Image generation
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub diameter: f64,
    #[serde(default)]
    pub weight: f64,
}

/// Composition summary passed to the image generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KebabData {
    pub size: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub measurements: Measurements,
}

/// `POST /api/kebab-builder/generate-images` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesRequest {
    #[serde(default)]
    pub open_kebab_prompt: Option<String>,
    #[serde(default)]
    pub wrapped_kebab_prompt: Option<String>,
    #[serde(default)]
    pub kebab_data: Option<KebabData>,
    #[serde(default)]
    pub open_kebab_prompt_compact: Option<String>,
    #[serde(default)]
    pub wrapped_kebab_prompt_compact: Option<String>,
}

/// Prompts built from catalog descriptors, ready to post to generate-images
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSet {
    pub open_kebab_prompt: String,
    pub wrapped_kebab_prompt: String,
    pub open_kebab_prompt_compact: String,
    pub wrapped_kebab_prompt_compact: String,
    pub kebab_data: KebabData,
}

/// Outcome of one tier attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierAttempt {
    pub service: String,
    /// "success", "rate_limited", "timeout", "service_unavailable" or "skipped"
    pub outcome: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub service: String,
    pub model: String,
    pub generation_time: String,
    pub resolution: String,
    pub style: String,
    pub cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub attempts: Vec<TierAttempt>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImages {
    pub open_kebab_image: String,
    pub wrapped_kebab_image: String,
    pub metadata: ImageMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_response_is_flat() {
        let resp = CalculateResponse {
            totals: PriceBreakdown {
                size: SizeKey::Medium,
                base_price: 7.0,
                ingredients_price: 5.0,
                total_price: 12.0,
                total_protein: 29.5,
                total_weight: 175.0,
            },
            selected_ingredients: vec![],
            breakdown: BreakdownLines {
                base: "medium kebab: $7.00".into(),
                ingredients: "Ingredients: $5.00".into(),
                total: "Total: $12.00".into(),
                protein: "Total Protein: 29.5g".into(),
                weight: "Total Weight: 175g".into(),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalPrice"], 12.0);
        assert_eq!(json["size"], "medium");
        assert_eq!(json["breakdown"]["total"], "Total: $12.00");
    }

    #[test]
    fn test_generate_images_request_tolerates_missing_fields() {
        let req: GenerateImagesRequest =
            serde_json::from_str(r#"{"openKebabPrompt":"open"}"#).unwrap();
        assert_eq!(req.open_kebab_prompt.as_deref(), Some("open"));
        assert!(req.wrapped_kebab_prompt.is_none());
        assert!(req.kebab_data.is_none());
    }

    #[test]
    fn test_size_keyed_map_serializes_by_name() {
        let mut map = BTreeMap::new();
        map.insert(SizeKey::Large, 1);
        map.insert(SizeKey::Small, 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"small":2,"large":1}"#);
    }
}
