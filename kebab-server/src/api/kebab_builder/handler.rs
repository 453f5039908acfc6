//! Kebab Builder API Handlers

use axum::extract::State;
use shared::models::{
    CalculateResponse, CompositionRequest, CreateKebabRequest, GenerateImagesRequest,
    GeneratedImages, MenuConfig, Order, PopularCombo, PromptSet,
};

use crate::composer::{ResolvedComposition, resolve_composition};
use crate::core::ServerState;
use crate::imaging::{ImageRequest, build_prompts};
use crate::orders::OrderRequest;
use crate::pricing::{breakdown_lines, popular_combos, price_composition};
use crate::utils::validation::validate_selection_len;
use crate::utils::{ApiResponse, AppJson, AppResult, ok, ok_with_message};

fn compose(
    state: &ServerState,
    size: Option<&str>,
    ids: &[u32],
) -> AppResult<ResolvedComposition> {
    validate_selection_len(ids)?;
    resolve_composition(&state.catalog, size, ids)
}

/// GET /api/kebab-builder/config - menu snapshot
pub async fn config(State(state): State<ServerState>) -> ApiResponse<MenuConfig> {
    ok(state.catalog.menu())
}

/// GET /api/kebab-builder/popular - preset combos priced against the current menu
pub async fn popular(State(state): State<ServerState>) -> ApiResponse<Vec<PopularCombo>> {
    ok(popular_combos(&state.catalog))
}

/// POST /api/kebab-builder/calculate - price breakdown
pub async fn calculate(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CompositionRequest>,
) -> AppResult<ApiResponse<CalculateResponse>> {
    let ids = payload.selected_ingredients.unwrap_or_default();
    let composition = compose(&state, payload.size.as_deref(), &ids)?;
    let totals = price_composition(&composition);

    Ok(ok(CalculateResponse {
        breakdown: breakdown_lines(&totals),
        totals,
        selected_ingredients: composition.ingredients,
    }))
}

/// POST /api/kebab-builder/create - materialize and persist an order
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CreateKebabRequest>,
) -> AppResult<ApiResponse<Order>> {
    let composition = compose(&state, payload.size.as_deref(), &payload.selected_ingredients)?;
    let breakdown = price_composition(&composition);
    let request = OrderRequest::from_create(&payload);

    let order = state.orders.place(&composition, &breakdown, &request).await?;
    Ok(ok_with_message(order, "Kebab order created successfully"))
}

/// POST /api/kebab-builder/prompts - image prompts for a composition
pub async fn prompts(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CompositionRequest>,
) -> AppResult<ApiResponse<PromptSet>> {
    let ids = payload.selected_ingredients.unwrap_or_default();
    let composition = compose(&state, payload.size.as_deref(), &ids)?;
    Ok(ok(build_prompts(&composition)))
}

/// POST /api/kebab-builder/generate-images - tiered generation, local fallback
pub async fn generate_images(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<GenerateImagesRequest>,
) -> AppResult<ApiResponse<GeneratedImages>> {
    let request = ImageRequest::from_generate(payload)?;
    let images = state.images.generate(&request).await;
    Ok(ok_with_message(images, "Images generated successfully"))
}
