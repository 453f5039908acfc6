//! Ingredient API Handlers

use axum::extract::{Path, State};
use serde::Deserialize;
use shared::models::{
    CompositionRequest, Ingredient, IngredientCategory, IngredientListing, KebabPreview,
};

use crate::composer::resolve_composition;
use crate::core::ServerState;
use crate::imaging::build_preview;
use crate::utils::validation::validate_selection_len;
use crate::utils::{ApiResponse, AppError, AppJson, AppQuery, AppResult, ErrorCode, ok};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

fn parse_category(raw: &str) -> AppResult<IngredientCategory> {
    raw.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidCategory)
            .with_detail("field", "category")
            .with_detail("value", raw)
    })
}

/// GET /api/ingredients - catalog listing, optionally filtered by category
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<ApiResponse<IngredientListing>> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(parse_category)
        .transpose()?;
    Ok(ok(state.catalog.listing(category)))
}

/// GET /api/ingredients/{id} - single ingredient
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Ingredient>> {
    let id: u32 = id
        .parse()
        .map_err(|_| AppError::invalid_field("id", format!("Invalid ingredient id: {id}")))?;
    let ingredient = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::ingredient_not_found(id))?;
    Ok(ok(ingredient))
}

/// POST /api/ingredients/preview - layered preview with inline SVG
pub async fn preview(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CompositionRequest>,
) -> AppResult<ApiResponse<KebabPreview>> {
    let size = payload.size.as_deref().filter(|s| !s.is_empty());
    let (Some(size), Some(ids)) = (size, payload.selected_ingredients.as_deref()) else {
        return Err(AppError::invalid_request(
            "Size and selected ingredients are required",
        ));
    };
    validate_selection_len(ids)?;

    let composition = resolve_composition(&state.catalog, Some(size), ids)?;
    Ok(ok(build_preview(&state.catalog, &composition)))
}
