//! Order API Handlers

use axum::extract::{Path, State};
use serde::Deserialize;
use shared::models::{Order, OrderStatus, OrderStatusUpdate};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppJson, AppQuery, AppResult, ok, ok_with_message};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<OrderStatus>,
    limit: Option<usize>,
}

/// GET /api/orders - newest first, optional status filter
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let orders = state.orders.list(query.status, limit).await?;
    Ok(ok(orders))
}

/// GET /api/orders/{order_number} - single order
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(order_number): Path<String>,
) -> AppResult<ApiResponse<Order>> {
    Ok(ok(state.orders.get(&order_number).await?))
}

/// PATCH /api/orders/{order_number}/status - status transition
pub async fn update_status(
    State(state): State<ServerState>,
    Path(order_number): Path<String>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<ApiResponse<Order>> {
    let order = state.orders.update_status(&order_number, &payload).await?;
    Ok(ok_with_message(order, "Order status updated"))
}
