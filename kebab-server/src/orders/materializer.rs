//! Order materializer
//!
//! `materialize` is pure: it turns a resolved, priced composition plus
//! customer data into an `Order`. `OrderService` owns the clock, the order
//! number source and the store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use shared::models::{
    CreateKebabRequest, CustomerInfo, DeliveryType, Order, OrderItem, OrderSource, OrderStatus,
    OrderStatusUpdate, OrderSummary, PaymentMethod, PaymentStatus, PriceBreakdown,
};
use validator::Validate;

use super::number::generate_order_number;
use super::storage::{OrderStore, StoreError};
use crate::composer::ResolvedComposition;
use crate::pricing::{round_to, to_decimal, to_f64};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Most units of one ingredient on a single order line
pub const MAX_LINE_QUANTITY: u32 = 10;

const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Customer-side inputs to materialization
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub delivery_type: DeliveryType,
    pub special_instructions: Option<String>,
    pub payment_method: PaymentMethod,
    pub order_source: OrderSource,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl OrderRequest {
    pub fn from_create(req: &CreateKebabRequest) -> Self {
        Self {
            customer: CustomerInfo {
                name: non_blank(&req.customer_name)
                    .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string()),
                email: non_blank(&req.customer_email),
                phone: non_blank(&req.customer_phone),
                address: req.delivery_address.clone(),
            },
            delivery_type: req.delivery_type.unwrap_or_default(),
            special_instructions: req.special_instructions.clone(),
            payment_method: req.payment_method.unwrap_or_default(),
            order_source: req.order_source.unwrap_or_default(),
        }
    }

    pub fn guest(delivery_type: DeliveryType) -> Self {
        Self {
            customer: CustomerInfo {
                name: DEFAULT_CUSTOMER_NAME.to_string(),
                email: None,
                phone: None,
                address: None,
            },
            delivery_type,
            special_instructions: None,
            payment_method: PaymentMethod::default(),
            order_source: OrderSource::default(),
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.customer.name, "customerName", MAX_NAME_LEN)?;
        self.customer.validate()?;
        validate_optional_text(&self.special_instructions, "specialInstructions", MAX_NOTE_LEN)?;

        if self.delivery_type == DeliveryType::Delivery && self.customer.address.is_none() {
            return Err(AppError::new(ErrorCode::DeliveryAddressRequired)
                .with_detail("field", "deliveryAddress"));
        }
        Ok(())
    }
}

/// Fold duplicate ingredient ids into quantities, keeping first-seen order
fn build_items(composition: &ResolvedComposition) -> AppResult<Vec<OrderItem>> {
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut lines: Vec<(usize, u32)> = Vec::new();

    for (pos, ing) in composition.ingredients.iter().enumerate() {
        match index.get(&ing.id) {
            Some(&line) => lines[line].1 += 1,
            None => {
                index.insert(ing.id, lines.len());
                lines.push((pos, 1));
            }
        }
    }

    lines
        .into_iter()
        .map(|(pos, quantity)| {
            let ing = &composition.ingredients[pos];
            if quantity > MAX_LINE_QUANTITY {
                return Err(AppError::with_message(
                    ErrorCode::QuantityOutOfRange,
                    format!(
                        "{} selected {} times, at most {} allowed",
                        ing.name, quantity, MAX_LINE_QUANTITY
                    ),
                )
                .with_detail("ingredientId", ing.id)
                .with_detail("quantity", quantity));
            }

            let qty = Decimal::from(quantity);
            Ok(OrderItem {
                ingredient_id: ing.id,
                name: ing.name.clone(),
                category: ing.category,
                quantity,
                unit_price: ing.price,
                total_price: to_f64(to_decimal(ing.price) * qty),
                protein: round_to(to_decimal(ing.protein) * qty, 1),
                weight: round_to(to_decimal(ing.weight) * qty, 0),
            })
        })
        .collect()
}

/// Build an `Order` from a priced composition
///
/// Checks run in order: empty selection, tortilla base, line quantities,
/// customer fields, delivery address.
pub fn materialize(
    composition: &ResolvedComposition,
    breakdown: &PriceBreakdown,
    request: &OrderRequest,
    order_number: String,
    now: DateTime<Utc>,
) -> AppResult<Order> {
    if composition.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "selectedIngredients"));
    }
    composition.validate_base()?;

    let items = build_items(composition)?;
    request.validate()?;

    let item_count = items.iter().map(|i| i.quantity).sum();

    Ok(Order {
        order_number,
        customer_info: request.customer.clone(),
        size: composition.size_key(),
        items,
        summary: OrderSummary {
            base_price: breakdown.base_price,
            ingredients_price: breakdown.ingredients_price,
            total_price: breakdown.total_price,
            total_protein: breakdown.total_protein,
            total_weight: breakdown.total_weight,
            item_count,
        },
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        payment_method: request.payment_method,
        delivery_type: request.delivery_type,
        special_instructions: request.special_instructions.clone().unwrap_or_default(),
        order_source: request.order_source,
        estimated_delivery_time: now + Duration::minutes(request.delivery_type.lead_time_minutes()),
        actual_delivery_time: None,
        created_at: now,
        updated_at: now,
    })
}

/// Produces an order number for a creation instant
pub type OrderNumberSource = Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync>;

/// Order persistence + lifecycle
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    next_number: OrderNumberSource,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            next_number: Arc::new(generate_order_number),
        }
    }

    /// Replace the random order number source (tests, sequence-backed stores)
    pub fn with_number_source(
        store: Arc<dyn OrderStore>,
        source: impl Fn(DateTime<Utc>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            store,
            next_number: Arc::new(source),
        }
    }

    /// Materialize and persist. A duplicate order number is retried once with
    /// a fresh suffix; a second collision surfaces as `OrderNumberConflict`.
    pub async fn place(
        &self,
        composition: &ResolvedComposition,
        breakdown: &PriceBreakdown,
        request: &OrderRequest,
    ) -> AppResult<Order> {
        let now = Utc::now();
        let order = materialize(composition, breakdown, request, (self.next_number)(now), now)?;

        let saved = match self.store.insert(order.clone()).await {
            Ok(saved) => saved,
            Err(StoreError::Duplicate(taken)) => {
                let retry = Order {
                    order_number: (self.next_number)(now),
                    ..order
                };
                tracing::warn!(
                    taken = %taken,
                    retry = %retry.order_number,
                    "Order number collision, retrying once"
                );
                self.store.insert(retry).await?
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            order_number = %saved.order_number,
            size = %saved.size,
            total = saved.summary.total_price,
            items = saved.summary.item_count,
            "Order created"
        );
        Ok(saved)
    }

    pub async fn get(&self, order_number: &str) -> AppResult<Order> {
        self.store
            .get(order_number)
            .await?
            .ok_or_else(|| AppError::order_not_found(order_number))
    }

    pub async fn list(&self, status: Option<OrderStatus>, limit: usize) -> AppResult<Vec<Order>> {
        Ok(self.store.list(status, limit).await?)
    }

    /// Any status may follow any other. `Delivered` stamps the delivery time.
    pub async fn update_status(
        &self,
        order_number: &str,
        update: &OrderStatusUpdate,
    ) -> AppResult<Order> {
        let mut order = self.get(order_number).await?;
        let now = Utc::now();
        let previous = order.status;

        order.status = update.status;
        if let Some(payment) = update.payment_status {
            order.payment_status = payment;
        }
        if update.status == OrderStatus::Delivered {
            order.actual_delivery_time = Some(now);
        }
        order.updated_at = now;

        let saved = self.store.update(order).await?;
        tracing::info!(
            order_number = %saved.order_number,
            from = previous.as_str(),
            to = saved.status.as_str(),
            "Order status updated"
        );
        Ok(saved)
    }
}
