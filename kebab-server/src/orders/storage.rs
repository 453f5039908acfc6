//! Order persistence
//!
//! The server only needs insert / lookup / list / replace, so the store is a
//! small async trait. `MemoryOrderStore` keeps orders in a `DashMap` keyed by
//! order number; a document database can sit behind the same trait.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::{Order, OrderStatus};
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(n) => AppError::order_not_found(&n),
            StoreError::Duplicate(n) => AppError::new(ErrorCode::OrderNumberConflict)
                .with_detail("orderNumber", n),
            StoreError::Backend(msg) => AppError::internal(msg),
        }
    }
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order. Fails with `Duplicate` if the order number exists.
    async fn insert(&self, order: Order) -> StoreResult<Order>;

    async fn get(&self, order_number: &str) -> StoreResult<Option<Order>>;

    /// Newest first, optionally filtered by status
    async fn list(&self, status: Option<OrderStatus>, limit: usize) -> StoreResult<Vec<Order>>;

    /// Replace an existing order. Fails with `NotFound` if absent.
    async fn update(&self, order: Order) -> StoreResult<Order>;
}

#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: DashMap<String, Order>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: Order) -> StoreResult<Order> {
        match self.orders.entry(order.order_number.clone()) {
            Entry::Occupied(e) => Err(StoreError::Duplicate(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(order.clone());
                Ok(order)
            }
        }
    }

    async fn get(&self, order_number: &str) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(order_number).map(|o| o.value().clone()))
    }

    async fn list(&self, status: Option<OrderStatus>, limit: usize) -> StoreResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .map(|o| o.value().clone())
            .collect();
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.order_number.cmp(&a.order_number))
        });
        orders.truncate(limit);
        Ok(orders)
    }

    async fn update(&self, order: Order) -> StoreResult<Order> {
        match self.orders.get_mut(&order.order_number) {
            Some(mut existing) => {
                *existing = order.clone();
                Ok(order)
            }
            None => Err(StoreError::NotFound(order.order_number)),
        }
    }
}
