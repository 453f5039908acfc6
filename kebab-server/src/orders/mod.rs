//! Orders
//!
//! - **number**: `ORD-YYYYMMDD-NNN` generation
//! - **storage**: `OrderStore` trait and the in-process store
//! - **materializer**: priced composition + customer data → `Order`, plus the
//!   `OrderService` that persists it and drives status transitions
//!
//! # Data Flow
//!
//! ```text
//! CreateKebabRequest → resolve → price → materialize → OrderStore::insert
//!                                                        ↓ (duplicate number)
//!                                                  one retry, fresh suffix
//! ```

pub mod materializer;
pub mod number;
pub mod storage;

pub use materializer::{OrderRequest, OrderService, materialize};
pub use number::{format_order_number, generate_order_number, is_order_number};
pub use storage::{MemoryOrderStore, OrderStore, StoreError, StoreResult};
