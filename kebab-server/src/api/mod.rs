//! API routes
//!
//! - [`health`] - liveness check
//! - [`ingredients`] - catalog listing, lookup and preview
//! - [`kebab_builder`] - menu, pricing, order creation, prompts and images
//! - [`orders`] - order lookup, listing and status transitions

pub mod health;
pub mod ingredients;
pub mod kebab_builder;
pub mod orders;
