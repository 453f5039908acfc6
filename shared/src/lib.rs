//! Shared types for the kebab builder
//!
//! Wire models exchanged with the storefront frontend and the unified
//! error/response envelope used by every HTTP endpoint.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
