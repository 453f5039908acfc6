//! Error handling
//!
//! Re-exports the unified error types from `shared::error` and adds
//! the success helpers handlers return.
//!
//! ```ignore
//! Err(AppError::order_not_found(&number))
//!
//! Ok(ok(data))
//! ```

use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Success envelope with the default message
pub fn ok<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse::success(data)
}

/// Success envelope with a custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::success_with_message(message, data)
}
