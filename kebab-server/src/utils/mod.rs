//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`] (from shared::error)
//! - [`extract::AppJson`] / [`extract::AppQuery`] extractors with envelope rejections
//! - logging and input validation helpers

pub mod error;
pub mod extract;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use error::{ok, ok_with_message};
pub use extract::{AppJson, AppQuery};
