//! Error codes shared by the server and the storefront frontend
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no resolvable line items
    OrderEmpty = 4002,
    /// Composition has no tortilla
    MissingBase = 4003,
    /// Composition has more than one tortilla
    MultipleBase = 4004,
    /// Generated order number already taken
    OrderNumberConflict = 4005,
    /// Line item quantity outside 1..=10
    QuantityOutOfRange = 4006,
    /// Delivery order without an address
    DeliveryAddressRequired = 4007,

    // ==================== 6xxx: Catalog ====================
    /// Ingredient not found
    IngredientNotFound = 6001,
    /// Size key is not one of the enumerated sizes
    InvalidSize = 6002,
    /// Unknown ingredient category
    InvalidCategory = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Catalog file could not be loaded
    CatalogLoadFailed = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::MissingBase => "A tortilla must be selected",
            ErrorCode::MultipleBase => "Only one tortilla can be selected",
            ErrorCode::OrderNumberConflict => "Order number already exists",
            ErrorCode::QuantityOutOfRange => "Item quantity must be between 1 and 10",
            ErrorCode::DeliveryAddressRequired => "Delivery address is required for delivery orders",

            // Catalog
            ErrorCode::IngredientNotFound => "Ingredient not found",
            ErrorCode::InvalidSize => "Invalid size specified",
            ErrorCode::InvalidCategory => "Invalid ingredient category",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::CatalogLoadFailed => "Failed to load catalog",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::MissingBase),
            4004 => Ok(ErrorCode::MultipleBase),
            4005 => Ok(ErrorCode::OrderNumberConflict),
            4006 => Ok(ErrorCode::QuantityOutOfRange),
            4007 => Ok(ErrorCode::DeliveryAddressRequired),

            6001 => Ok(ErrorCode::IngredientNotFound),
            6002 => Ok(ErrorCode::InvalidSize),
            6003 => Ok(ErrorCode::InvalidCategory),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9005 => Ok(ErrorCode::CatalogLoadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
