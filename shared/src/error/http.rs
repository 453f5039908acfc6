//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::IngredientNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::OrderNumberConflict => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::CatalogLoadFailed | Self::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation and business rules)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::IngredientNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_bad_request_status() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidSize,
            ErrorCode::OrderEmpty,
            ErrorCode::MissingBase,
            ErrorCode::MultipleBase,
            ErrorCode::QuantityOutOfRange,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST, "{code:?}");
        }
    }

    #[test]
    fn test_conflict_and_system_status() {
        assert_eq!(
            ErrorCode::OrderNumberConflict.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::CatalogLoadFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
