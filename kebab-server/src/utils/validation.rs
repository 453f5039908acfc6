//! Input validation helpers
//!
//! Centralized text length constants for free-text request fields.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 100;

/// Special instructions on an order
pub const MAX_NOTE_LEN: usize = 500;

/// Image prompts accepted from the frontend
pub const MAX_PROMPT_LEN: usize = 4000;

/// Free-text size label inside image generation payloads
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Most ingredient ids accepted in one selection
pub const MAX_SELECTION_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Reject oversized ingredient selections before resolving them.
pub fn validate_selection_len(ids: &[u32]) -> Result<(), AppError> {
    if ids.len() > MAX_SELECTION_LEN {
        return Err(AppError::invalid_field(
            "selectedIngredients",
            format!(
                "Too many ingredients selected ({}, max {MAX_SELECTION_LEN})",
                ids.len()
            ),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max_len {
            return Err(AppError::invalid_field(
                field,
                format!("{field} is too long ({len} chars, max {max_len})"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("open kebab", "openKebabPrompt", 20).is_ok());

        let err = validate_required_text("   ", "openKebabPrompt", 20).unwrap_err();
        assert_eq!(err.field(), Some("openKebabPrompt"));

        assert!(validate_required_text(&"x".repeat(21), "openKebabPrompt", 20).is_err());
    }

    #[test]
    fn test_optional_text_counts_chars() {
        assert!(validate_optional_text(&None, "specialInstructions", 5).is_ok());
        // 5 chars, 10 bytes
        assert!(validate_optional_text(&Some("ñññññ".into()), "specialInstructions", 5).is_ok());
        assert!(validate_optional_text(&Some("123456".into()), "specialInstructions", 5).is_err());
    }

    #[test]
    fn test_selection_len() {
        assert!(validate_selection_len(&[1; MAX_SELECTION_LEN]).is_ok());
        let err = validate_selection_len(&[1; MAX_SELECTION_LEN + 1]).unwrap_err();
        assert_eq!(err.field(), Some("selectedIngredients"));
    }
}
