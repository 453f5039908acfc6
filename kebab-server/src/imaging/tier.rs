//! Image tier contract
//!
//! Every generator, remote or local, answers an [`ImageRequest`] with either
//! a pair of images or one of three failure kinds. The orchestrator treats all
//! failure kinds the same: log and advance.

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::models::{GenerateImagesRequest, KebabData, PromptSet};
use thiserror::Error;

use crate::utils::AppError;
use crate::utils::validation::{MAX_PROMPT_LEN, MAX_SHORT_TEXT_LEN};

/// Why a remote tier gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TierFailure {
    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("timed out")]
    Timeout,

    #[error("rate limited")]
    RateLimited,
}

impl TierFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "service_unavailable",
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
        }
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited
        } else {
            Self::ServiceUnavailable
        }
    }

    /// Classify a transport error
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::ServiceUnavailable
        }
    }
}

/// Validated generation input
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub open_prompt: String,
    pub wrapped_prompt: String,
    /// Short variants for URL-based services
    pub open_compact: Option<String>,
    pub wrapped_compact: Option<String>,
    pub kebab: KebabData,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ImageRequest {
    /// Validate a `generate-images` body. Missing or blank prompts and a
    /// missing `kebabData` are rejected with `InvalidRequest`.
    pub fn from_generate(req: GenerateImagesRequest) -> Result<Self, AppError> {
        let (Some(open_prompt), Some(wrapped_prompt), Some(kebab)) = (
            required(req.open_kebab_prompt),
            required(req.wrapped_kebab_prompt),
            req.kebab_data,
        ) else {
            return Err(AppError::invalid_request(
                "Missing required parameters for image generation",
            ));
        };

        let request = Self {
            open_prompt,
            wrapped_prompt,
            open_compact: required(req.open_kebab_prompt_compact),
            wrapped_compact: required(req.wrapped_kebab_prompt_compact),
            kebab,
        };
        request.check_lengths()?;
        Ok(request)
    }

    fn check_lengths(&self) -> Result<(), AppError> {
        let prompts = [
            ("openKebabPrompt", Some(&self.open_prompt)),
            ("wrappedKebabPrompt", Some(&self.wrapped_prompt)),
            ("openKebabPromptCompact", self.open_compact.as_ref()),
            ("wrappedKebabPromptCompact", self.wrapped_compact.as_ref()),
        ];
        for (field, value) in prompts {
            if value.is_some_and(|v| v.chars().count() > MAX_PROMPT_LEN) {
                return Err(AppError::invalid_field(
                    field,
                    format!("{field} is too long (max {MAX_PROMPT_LEN} chars)"),
                ));
            }
        }
        if self.kebab.size.chars().count() > MAX_SHORT_TEXT_LEN {
            return Err(AppError::invalid_field(
                "kebabData.size",
                format!("kebabData.size is too long (max {MAX_SHORT_TEXT_LEN} chars)"),
            ));
        }
        Ok(())
    }

    /// Open-view prompt for services with short prompt limits
    pub fn open_short(&self) -> &str {
        self.open_compact.as_deref().unwrap_or(&self.open_prompt)
    }

    pub fn wrapped_short(&self) -> &str {
        self.wrapped_compact.as_deref().unwrap_or(&self.wrapped_prompt)
    }
}

impl From<PromptSet> for ImageRequest {
    fn from(set: PromptSet) -> Self {
        Self {
            open_prompt: set.open_kebab_prompt,
            wrapped_prompt: set.wrapped_kebab_prompt,
            open_compact: Some(set.open_kebab_prompt_compact),
            wrapped_compact: Some(set.wrapped_kebab_prompt_compact),
            kebab: set.kebab_data,
        }
    }
}

/// Static description of a tier, copied into the response metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    pub service: &'static str,
    pub model: &'static str,
    pub generation_time: &'static str,
    pub style: &'static str,
    pub note: Option<&'static str>,
}

/// A successful tier answer
#[derive(Debug, Clone, PartialEq)]
pub struct TierImages {
    /// URL or data URI
    pub open: String,
    pub wrapped: String,
    pub info: TierInfo,
}

#[async_trait]
pub trait ImageTier: Send + Sync {
    /// Short name used in config and attempt logs
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &ImageRequest) -> Result<TierImages, TierFailure>;
}
