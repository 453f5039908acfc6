//! Craiyon tier
//!
//! One POST for the open view; the wrapped view reuses the same image.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::util::truncate_chars;

use super::tier::{ImageRequest, ImageTier, TierFailure, TierImages, TierInfo};
use crate::core::config::TierEndpoint;
use crate::utils::{AppError, AppResult};

pub const CRAIYON_INFO: TierInfo = TierInfo {
    service: "Craiyon (Free)",
    model: "Craiyon v3",
    generation_time: "30-60s",
    style: "AI-generated",
    note: None,
};

const PROMPT_MAX: usize = 300;

#[derive(Serialize)]
struct CraiyonRequest<'a> {
    prompt: &'a str,
    model: &'static str,
    negative_prompt: &'static str,
}

#[derive(Deserialize)]
struct CraiyonResponse {
    #[serde(default)]
    images: Vec<String>,
}

pub struct CraiyonTier {
    client: Client,
    url: String,
}

impl CraiyonTier {
    pub fn new(endpoint: &TierEndpoint) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(endpoint.timeout())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: endpoint.url.clone(),
        })
    }
}

#[async_trait]
impl ImageTier for CraiyonTier {
    fn name(&self) -> &'static str {
        "craiyon"
    }

    async fn generate(&self, request: &ImageRequest) -> Result<TierImages, TierFailure> {
        let body = CraiyonRequest {
            prompt: truncate_chars(&request.open_prompt, PROMPT_MAX),
            model: "art",
            negative_prompt: "blurry, low quality",
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TierFailure::from_reqwest(&e))?;
        if !resp.status().is_success() {
            return Err(TierFailure::from_status(resp.status()));
        }

        let data: CraiyonResponse = resp.json().await.map_err(|e| {
            tracing::debug!(error = %e, "Craiyon returned an unreadable body");
            TierFailure::from_reqwest(&e)
        })?;

        let image = data
            .images
            .into_iter()
            .find(|img| !img.is_empty())
            .map(|img| format!("data:image/jpeg;base64,{img}"))
            .ok_or(TierFailure::ServiceUnavailable)?;

        Ok(TierImages {
            open: image.clone(),
            wrapped: image,
            info: CRAIYON_INFO,
        })
    }
}
