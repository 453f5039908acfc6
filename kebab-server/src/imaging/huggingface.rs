//! HuggingFace Inference API tier
//!
//! Two POSTs (open + wrapped) run concurrently, each bounded by the tier
//! timeout. One image is enough; the missing view comes from the local renderer.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Serialize;

use super::svg::{LocalSvgRenderer, svg_data_uri, wrapped_view};
use super::tier::{ImageRequest, ImageTier, TierFailure, TierImages, TierInfo};
use crate::core::config::TierEndpoint;
use crate::utils::{AppError, AppResult};

pub const HUGGINGFACE_INFO: TierInfo = TierInfo {
    service: "HuggingFace (Free)",
    model: "stable-diffusion-v1-5",
    generation_time: "15-30s",
    style: "AI-generated",
    note: None,
};

#[derive(Serialize)]
struct InferenceParameters {
    negative_prompt: &'static str,
    num_inference_steps: u32,
    guidance_scale: f32,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

pub struct HuggingFaceTier {
    client: Client,
    url: String,
    token: Option<String>,
    fallback: LocalSvgRenderer,
}

impl HuggingFaceTier {
    pub fn new(
        endpoint: &TierEndpoint,
        token: Option<String>,
        fallback: LocalSvgRenderer,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(endpoint.timeout())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: endpoint.url.clone(),
            token,
            fallback,
        })
    }

    /// One inference call; the body is the raw image
    async fn infer(&self, prompt: &str) -> Result<String, TierFailure> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                negative_prompt: "blurry, low quality, distorted",
                num_inference_steps: 20,
                guidance_scale: 7.5,
            },
        };

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| TierFailure::from_reqwest(&e))?;
        if !resp.status().is_success() {
            return Err(TierFailure::from_status(resp.status()));
        }
        let bytes = resp.bytes().await.map_err(|e| TierFailure::from_reqwest(&e))?;
        if bytes.is_empty() {
            return Err(TierFailure::ServiceUnavailable);
        }
        Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&bytes)))
    }
}

/// Report the more specific failure of the two calls
fn combine(a: TierFailure, b: TierFailure) -> TierFailure {
    use TierFailure::*;
    match (a, b) {
        (RateLimited, _) | (_, RateLimited) => RateLimited,
        (Timeout, _) | (_, Timeout) => Timeout,
        _ => ServiceUnavailable,
    }
}

#[async_trait]
impl ImageTier for HuggingFaceTier {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn generate(&self, request: &ImageRequest) -> Result<TierImages, TierFailure> {
        let (open, wrapped) = tokio::join!(
            self.infer(&request.open_prompt),
            self.infer(&request.wrapped_prompt)
        );

        let (open, wrapped) = match (open, wrapped) {
            (Ok(open), Ok(wrapped)) => (open, wrapped),
            (Ok(open), Err(_)) => (open, svg_data_uri(&wrapped_view(&request.kebab))),
            (Err(_), Ok(wrapped)) => (
                svg_data_uri(&self.fallback.open_view(&request.kebab)),
                wrapped,
            ),
            (Err(open_err), Err(wrapped_err)) => {
                tracing::debug!(open = %open_err, wrapped = %wrapped_err, "HuggingFace returned no images");
                return Err(combine(open_err, wrapped_err));
            }
        };

        Ok(TierImages {
            open,
            wrapped,
            info: HUGGINGFACE_INFO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_prefers_rate_limit() {
        use TierFailure::*;
        assert_eq!(combine(Timeout, RateLimited), RateLimited);
        assert_eq!(combine(ServiceUnavailable, Timeout), Timeout);
        assert_eq!(combine(ServiceUnavailable, ServiceUnavailable), ServiceUnavailable);
    }
}
