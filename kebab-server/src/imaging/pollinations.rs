//! Pollinations tier
//!
//! Images are served by GET on a prompt URL, so generation only builds the two
//! URLs and probes the open one with HEAD to learn whether the service is up.

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, Url};
use shared::util::truncate_chars;

use super::tier::{ImageRequest, ImageTier, TierFailure, TierImages, TierInfo};
use crate::core::config::TierEndpoint;
use crate::utils::{AppError, AppResult};

pub const POLLINATIONS_INFO: TierInfo = TierInfo {
    service: "Pollinations.ai (Free)",
    model: "Flux (Pollinations)",
    generation_time: "5-10s",
    style: "AI-generated",
    note: None,
};

const OPEN_PROMPT_MAX: usize = 1000;
const WRAPPED_PROMPT_MAX: usize = 800;
const IMAGE_SIZE: &str = "512";

pub struct PollinationsTier {
    client: Client,
    base: Url,
}

impl PollinationsTier {
    pub fn new(endpoint: &TierEndpoint) -> AppResult<Self> {
        let base = Url::parse(&endpoint.url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or_else(|| AppError::config(format!("Invalid POLLINATIONS_URL: {}", endpoint.url)))?;
        let client = Client::builder()
            .timeout(endpoint.timeout())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base })
    }

    /// `<base>/<prompt>?width=512&height=512&model=flux&seed=N`
    pub fn prompt_url(&self, prompt: &str, max_chars: usize, seed: u32) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(truncate_chars(prompt, max_chars));
        }
        url.query_pairs_mut()
            .append_pair("width", IMAGE_SIZE)
            .append_pair("height", IMAGE_SIZE)
            .append_pair("model", "flux")
            .append_pair("seed", &seed.to_string());
        url
    }
}

#[async_trait]
impl ImageTier for PollinationsTier {
    fn name(&self) -> &'static str {
        "pollinations"
    }

    async fn generate(&self, request: &ImageRequest) -> Result<TierImages, TierFailure> {
        let (open_seed, wrapped_seed) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(0..10_000), rng.gen_range(0..10_000))
        };

        let open = self.prompt_url(request.open_short(), OPEN_PROMPT_MAX, open_seed);
        let wrapped = self.prompt_url(request.wrapped_short(), WRAPPED_PROMPT_MAX, wrapped_seed);

        tracing::debug!(
            open_len = request.open_short().chars().count(),
            wrapped_len = request.wrapped_short().chars().count(),
            "Probing Pollinations"
        );

        let resp = self
            .client
            .head(open.clone())
            .send()
            .await
            .map_err(|e| TierFailure::from_reqwest(&e))?;
        if !resp.status().is_success() {
            return Err(TierFailure::from_status(resp.status()));
        }

        Ok(TierImages {
            open: open.into(),
            wrapped: wrapped.into(),
            info: POLLINATIONS_INFO,
        })
    }
}
