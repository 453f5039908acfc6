//! Tiered image generation
//!
//! # Flow
//!
//! ```text
//! tier[0] → ok? done : tier[1] → ... → tier[n-1] → local SVG (always succeeds)
//! ```
//!
//! Tiers run strictly one after another, one attempt each. The whole remote
//! chain shares one budget; when it runs out the in-flight tier is dropped
//! and the local renderer answers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use shared::models::{GeneratedImages, ImageMetadata, TierAttempt};

use super::craiyon::CraiyonTier;
use super::huggingface::HuggingFaceTier;
use super::pollinations::PollinationsTier;
use super::svg::LocalSvgRenderer;
use super::tier::{ImageRequest, ImageTier, TierImages};
use crate::catalog::Catalog;
use crate::core::config::ImagingConfig;
use crate::utils::AppResult;

const RESOLUTION: &str = "512x512";
const COST: &str = "$0.00";

fn attempt(service: &str, outcome: &str, started: Instant) -> TierAttempt {
    TierAttempt {
        service: service.to_string(),
        outcome: outcome.to_string(),
        elapsed_ms: started.elapsed().as_millis() as u64,
    }
}

pub struct ImageOrchestrator {
    tiers: Vec<Arc<dyn ImageTier>>,
    local: LocalSvgRenderer,
    budget: Duration,
}

impl ImageOrchestrator {
    pub fn new(tiers: Vec<Arc<dyn ImageTier>>, local: LocalSvgRenderer, budget: Duration) -> Self {
        Self {
            tiers,
            local,
            budget,
        }
    }

    /// Build the remote chain in `IMAGE_SERVICE_PRIORITY` order
    pub fn from_config(config: &ImagingConfig, catalog: Arc<Catalog>) -> AppResult<Self> {
        let local = LocalSvgRenderer::new(catalog);
        let mut tiers: Vec<Arc<dyn ImageTier>> = Vec::with_capacity(config.priority.len());

        for name in &config.priority {
            match name.as_str() {
                "huggingface" => tiers.push(Arc::new(HuggingFaceTier::new(
                    &config.huggingface,
                    config.huggingface_token.clone(),
                    local.clone(),
                )?)),
                "pollinations" => tiers.push(Arc::new(PollinationsTier::new(&config.pollinations)?)),
                "craiyon" => tiers.push(Arc::new(CraiyonTier::new(&config.craiyon)?)),
                // The local renderer always closes the chain
                "svg" => {}
                other => tracing::warn!(service = %other, "Unknown image service, ignoring"),
            }
        }

        let orchestrator = Self::new(tiers, local, config.budget());
        tracing::info!(
            tiers = ?orchestrator.tier_names(),
            budget_ms = config.budget_ms,
            "Image generation chain ready"
        );
        Ok(orchestrator)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Shrink the remote budget to `limit` if it is longer
    pub fn cap_budget(&mut self, limit: Duration) {
        if self.budget > limit {
            tracing::warn!(
                budget_ms = self.budget.as_millis() as u64,
                limit_ms = limit.as_millis() as u64,
                "Image generation budget exceeds the request timeout, capping"
            );
            self.budget = limit;
        }
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    async fn run_chain(
        &self,
        request: &ImageRequest,
        attempts: &mut Vec<TierAttempt>,
    ) -> Option<TierImages> {
        for tier in &self.tiers {
            let started = Instant::now();
            match tier.generate(request).await {
                Ok(images) => {
                    tracing::info!(
                        service = tier.name(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Image tier succeeded"
                    );
                    attempts.push(attempt(tier.name(), "success", started));
                    return Some(images);
                }
                Err(failure) => {
                    tracing::warn!(
                        service = tier.name(),
                        failure = failure.as_str(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Image tier failed, falling back"
                    );
                    attempts.push(attempt(tier.name(), failure.as_str(), started));
                }
            }
        }
        None
    }

    /// Always returns images; remote failures are absorbed
    pub async fn generate(&self, request: &ImageRequest) -> GeneratedImages {
        let mut attempts = Vec::with_capacity(self.tiers.len() + 1);
        let started = Instant::now();

        let outcome = tokio::time::timeout(self.budget, self.run_chain(request, &mut attempts)).await;

        let images = match outcome {
            Ok(Some(images)) => images,
            Ok(None) => self.render_local(request, &mut attempts),
            Err(_) => {
                let done = attempts.len();
                tracing::warn!(
                    budget_ms = self.budget.as_millis() as u64,
                    completed = done,
                    "Image generation budget exhausted"
                );
                for (i, tier) in self.tiers.iter().enumerate().skip(done) {
                    let outcome = if i == done { "timeout" } else { "skipped" };
                    attempts.push(attempt(tier.name(), outcome, started));
                }
                self.render_local(request, &mut attempts)
            }
        };

        let info = images.info;
        GeneratedImages {
            open_kebab_image: images.open,
            wrapped_kebab_image: images.wrapped,
            metadata: ImageMetadata {
                service: info.service.to_string(),
                model: info.model.to_string(),
                generation_time: info.generation_time.to_string(),
                resolution: RESOLUTION.to_string(),
                style: info.style.to_string(),
                cost: COST.to_string(),
                note: info.note.map(str::to_string),
                attempts,
                generated_at: Utc::now(),
            },
        }
    }

    fn render_local(&self, request: &ImageRequest, attempts: &mut Vec<TierAttempt>) -> TierImages {
        let started = Instant::now();
        let images = self.local.render(&request.kebab);
        attempts.push(attempt(self.local.name(), "success", started));
        tracing::info!("Serving locally rendered images");
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::tier::{TierFailure, TierInfo};
    use async_trait::async_trait;
    use shared::models::{KebabData, Measurements};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const STUB_INFO: TierInfo = TierInfo {
        service: "Stub",
        model: "stub",
        generation_time: "0s",
        style: "AI-generated",
        note: None,
    };

    struct StubTier {
        name: &'static str,
        result: Result<(), TierFailure>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubTier {
        fn new(name: &'static str, result: Result<(), TierFailure>) -> Arc<Self> {
            Self::slow(name, result, Duration::ZERO)
        }

        fn slow(name: &'static str, result: Result<(), TierFailure>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                name,
                result,
                delay,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ImageTier for StubTier {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn generate(&self, _request: &ImageRequest) -> Result<TierImages, TierFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.result.map(|_| TierImages {
                open: format!("https://{}/open.png", self.name),
                wrapped: format!("https://{}/wrapped.png", self.name),
                info: STUB_INFO,
            })
        }
    }

    fn request() -> ImageRequest {
        ImageRequest {
            open_prompt: "open".into(),
            wrapped_prompt: "wrapped".into(),
            open_compact: None,
            wrapped_compact: None,
            kebab: KebabData {
                size: "medium".into(),
                ingredients: vec!["Grilled Chicken".into()],
                measurements: Measurements {
                    length: 20.0,
                    diameter: 5.0,
                    weight: 250.0,
                },
            },
        }
    }

    fn orchestrator(tiers: Vec<Arc<StubTier>>, budget: Duration) -> ImageOrchestrator {
        ImageOrchestrator::new(
            tiers
                .into_iter()
                .map(|t| t as Arc<dyn ImageTier>)
                .collect(),
            LocalSvgRenderer::new(Arc::new(Catalog::builtin())),
            budget,
        )
    }

    fn outcomes(images: &GeneratedImages) -> Vec<(&str, &str)> {
        images
            .metadata
            .attempts
            .iter()
            .map(|a| (a.service.as_str(), a.outcome.as_str()))
            .collect()
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let a = StubTier::new("a", Err(TierFailure::ServiceUnavailable));
        let b = StubTier::new("b", Ok(()));
        let c = StubTier::new("c", Ok(()));
        let orch = orchestrator(vec![a.clone(), b.clone(), c.clone()], Duration::from_secs(5));

        let images = orch.generate(&request()).await;
        assert_eq!(images.open_kebab_image, "https://b/open.png");
        assert_eq!(images.metadata.service, "Stub");
        assert_eq!(outcomes(&images), [("a", "service_unavailable"), ("b", "success")]);
        assert_eq!(c.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_failures_fall_back_to_local() {
        let orch = orchestrator(
            vec![
                StubTier::new("a", Err(TierFailure::Timeout)),
                StubTier::new("b", Err(TierFailure::RateLimited)),
                StubTier::new("c", Err(TierFailure::ServiceUnavailable)),
            ],
            Duration::from_secs(5),
        );

        let images = orch.generate(&request()).await;
        assert_eq!(images.metadata.service, "Local SVG (Free)");
        assert_eq!(images.metadata.resolution, "512x512");
        assert_eq!(images.metadata.cost, "$0.00");
        assert!(images.open_kebab_image.starts_with("data:image/svg+xml;base64,"));
        assert!(images.wrapped_kebab_image.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(
            outcomes(&images),
            [
                ("a", "timeout"),
                ("b", "rate_limited"),
                ("c", "service_unavailable"),
                ("svg", "success")
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_chain_is_local_only() {
        let images = orchestrator(vec![], Duration::from_secs(1))
            .generate(&request())
            .await;
        assert_eq!(images.metadata.service, "Local SVG (Free)");
        assert_eq!(outcomes(&images), [("svg", "success")]);
    }

    #[tokio::test]
    async fn test_budget_expiry_abandons_remaining_tiers() {
        let a = StubTier::new("a", Err(TierFailure::ServiceUnavailable));
        let b = StubTier::slow("b", Ok(()), Duration::from_secs(60));
        let c = StubTier::new("c", Ok(()));
        let orch = orchestrator(vec![a, b, c.clone()], Duration::from_millis(200));

        let started = Instant::now();
        let images = orch.generate(&request()).await;
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(images.metadata.service, "Local SVG (Free)");
        assert_eq!(
            outcomes(&images),
            [
                ("a", "service_unavailable"),
                ("b", "timeout"),
                ("c", "skipped"),
                ("svg", "success")
            ]
        );
        assert_eq!(c.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cap_budget_only_shrinks() {
        let mut orch = orchestrator(vec![], Duration::from_secs(25));
        orch.cap_budget(Duration::from_secs(40));
        assert_eq!(orch.budget(), Duration::from_secs(25));
        orch.cap_budget(Duration::from_millis(240));
        assert_eq!(orch.budget(), Duration::from_millis(240));
    }

    #[test]
    fn test_from_config_skips_unknown_services() {
        let config = ImagingConfig {
            priority: vec!["pollinations".into(), "dalle".into(), "craiyon".into(), "svg".into()],
            ..ImagingConfig::default()
        };
        let orch = ImageOrchestrator::from_config(&config, Arc::new(Catalog::builtin())).unwrap();
        assert_eq!(orch.tier_names(), ["pollinations", "craiyon"]);
    }
}
