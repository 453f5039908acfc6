//! Image generation
//!
//! - [`tier`] - `ImageTier` contract, `TierFailure`, validated `ImageRequest`
//! - [`huggingface`] / [`pollinations`] / [`craiyon`] - remote tiers (reqwest)
//! - [`svg`] - local vector renderer, the tier that cannot fail
//! - [`orchestrator`] - sequential fallback chain with an overall budget
//! - [`prompt`] - prompts built from catalog `visual_description`s
//! - [`preview`] - layered builder preview served by `/api/ingredients/preview`

pub mod craiyon;
pub mod huggingface;
pub mod orchestrator;
pub mod pollinations;
pub mod preview;
pub mod prompt;
pub mod svg;
pub mod tier;

pub use orchestrator::ImageOrchestrator;
pub use preview::build_preview;
pub use prompt::{build_prompts, kebab_data};
pub use svg::LocalSvgRenderer;
pub use tier::{ImageRequest, ImageTier, TierFailure, TierImages, TierInfo};
