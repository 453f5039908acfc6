//! Kebab builder API module
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/kebab-builder/config | GET | menu snapshot |
//! | /api/kebab-builder/popular | GET | presets with live prices |
//! | /api/kebab-builder/calculate | POST | price breakdown |
//! | /api/kebab-builder/create | POST | materialize + persist an order |
//! | /api/kebab-builder/prompts | POST | image prompts for a composition |
//! | /api/kebab-builder/generate-images | POST | tiered image generation |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/kebab-builder", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/config", get(handler::config))
        .route("/popular", get(handler::popular))
        .route("/calculate", post(handler::calculate))
        .route("/create", post(handler::create))
        .route("/prompts", post(handler::prompts))
        .route("/generate-images", post(handler::generate_images))
}
