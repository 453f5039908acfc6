//! Kebab Server - build-your-own kebab storefront backend
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): ingredients, sizes and popular presets
//! - **Composer** (`composer`): size + ingredient ids → resolved composition
//! - **Pricing** (`pricing`): price / protein / weight totals
//! - **Orders** (`orders`): materialization, persistence and status lifecycle
//! - **Imaging** (`imaging`): tiered AI image generation with a local SVG fallback
//! - **HTTP API** (`api`): axum routes
//!
//! # Layout
//!
//! ```text
//! kebab-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # menu data
//! ├── composer/      # selection resolution, client-side selection model
//! ├── pricing/       # aggregation
//! ├── orders/        # order numbers, store, materializer
//! ├── imaging/       # image tiers, orchestrator, previews, prompts
//! └── utils/         # logging, error re-exports, extractors, validation
//! ```

pub mod api;
pub mod catalog;
pub mod composer;
pub mod core;
pub mod imaging;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState, build_router};
pub use imaging::ImageOrchestrator;
pub use orders::{MemoryOrderStore, OrderService, OrderStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  _  __    _          _
 | |/ /___| |__  __ _| |__
 | ' </ -_) '_ \/ _` | '_ \
 |_|\_\___|_.__/\__,_|_.__/
    "#
    );
}
