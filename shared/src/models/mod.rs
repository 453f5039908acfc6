//! Data models
//!
//! Shared between kebab-server and the storefront frontend (via API).
//! Wire format is camelCase JSON.

pub mod builder;
pub mod ingredient;
pub mod order;
pub mod size;

// Re-exports
pub use builder::*;
pub use ingredient::*;
pub use order::*;
pub use size::*;
