//! Core module - configuration, state, server and errors
//!
//! - [`Config`] - environment driven configuration
//! - [`ServerState`] - shared services handed to every handler
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup / runtime errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::{Server, build_app, build_router};
pub use state::ServerState;
