//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_HOST | 0.0.0.0 | bind address |
//! | HTTP_PORT | 3000 | HTTP port |
//! | ENVIRONMENT | development | development / staging / production |
//! | LOG_LEVEL | info | used when RUST_LOG is unset |
//! | LOG_JSON | false | JSON log lines |
//! | LOG_DIR | - | daily rolling log directory |
//! | CATALOG_PATH | - | JSON catalog replacing the built-in menu |
//! | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
//! | CORS_ALLOWED_ORIGINS | - | comma separated; permissive when unset |
//! | IMAGE_SERVICE_PRIORITY | huggingface,pollinations,craiyon | remote tier order |
//! | IMAGE_GENERATION_BUDGET_MS | 25000 | overall budget for the remote tiers |
//! | HUGGINGFACE_URL / HUGGINGFACE_TIMEOUT_MS | see [`ImagingConfig`] | |
//! | HUGGINGFACE_API_TOKEN | - | optional bearer token |
//! | POLLINATIONS_URL / POLLINATIONS_TIMEOUT_MS | see [`ImagingConfig`] | |
//! | CRAIYON_URL / CRAIYON_TIMEOUT_MS | see [`ImagingConfig`] | |

use std::time::Duration;

pub const DEFAULT_HUGGINGFACE_URL: &str =
    "https://api-inference.huggingface.co/models/runwayml/stable-diffusion-v1-5";
pub const DEFAULT_POLLINATIONS_URL: &str = "https://image.pollinations.ai/prompt";
pub const DEFAULT_CRAIYON_URL: &str = "https://api.craiyon.com/v3";

/// Upper bound on the time kept free after the image budget for the local render
const IMAGE_FALLBACK_HEADROOM: Duration = Duration::from_millis(500);

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// One remote image service
#[derive(Debug, Clone, PartialEq)]
pub struct TierEndpoint {
    pub url: String,
    pub timeout_ms: u64,
}

impl TierEndpoint {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Image generation settings
#[derive(Debug, Clone)]
pub struct ImagingConfig {
    /// Remote tier names in priority order
    pub priority: Vec<String>,
    /// Overall budget for the remote chain (milliseconds)
    pub budget_ms: u64,
    pub huggingface: TierEndpoint,
    pub huggingface_token: Option<String>,
    pub pollinations: TierEndpoint,
    pub craiyon: TierEndpoint,
}

impl ImagingConfig {
    pub fn from_env() -> Self {
        let priority = env_string("IMAGE_SERVICE_PRIORITY", "huggingface,pollinations,craiyon");
        Self {
            priority: parse_priority(&priority),
            budget_ms: env_or("IMAGE_GENERATION_BUDGET_MS", 25_000),
            huggingface: TierEndpoint {
                url: env_string("HUGGINGFACE_URL", DEFAULT_HUGGINGFACE_URL),
                timeout_ms: env_or("HUGGINGFACE_TIMEOUT_MS", 3_000),
            },
            huggingface_token: env_opt("HUGGINGFACE_API_TOKEN"),
            pollinations: TierEndpoint {
                url: env_string("POLLINATIONS_URL", DEFAULT_POLLINATIONS_URL),
                timeout_ms: env_or("POLLINATIONS_TIMEOUT_MS", 10_000),
            },
            craiyon: TierEndpoint {
                url: env_string("CRAIYON_URL", DEFAULT_CRAIYON_URL),
                timeout_ms: env_or("CRAIYON_TIMEOUT_MS", 15_000),
            },
        }
    }

    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Split a comma separated priority list, lowercased, blanks dropped
pub fn parse_priority(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Optional JSON catalog file; built-in menu when unset
    pub catalog_path: Option<String>,
    pub request_timeout_ms: u64,
    /// Allowed CORS origins; empty means permissive
    pub cors_allowed_origins: Vec<String>,
    pub imaging: ImagingConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_host: env_string("HTTP_HOST", "0.0.0.0"),
            http_port: env_or("HTTP_PORT", 3000),
            environment: env_string("ENVIRONMENT", "development"),
            log_level: env_string("LOG_LEVEL", "info"),
            log_json: env_or("LOG_JSON", false),
            log_dir: env_opt("LOG_DIR"),
            catalog_path: env_opt("CATALOG_PATH"),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30_000),
            cors_allowed_origins: env_opt("CORS_ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            imaging: ImagingConfig::from_env(),
        }
    }

    /// Override the bind port and catalog path, used by tests
    pub fn with_overrides(http_port: u16, catalog_path: Option<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.catalog_path = catalog_path;
        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Longest image budget that still lets the local fallback answer
    /// before the request timeout fires
    pub fn image_budget_limit(&self) -> Duration {
        let timeout = self.request_timeout();
        timeout - (timeout / 5).min(IMAGE_FALLBACK_HEADROOM)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
