//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront boots with a usable local
//! configuration when none are set.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_PAGE_SIZE` - Products per catalog page (default: 4, must be >= 1)
//! - `STOREFRONT_CATALOG_PATH` - Path to a catalog JSON file (default: embedded catalog)
//! - `FULFILLMENT_ORDER_URL` - Endpoint completed orders are POSTed to
//!   (default: orders are logged instead of forwarded)
//! - `FULFILLMENT_AUTH_TOKEN` - Bearer token for the fulfillment endpoint
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Number of products shown per catalog page
    pub page_size: NonZeroUsize,
    /// Path to the catalog JSON file; `None` uses the embedded catalog
    pub catalog_path: Option<PathBuf>,
    /// Order fulfillment configuration
    pub fulfillment: FulfillmentConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Order fulfillment endpoint configuration.
///
/// Implements `Debug` manually to redact the auth token.
#[derive(Clone, Default)]
pub struct FulfillmentConfig {
    /// Endpoint completed orders are POSTed to. When unset, orders are
    /// logged instead of forwarded.
    pub order_url: Option<Url>,
    /// Bearer token sent with each submission
    pub auth_token: Option<SecretString>,
}

impl std::fmt::Debug for FulfillmentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FulfillmentConfig")
            .field("order_url", &self.order_url)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or
    /// if the configured page size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let page_size = parse_page_size(
            &get_env_or_default("STOREFRONT_PAGE_SIZE", "4"),
            "STOREFRONT_PAGE_SIZE",
        )?;
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from);

        let fulfillment = FulfillmentConfig::from_env()?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);

        Ok(Self {
            host,
            port,
            base_url,
            page_size,
            catalog_path,
            fulfillment,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FulfillmentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let order_url = get_optional_env("FULFILLMENT_ORDER_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("FULFILLMENT_ORDER_URL".to_string(), e.to_string())
                })
            })
            .transpose()?;
        let auth_token = get_optional_env("FULFILLMENT_AUTH_TOKEN").map(SecretString::from);

        Ok(Self {
            order_url,
            auth_token,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a page size, rejecting zero explicitly.
///
/// A page size of zero would make every catalog page empty, so it is a
/// configuration error rather than a silent fallback.
fn parse_page_size(raw: &str, var_name: &str) -> Result<NonZeroUsize, ConfigError> {
    let value = raw
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    NonZeroUsize::new(value).ok_or_else(|| {
        ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "page size must be at least 1".to_string(),
        )
    })
}
