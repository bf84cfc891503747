//! Application state shared across handlers.

use std::sync::Arc;

use game_haven_core::CheckoutWorkflow;

use crate::catalog::ProductCatalog;
use crate::config::StorefrontConfig;
use crate::services::{FulfillmentClient, FulfillmentError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the loaded catalog, and the checkout workflow.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: ProductCatalog,
    workflow: CheckoutWorkflow<FulfillmentClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Loaded product catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the fulfillment client cannot be built from
    /// the configuration.
    pub fn new(config: StorefrontConfig, catalog: ProductCatalog) -> Result<Self, FulfillmentError> {
        let fulfillment = FulfillmentClient::new(&config.fulfillment)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                workflow: CheckoutWorkflow::new(fulfillment),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the checkout workflow.
    #[must_use]
    pub fn workflow(&self) -> &CheckoutWorkflow<FulfillmentClient> {
        &self.inner.workflow
    }
}
