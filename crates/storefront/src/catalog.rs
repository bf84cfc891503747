//! The product catalog served by the storefront.
//!
//! Products are loaded once at startup, either from the JSON file named by
//! `STOREFRONT_CATALOG_PATH` or from the catalog embedded in the binary,
//! and held in memory for the life of the process. Every record is
//! validated on the way in so the rest of the storefront can assume the
//! catalog is well formed.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use game_haven_core::{Product, ProductId, ProductSource};

use crate::config::StorefrontConfig;

/// Catalog embedded in the binary, used when no catalog path is configured.
const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.json");

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// In-memory product catalog.
///
/// Cheaply cloneable; all clones share the same product list.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Arc<Vec<Product>>,
}

impl ProductCatalog {
    /// Load the catalog according to the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured file cannot be read, is
    /// not valid catalog JSON, or contains an invalid product record.
    pub fn load(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => {
                let catalog = Self::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    products = catalog.len(),
                    "Catalog loaded from file"
                );
                Ok(catalog)
            }
            None => {
                let catalog = Self::from_json(EMBEDDED_CATALOG)?;
                tracing::info!(products = catalog.len(), "Embedded catalog loaded");
                Ok(catalog)
            }
        }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or its contents
    /// fail validation.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&raw)
    }

    /// Parse and validate a catalog from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or a product
    /// record fails validation.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        validate_products(&products)?;

        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSource for ProductCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Check every product record against the catalog rules.
///
/// Names, descriptions, and categories must be non-blank, prices must be
/// strictly positive, IDs must be unique, and an attached image must name
/// a MIME type.
fn validate_products(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen: HashSet<ProductId> = HashSet::new();

    for product in products {
        let id = product.id;
        if !seen.insert(id) {
            return Err(CatalogError::Invalid(format!("duplicate product id {id}")));
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::Invalid(format!("product {id} has no name")));
        }
        if product.description.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "product {id} has no description"
            )));
        }
        if product.category.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "product {id} has no category"
            )));
        }
        if product.price <= Decimal::ZERO {
            return Err(CatalogError::Invalid(format!(
                "product {id} has a non-positive price ({})",
                product.price
            )));
        }
        if let Some(image) = &product.image
            && image.mime_type.trim().is_empty()
        {
            return Err(CatalogError::Invalid(format!(
                "product {id} has an image without a MIME type"
            )));
        }
    }

    Ok(())
}
