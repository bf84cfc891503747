//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A product offered by the store.
///
/// Field constraints (non-empty name, description, and category; strictly
/// positive price; catalog-unique id) are enforced by the boundary that
/// loads products. The core treats any `Product` it is handed as valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Category label used for filtering and the category menu.
    pub category: String,
    /// Unit price. Exact decimal, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Optional display image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
}

/// Binary image attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Raw image bytes. Base64-encoded in serialized form.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// MIME type to serve alongside the bytes (e.g. `image/png`).
    pub mime_type: String,
}

/// Serde adapter encoding byte payloads as standard base64 strings.
mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
