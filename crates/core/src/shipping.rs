//! Shipping details captured at checkout.

use serde::{Deserialize, Serialize};

/// Where and how an order ships.
///
/// The recipient name, first address line, city, and country are required
/// by the boundary validation layer before checkout runs; the remaining
/// address lines and gift wrapping are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient name.
    pub name: String,
    /// First address line.
    pub line1: String,
    /// Second address line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// Third address line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Whether the order should be gift wrapped.
    #[serde(default)]
    pub gift_wrap: bool,
}
