//! Request validation for checkout input.
//!
//! Shipping details are validated here, at the boundary, before the
//! checkout workflow runs. The workflow itself only sees the verdict;
//! the field-level findings stay in the HTTP response.

use serde::Serialize;

use game_haven_core::{ShippingDetails, ShippingVerdict};

/// A single field-level validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message for the shopper.
    pub message: &'static str,
}

/// Validate shipping details, returning every finding.
///
/// The recipient name, first address line, city, and country must be
/// non-blank; whitespace-only values count as missing. The remaining
/// address lines and the gift wrap flag are optional.
#[must_use]
pub fn validate_shipping(details: &ShippingDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if details.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Please enter a name",
        });
    }
    if details.line1.trim().is_empty() {
        errors.push(FieldError {
            field: "line1",
            message: "Please enter the first address line",
        });
    }
    if details.city.trim().is_empty() {
        errors.push(FieldError {
            field: "city",
            message: "Please enter a city name",
        });
    }
    if details.country.trim().is_empty() {
        errors.push(FieldError {
            field: "country",
            message: "Please enter a country name",
        });
    }

    errors
}

/// Collapse validation findings into the verdict the checkout workflow
/// branches on.
#[must_use]
pub const fn verdict(errors: &[FieldError]) -> ShippingVerdict {
    if errors.is_empty() {
        ShippingVerdict::Valid
    } else {
        ShippingVerdict::Invalid
    }
}
