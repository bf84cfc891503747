//! The checkout workflow.
//!
//! A checkout attempt is a single transition: given a cart, shipping
//! details, and the validation verdict on those details, the workflow
//! either rejects the attempt without ever touching the order processor,
//! or hands the order to the processor exactly once and completes. A
//! processor failure aborts the attempt and leaves the cart as it was, so
//! the visitor can retry.

use std::error::Error;

use serde::Serialize;
use thiserror::Error as ThisError;

use crate::cart::Cart;
use crate::shipping::ShippingDetails;

/// Failure surfaced by an [`OrderProcessor`].
///
/// The workflow never interprets these. Any processor error is fatal to
/// the checkout attempt and propagates to the caller unchanged.
#[derive(Debug, ThisError)]
#[error("order processing failed: {message}")]
pub struct OrderProcessingError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl OrderProcessingError {
    /// Create an error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// External collaborator that fulfills a completed order.
///
/// Implementations decide what processing means; the storefront forwards
/// the order to a fulfillment endpoint. The workflow calls this at most
/// once per attempt, and only with a non-empty cart and validated
/// shipping details.
pub trait OrderProcessor {
    /// Hand the cart and shipping details over for fulfillment.
    fn process_order(
        &self,
        cart: &Cart,
        details: &ShippingDetails,
    ) -> impl Future<Output = Result<(), OrderProcessingError>> + Send;
}

/// Verdict from the boundary validation layer on one set of shipping
/// details.
///
/// The workflow branches on the verdict; it never inspects the details
/// itself. Field-level findings stay at the boundary that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingVerdict {
    /// The details passed validation.
    Valid,
    /// The details failed validation; checkout must reject.
    Invalid,
}

/// Why a checkout attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutRejection {
    /// The cart had no lines.
    EmptyCart,
    /// The shipping details failed validation.
    InvalidShipping,
}

/// Terminal state of one checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was handed to the processor.
    Completed,
    /// The attempt was turned away before the processor was involved.
    Rejected(CheckoutRejection),
}

/// Drives checkout attempts against one order processor.
pub struct CheckoutWorkflow<P> {
    processor: P,
}

impl<P: OrderProcessor> CheckoutWorkflow<P> {
    /// Create a workflow around `processor`.
    pub const fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Run one checkout attempt.
    ///
    /// An empty cart rejects first; failed shipping validation rejects
    /// next; in both cases the processor is never invoked. Otherwise the
    /// processor is invoked exactly once and the attempt completes.
    ///
    /// The cart is not modified on any path. Clearing it after a
    /// completed attempt is the caller's responsibility, which keeps a
    /// failed attempt retryable with the cart intact.
    ///
    /// # Errors
    ///
    /// Propagates any [`OrderProcessingError`] the processor returns.
    pub async fn place_order(
        &self,
        cart: &Cart,
        details: &ShippingDetails,
        verdict: ShippingVerdict,
    ) -> Result<CheckoutOutcome, OrderProcessingError> {
        if cart.is_empty() {
            return Ok(CheckoutOutcome::Rejected(CheckoutRejection::EmptyCart));
        }
        if verdict == ShippingVerdict::Invalid {
            return Ok(CheckoutOutcome::Rejected(CheckoutRejection::InvalidShipping));
        }

        self.processor.process_order(cart, details).await?;
        Ok(CheckoutOutcome::Completed)
    }
}
