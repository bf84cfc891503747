//! Integration tests for checkout flows.
//!
//! These tests run shipping validation and the checkout workflow
//! together, the way the storefront checkout route does, without
//! requiring a running server or a reachable fulfillment endpoint.

use std::num::NonZeroU32;
use std::path::Path;
use std::sync::{Arc, Mutex};

use game_haven_core::{
    Cart, CheckoutOutcome, CheckoutRejection, CheckoutWorkflow, OrderProcessingError,
    OrderProcessor, ProductId, ProductSource, ShippingDetails,
};
use game_haven_storefront::catalog::ProductCatalog;
use game_haven_storefront::config::FulfillmentConfig;
use game_haven_storefront::services::{FulfillmentClient, OrderSubmission};
use game_haven_storefront::validation::{validate_shipping, verdict};

fn seed_cart() -> Cart {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/content/catalog.json");
    let catalog = ProductCatalog::from_file(&path).expect("catalog seed should load");

    let mut cart = Cart::new();
    for (id, units) in [(5, 2), (2, 1)] {
        cart.add_item(
            catalog
                .find(ProductId::new(id))
                .expect("seed product should exist")
                .clone(),
            NonZeroU32::new(units).expect("units should be non-zero"),
        );
    }
    cart
}

fn complete_details() -> ShippingDetails {
    ShippingDetails {
        name: "Alex".to_string(),
        line1: "12 High Street".to_string(),
        city: "Bristol".to_string(),
        country: "UK".to_string(),
        ..ShippingDetails::default()
    }
}

/// Records every order it is handed instead of fulfilling it.
#[derive(Clone, Default)]
struct RecordingProcessor {
    submissions: Arc<Mutex<Vec<ShippingDetails>>>,
}

impl RecordingProcessor {
    fn submission_count(&self) -> usize {
        self.submissions
            .lock()
            .expect("lock should not be poisoned")
            .len()
    }
}

impl OrderProcessor for RecordingProcessor {
    async fn process_order(
        &self,
        _cart: &Cart,
        details: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        self.submissions
            .lock()
            .expect("lock should not be poisoned")
            .push(details.clone());
        Ok(())
    }
}

/// Fails every order.
struct UnreachableProcessor;

impl OrderProcessor for UnreachableProcessor {
    async fn process_order(
        &self,
        _cart: &Cart,
        _details: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        Err(OrderProcessingError::new("fulfillment endpoint unreachable"))
    }
}

// =============================================================================
// Validation and Workflow
// =============================================================================

#[tokio::test]
async fn test_valid_details_and_a_filled_cart_complete() {
    let processor = RecordingProcessor::default();
    let workflow = CheckoutWorkflow::new(processor.clone());
    let details = complete_details();

    let errors = validate_shipping(&details);
    let outcome = workflow
        .place_order(&seed_cart(), &details, verdict(&errors))
        .await
        .expect("processing should succeed");

    assert_eq!(outcome, CheckoutOutcome::Completed);
    assert_eq!(processor.submission_count(), 1);
}

#[tokio::test]
async fn test_missing_fields_reject_the_attempt() {
    let processor = RecordingProcessor::default();
    let workflow = CheckoutWorkflow::new(processor.clone());
    let details = ShippingDetails {
        country: String::new(),
        ..complete_details()
    };

    let errors = validate_shipping(&details);
    let outcome = workflow
        .place_order(&seed_cart(), &details, verdict(&errors))
        .await
        .expect("rejection is not a processing error");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        outcome,
        CheckoutOutcome::Rejected(CheckoutRejection::InvalidShipping)
    );
    assert_eq!(processor.submission_count(), 0);
}

#[tokio::test]
async fn test_an_empty_cart_wins_over_bad_details() {
    let workflow = CheckoutWorkflow::new(RecordingProcessor::default());
    let details = ShippingDetails::default();

    let errors = validate_shipping(&details);
    let outcome = workflow
        .place_order(&Cart::new(), &details, verdict(&errors))
        .await
        .expect("rejection is not a processing error");

    assert_eq!(
        outcome,
        CheckoutOutcome::Rejected(CheckoutRejection::EmptyCart)
    );
}

#[tokio::test]
async fn test_a_failed_attempt_keeps_the_cart_for_retry() {
    let cart = seed_cart();
    let details = complete_details();
    let errors = validate_shipping(&details);

    let err = CheckoutWorkflow::new(UnreachableProcessor)
        .place_order(&cart, &details, verdict(&errors))
        .await
        .expect_err("processing should fail");
    assert!(err.message().contains("unreachable"));

    // The cart is untouched, so the same attempt can be retried
    assert_eq!(cart.lines().len(), 2);
    let retry = CheckoutWorkflow::new(RecordingProcessor::default())
        .place_order(&cart, &details, verdict(&errors))
        .await
        .expect("retry should succeed");
    assert_eq!(retry, CheckoutOutcome::Completed);
}

// =============================================================================
// Fulfillment Client
// =============================================================================

#[tokio::test]
async fn test_workflow_over_the_fulfillment_client_without_endpoint() {
    let client = FulfillmentClient::new(&FulfillmentConfig::default())
        .expect("client should build");
    let workflow = CheckoutWorkflow::new(client);
    let details = complete_details();

    let errors = validate_shipping(&details);
    let outcome = workflow
        .place_order(&seed_cart(), &details, verdict(&errors))
        .await
        .expect("orders are accepted locally without an endpoint");

    assert_eq!(outcome, CheckoutOutcome::Completed);
}

#[test]
fn test_submission_mirrors_the_cart() {
    let cart = seed_cart();

    let submission = OrderSubmission::new(&cart, &complete_details());

    assert_eq!(submission.lines.len(), 2);
    assert_eq!(
        submission.lines.iter().map(|l| l.quantity).sum::<u32>(),
        cart.total_quantity()
    );
    assert_eq!(submission.total_value, cart.compute_total_value());
    assert_eq!(submission.shipping.city, "Bristol");
}
