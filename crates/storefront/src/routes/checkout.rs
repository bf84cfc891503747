//! Checkout route handler.
//!
//! Validates the submitted shipping details, runs the checkout workflow
//! against the session cart, and maps each outcome to a response:
//!
//! - completed orders return a receipt and empty the cart
//! - an empty cart or invalid shipping details return 422 with the cart kept
//! - a fulfillment failure returns 502 with the cart kept

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use game_haven_core::{Cart, CheckoutOutcome, CheckoutRejection, ShippingDetails};

use crate::error::Result;
use crate::session::{load_cart, save_cart};
use crate::state::AppState;
use crate::validation::{FieldError, validate_shipping, verdict};

/// Response body for a completed order.
#[derive(Debug, Serialize)]
pub struct CheckoutReceipt {
    pub status: &'static str,
    /// Total charged for the order, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_value: Decimal,
    /// Units shipped.
    pub total_quantity: u32,
    pub message: &'static str,
}

/// Response body for a rejected checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutRejected {
    pub reason: CheckoutRejection,
    pub message: &'static str,
    /// Field-level validation errors; empty for an empty-cart rejection.
    pub errors: Vec<FieldError>,
}

/// Place an order for the session cart.
#[instrument(skip(state, session, details))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(details): Json<ShippingDetails>,
) -> Result<Response> {
    let cart = load_cart(&session).await;
    let errors = validate_shipping(&details);

    let outcome = state
        .workflow()
        .place_order(&cart, &details, verdict(&errors))
        .await?;

    match outcome {
        CheckoutOutcome::Completed => {
            let receipt = CheckoutReceipt {
                status: "completed",
                total_value: cart.compute_total_value(),
                total_quantity: cart.total_quantity(),
                message: "Thanks, your order has been placed!",
            };
            save_cart(&session, &Cart::new()).await?;

            tracing::info!(
                total_quantity = receipt.total_quantity,
                "Order placed successfully"
            );
            Ok(Json(receipt).into_response())
        }
        CheckoutOutcome::Rejected(reason) => {
            let body = match reason {
                CheckoutRejection::EmptyCart => CheckoutRejected {
                    reason,
                    message: "Sorry, your cart is empty!",
                    errors: Vec::new(),
                },
                CheckoutRejection::InvalidShipping => CheckoutRejected {
                    reason,
                    message: "Please correct the shipping details and try again.",
                    errors,
                },
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response())
        }
    }
}
