//! Fulfillment client for completed orders.
//!
//! Implements the order processor contract for production: each completed
//! checkout is serialized into an [`OrderSubmission`] and POSTed to the
//! configured fulfillment endpoint. Without an endpoint the submission is
//! logged instead, which keeps local development and demos self-contained.

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use game_haven_core::{Cart, OrderProcessingError, OrderProcessor, ProductId, ShippingDetails};

use crate::config::FulfillmentConfig;

/// Errors that can occur when submitting an order for fulfillment.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Client-side configuration problem.
    #[error("Config error: {0}")]
    Config(String),
}

impl From<FulfillmentError> for OrderProcessingError {
    fn from(err: FulfillmentError) -> Self {
        Self::with_source("order could not be submitted for fulfillment", err)
    }
}

/// One line of an order submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionLine {
    /// Catalog ID of the ordered product.
    pub product_id: ProductId,
    /// Product name at the time of ordering.
    pub name: String,
    /// Unit price at the time of ordering, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Units ordered.
    pub quantity: u32,
}

/// The payload POSTed to the fulfillment endpoint for one order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    /// Unique reference for this submission.
    pub reference: Uuid,
    /// When the order was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Ordered lines.
    pub lines: Vec<SubmissionLine>,
    /// Where the order ships.
    pub shipping: ShippingDetails,
    /// Order total, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_value: Decimal,
}

impl OrderSubmission {
    /// Build a submission from a cart and shipping details.
    #[must_use]
    pub fn new(cart: &Cart, shipping: &ShippingDetails) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| SubmissionLine {
                product_id: line.product.id,
                name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
            })
            .collect();

        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            lines,
            shipping: shipping.clone(),
            total_value: cart.compute_total_value(),
        }
    }
}

/// Client for the order fulfillment endpoint.
#[derive(Debug, Clone)]
pub struct FulfillmentClient {
    client: reqwest::Client,
    order_url: Option<Url>,
}

impl FulfillmentClient {
    /// Create a new fulfillment client.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth token cannot be used as a header
    /// value or the HTTP client fails to build.
    pub fn new(config: &FulfillmentConfig) -> Result<Self, FulfillmentError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.auth_token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| FulfillmentError::Config(format!("invalid auth token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            order_url: config.order_url.clone(),
        })
    }

    /// POST a submission to the fulfillment endpoint.
    async fn submit(&self, url: &Url, submission: &OrderSubmission) -> Result<(), FulfillmentError> {
        let response = self.client.post(url.clone()).json(submission).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FulfillmentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

impl OrderProcessor for FulfillmentClient {
    async fn process_order(
        &self,
        cart: &Cart,
        details: &ShippingDetails,
    ) -> Result<(), OrderProcessingError> {
        let submission = OrderSubmission::new(cart, details);

        match &self.order_url {
            Some(url) => {
                self.submit(url, &submission).await?;
                tracing::info!(
                    reference = %submission.reference,
                    total = %submission.total_value,
                    "Order forwarded for fulfillment"
                );
            }
            None => {
                tracing::info!(
                    reference = %submission.reference,
                    total = %submission.total_value,
                    lines = submission.lines.len(),
                    "Order accepted (no fulfillment endpoint configured)"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use game_haven_core::Product;

    fn product(id: i32, name: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: "Shooter".to_string(),
            price: price.parse().unwrap(),
            image: None,
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            name: "Alex".to_string(),
            line1: "12 High Street".to_string(),
            city: "Bristol".to_string(),
            country: "UK".to_string(),
            ..ShippingDetails::default()
        }
    }

    fn two_line_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Neon Strike", "19.99"), NonZeroU32::new(2).unwrap());
        cart.add_item(product(2, "Iron Vanguard", "59.99"), NonZeroU32::new(1).unwrap());
        cart
    }

    #[test]
    fn test_submission_captures_cart_and_shipping() {
        let submission = OrderSubmission::new(&two_line_cart(), &shipping());

        assert_eq!(submission.lines.len(), 2);
        assert_eq!(submission.lines[0].name, "Neon Strike");
        assert_eq!(submission.lines[0].quantity, 2);
        assert_eq!(submission.lines[1].quantity, 1);
        assert_eq!(submission.shipping.city, "Bristol");
        assert_eq!(submission.total_value, "99.97".parse().unwrap());
    }

    #[test]
    fn test_submission_serializes_prices_as_strings() {
        let submission = OrderSubmission::new(&two_line_cart(), &shipping());
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["total_value"], serde_json::json!("99.97"));
        assert_eq!(json["lines"][0]["unit_price"], serde_json::json!("19.99"));
        assert_eq!(json["lines"][0]["product_id"], serde_json::json!(1));
        assert!(json["reference"].is_string());
        assert!(json["submitted_at"].is_string());
    }

    #[test]
    fn test_each_submission_gets_a_fresh_reference() {
        let cart = two_line_cart();
        let first = OrderSubmission::new(&cart, &shipping());
        let second = OrderSubmission::new(&cart, &shipping());
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test]
    async fn test_client_without_endpoint_accepts_orders() {
        let client = FulfillmentClient::new(&FulfillmentConfig::default()).unwrap();

        let outcome = client.process_order(&two_line_cart(), &shipping()).await;

        assert!(outcome.is_ok());
    }

    #[test]
    fn test_client_builds_with_auth_token() {
        let config = FulfillmentConfig {
            order_url: Some(Url::parse("https://orders.example.com/submit").unwrap()),
            auth_token: Some(secrecy::SecretString::from("fZ83hNb2pQx7vKmL4wRt")),
        };

        assert!(FulfillmentClient::new(&config).is_ok());
    }

    #[test]
    fn test_newline_in_auth_token_is_a_config_error() {
        let config = FulfillmentConfig {
            order_url: None,
            auth_token: Some(secrecy::SecretString::from("bad\ntoken")),
        };

        let err = FulfillmentClient::new(&config).unwrap_err();
        assert!(matches!(err, FulfillmentError::Config(_)));
    }
}
