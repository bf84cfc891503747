//! Cart route handlers.
//!
//! The cart is stored in the visitor's session; every handler loads it,
//! applies one cart operation, and saves it back. Responses carry the
//! full cart contents so clients never need a follow-up fetch.

use std::num::NonZeroU32;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use game_haven_core::{Cart, CartLine, Product, ProductId, ProductSource};

use crate::error::{AppError, Result};
use crate::session::{load_cart, save_cart};
use crate::state::AppState;

/// One cart line as exposed over the API.
#[derive(Serialize)]
pub struct CartLineView<'a> {
    /// The product snapshot stored in the cart.
    pub product: &'a Product,
    /// Units of the product.
    pub quantity: u32,
    /// Unit price times quantity, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

impl<'a> From<&'a CartLine> for CartLineView<'a> {
    fn from(line: &'a CartLine) -> Self {
        Self {
            product: &line.product,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Cart contents as exposed over the API.
#[derive(Serialize)]
pub struct CartView<'a> {
    /// Lines in the order their products were first added.
    pub lines: Vec<CartLineView<'a>>,
    /// Exact cart total, serialized as a string.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_value: Decimal,
    /// Units across all lines.
    pub total_quantity: u32,
}

impl<'a> From<&'a Cart> for CartView<'a> {
    fn from(cart: &'a Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_value: cart.compute_total_value(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: i32,
    /// Units to add; defaults to 1.
    pub quantity: Option<u32>,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: i32,
}

/// Show the cart contents.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    let cart = load_cart(&session).await;
    Json(CartView::from(&cart)).into_response()
}

/// Add a product to the cart.
///
/// Adding a product already in the cart merges into its existing line.
/// Unknown products are rejected with 404, a zero quantity with 400.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCartRequest>,
) -> Result<Response> {
    let quantity = NonZeroU32::new(body.quantity.unwrap_or(1))
        .ok_or_else(|| AppError::BadRequest("quantity must be at least 1".to_string()))?;
    let product_id = ProductId::new(body.product_id);
    let product = state
        .catalog()
        .find(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?
        .clone();

    let mut cart = load_cart(&session).await;
    cart.add_item(product, quantity);
    save_cart(&session, &cart).await?;

    tracing::debug!(%product_id, quantity = quantity.get(), "Added product to cart");
    Ok(Json(CartView::from(&cart)).into_response())
}

/// Remove a product's line from the cart.
///
/// Removing a product that is not in the cart is a no-op, not an error.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Response> {
    let product_id = ProductId::new(body.product_id);

    let mut cart = load_cart(&session).await;
    cart.remove_line(product_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)).into_response())
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let cart = Cart::new();
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)).into_response())
}

/// Get the number of units in the cart.
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    Json(CartCount {
        count: cart.total_quantity(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: "RPG".to_string(),
            price: price.parse().unwrap(),
            image: None,
        }
    }

    #[test]
    fn test_cart_view_totals_and_line_totals() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Game1", "10.50"), NonZeroU32::new(2).unwrap());
        cart.add_item(product(2, "Game2", "5.00"), NonZeroU32::new(1).unwrap());

        let view = CartView::from(&cart);

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].line_total, "21.00".parse().unwrap());
        assert_eq!(view.total_value, "26.00".parse().unwrap());
        assert_eq!(view.total_quantity, 3);
    }

    #[test]
    fn test_cart_view_serializes_amounts_as_strings() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Game1", "10.50"), NonZeroU32::new(2).unwrap());

        let json = serde_json::to_value(CartView::from(&cart)).unwrap();

        assert_eq!(json["total_value"], serde_json::json!("21.00"));
        assert_eq!(json["lines"][0]["line_total"], serde_json::json!("21.00"));
        assert_eq!(
            json["lines"][0]["product"]["price"],
            serde_json::json!("10.50")
        );
        assert_eq!(json["total_quantity"], serde_json::json!(2));
    }

    #[test]
    fn test_empty_cart_view() {
        let cart = Cart::new();
        let view = CartView::from(&cart);
        assert!(view.lines.is_empty());
        assert_eq!(view.total_value, Decimal::ZERO);
        assert_eq!(view.total_quantity, 0);
    }
}
