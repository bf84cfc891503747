//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Catalog page (query: category, page)
//! GET  /products/{id}          - Product detail
//! GET  /products/{id}/image    - Product image bytes
//!
//! # Categories
//! GET  /categories             - Navigation menu (query: selected)
//!
//! # Cart
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Add a product (merges existing lines)
//! POST /cart/remove            - Remove a product's line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! POST /checkout               - Place an order for the cart
//! ```

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/image", get(products::image))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product routes
        .nest("/products", product_routes())
        // Category menu
        .route("/categories", get(categories::menu))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(checkout::place_order))
}
