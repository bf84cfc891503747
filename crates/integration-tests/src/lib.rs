//! Integration tests for Game Haven.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p game-haven-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flows` - Cart operations against catalog products
//! - `catalog_flows` - Catalog paging, filtering, and the category menu
//! - `checkout_flows` - Shipping validation and order placement
//! - `catalog_store` - The catalog seed and record validation
//!
//! The tests drive the crate APIs directly, the same way the storefront
//! handlers do. No running server or external fulfillment endpoint is
//! required.
