//! Game Haven Core - storefront domain library.
//!
//! This crate holds the domain rules of the Game Haven storefront:
//! - browsing and paging the product catalog
//! - the session-scoped shopping cart
//! - the checkout workflow that hands a finished cart to an order processor
//!
//! # Architecture
//!
//! The core crate contains types, rules, and boundary traits - no I/O, no
//! HTTP, no storage. Collaborators the storefront talks to (the product
//! source, the order processor) are traits implemented at the edges, which
//! keeps every rule in this crate testable with plain fixtures.
//!
//! # Modules
//!
//! - [`id`] - Newtype wrappers for type-safe IDs
//! - [`product`] - Catalog product records
//! - [`cart`] - The shopping cart aggregate
//! - [`catalog`] - Catalog paging, category filtering, and the category menu
//! - [`shipping`] - Shipping details captured at checkout
//! - [`checkout`] - The checkout workflow and the order processor contract

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod id;
pub mod product;
pub mod shipping;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogPage, PagingInfo, ProductSource, distinct_categories, page};
pub use checkout::{
    CheckoutOutcome, CheckoutRejection, CheckoutWorkflow, OrderProcessingError, OrderProcessor,
    ShippingVerdict,
};
pub use id::ProductId;
pub use product::{Product, ProductImage};
pub use shipping::ShippingDetails;
