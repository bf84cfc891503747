//! External service clients for storefront.
//!
//! # Services
//!
//! - `fulfillment` - Order fulfillment endpoint client

pub mod fulfillment;

pub use fulfillment::{FulfillmentClient, FulfillmentError, OrderSubmission, SubmissionLine};
