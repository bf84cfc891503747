//! The shopping cart aggregate.
//!
//! A [`Cart`] is an ordered collection of product lines scoped to one
//! visitor session. Lines merge on product ID: adding a product that is
//! already in the cart bumps the existing line's quantity instead of
//! appending a duplicate, even when other fields of the product have
//! changed since the line was created. The cart does no locking; the
//! session layer serializes access per visitor.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::ProductId;
use crate::product::Product;

/// One product and the number of units of it in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,
    /// Units of the product. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Value of this line: unit price times quantity, exact decimal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Session-scoped shopping cart.
///
/// Starts empty, keeps lines in the order their products were first
/// added, and holds at most one line per product ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line for the product's ID already exists, its quantity is
    /// incremented and its stored product snapshot is left alone.
    /// Otherwise a new line is appended after all existing lines.
    ///
    /// A merge that would push a line's quantity past `u32::MAX`
    /// saturates there instead of wrapping.
    pub fn add_item(&mut self, product: Product, quantity: NonZeroU32) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity.get()),
            None => self.lines.push(CartLine {
                product,
                quantity: quantity.get(),
            }),
        }
    }

    /// Remove the line for `product_id` in its entirety.
    ///
    /// Removing a product that is not in the cart is a no-op.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Total value of the cart: the sum of every line's total.
    #[must_use]
    pub fn compute_total_value(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Drop every line, returning the cart to its initial empty state.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, in the order their products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
