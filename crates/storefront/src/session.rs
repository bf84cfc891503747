//! Session-stored cart state.
//!
//! The cart lives in the visitor's session as a JSON value, so it follows
//! the session cookie rather than any account. Handlers load the cart at
//! the start of a request, mutate it through the core cart API, and save
//! it back before responding.

use tower_sessions::Session;

use game_haven_core::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the visitor's cart.
    pub const CART: &str = "cart";
}

/// Get the cart from the session, or an empty cart if none is stored.
///
/// A cart that fails to deserialize is treated as absent; the visitor
/// starts over with an empty cart rather than a broken session.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(keys::CART).await {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("Failed to load cart from session: {e}");
            Cart::new()
        }
    }
}

/// Save the cart back to the session.
///
/// # Errors
///
/// Returns the session store error if the write fails.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
