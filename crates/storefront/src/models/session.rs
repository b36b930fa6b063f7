//! Session-related types.
//!
//! The visitor's cart is the only thing stored in the session. It is kept as
//! a serialized [`Cart`] under [`keys::CART`] and rebuilt on every request.

use automats_core::Cart;
use tower_sessions::Session;

use crate::error::Result;

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";
}

/// Load the cart from the session, or an empty cart for a new visitor.
///
/// # Errors
///
/// Returns `AppError::Session` if the store fails or the stored value does
/// not deserialize.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
///
/// # Errors
///
/// Returns `AppError::Session` if the store fails.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}
