//! Session-held models for storefront.

pub mod session;

pub use session::{keys as session_keys, load_cart, save_cart};
