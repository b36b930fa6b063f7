//! AutoMats Core - Catalog, cart and review domain library.
//!
//! This crate provides the domain logic shared by all AutoMats components:
//! - `storefront` - Public single-page shop
//! - `cli` - Command-line catalog and quote tool
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no session handling. Cart state is an explicit value passed in and
//! returned, so every operation can be tested without a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, materials and ratings
//! - [`catalog`] - The seeded product list and the material filter
//! - [`cart`] - The cart engine
//! - [`review`] - Featured customer reviews

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod review;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product, filter_by_material};
pub use review::{Review, featured_reviews};
pub use types::*;
