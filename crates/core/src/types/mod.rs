//! Core types for AutoMats.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod material;
pub mod price;
pub mod rating;

pub use id::*;
pub use material::{ALL_MATERIALS, Material, MaterialFilter};
pub use price::Price;
pub use rating::{Rating, RatingError};
