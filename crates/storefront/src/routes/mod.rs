//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (?material= selects the catalog tab)
//! GET  /health                 - Health check
//!
//! # Catalog (HTMX fragment)
//! GET  /catalog                - Product grid for ?material=<label|all>
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (count badge fragment, or redirect)
//! POST /cart/update            - Shift quantity (cart_items fragment, or redirect)
//! POST /cart/remove            - Remove line (cart_items fragment, or redirect)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # API
//! GET  /api/cart               - Cart summary as JSON
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/cart", get(api::cart))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/catalog", get(catalog::grid))
        .nest("/cart", cart_routes())
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// The storefront has no external dependencies, so liveness is readiness.
async fn health() -> &'static str {
    "ok"
}
