//! JSON API handlers.
//!
//! Exposes the computed cart state for scripts and other presentation
//! layers that do not want to parse HTML.

use automats_core::Cart;
use axum::Json;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::load_cart;

/// One cart line in the JSON summary.
#[derive(Debug, Serialize)]
pub struct CartLineJson {
    pub id: u32,
    pub name: String,
    pub material: &'static str,
    pub price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

/// Cart summary returned by `GET /api/cart`.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartLineJson>,
    pub total: u64,
    pub count: u32,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartLineJson {
                    id: item.id().as_u32(),
                    name: item.product.name.clone(),
                    material: item.product.material.label(),
                    price: item.product.price.amount(),
                    quantity: item.quantity,
                    line_total: item.line_total().amount(),
                })
                .collect(),
            total: cart.total().amount(),
            count: cart.count(),
        }
    }
}

/// Return the session cart with derived totals.
#[instrument(skip(session))]
pub async fn cart(session: Session) -> Result<Json<CartSummary>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartSummary::from(&cart)))
}
