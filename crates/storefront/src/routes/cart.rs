//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Each handler loads it, applies
//! one cart-engine operation and stores the result. Forms post normally and
//! get a redirect; htmx posts get a fragment plus a `cart-updated` trigger.
//! Malformed form bodies are rejected with 400.

use askama::Template;
use askama_web::WebTemplate;
use automats_core::{Cart, CartItem, ProductId};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{CART_UPDATED_EVENT, CspNonce, HX_TRIGGER_HEADER, HxRequest};
use crate::models::{load_cart, save_cart};
use crate::routes::catalog::catalog_location;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone, Debug)]
pub struct CartItemView {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id().as_u32(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            price: item.product.price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone, Debug)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    /// Heading under the cart title.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.count > 0 {
            format!("Товаров: {}", self.count)
        } else {
            "Корзина пуста".to_string()
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total().to_string(),
            count: cart.count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    /// Catalog tab the form was submitted from.
    #[serde(default)]
    pub material: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
    pub nonce: String,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u32,
}

/// Response after a cart change on the cart page.
fn cart_items_response(hx: HxRequest, cart: &Cart) -> Response {
    if hx.0 {
        (
            AppendHeaders([(HX_TRIGGER_HEADER, CART_UPDATED_EVENT)]),
            CartItemsTemplate {
                cart: CartView::from(cart),
            },
        )
            .into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Display cart page.
#[instrument(skip(session, nonce))]
pub async fn show(session: Session, CspNonce(nonce): CspNonce) -> Result<CartShowTemplate> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart_count: cart.count(),
        cart: CartView::from(&cart),
        nonce,
    })
}

/// Add one unit of a catalog product.
///
/// Unknown product ids are rejected with 404.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    hx: HxRequest,
    form: std::result::Result<Form<AddToCartForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let product = state
        .catalog()
        .find(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = load_cart(&session).await?.add_to_cart(product);
    save_cart(&session, &cart).await?;

    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Added product", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(product_id = %form.product_id, count = cart.count(), "Added to cart");

    if hx.0 {
        Ok((
            AppendHeaders([(HX_TRIGGER_HEADER, CART_UPDATED_EVENT)]),
            CartCountTemplate {
                cart_count: cart.count(),
            },
        )
            .into_response())
    } else {
        Ok(Redirect::to(&catalog_location(form.material.as_deref())).into_response())
    }
}

/// Shift a line's quantity by `delta` (floored at 1).
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    hx: HxRequest,
    form: std::result::Result<Form<UpdateCartForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let cart = load_cart(&session)
        .await?
        .update_quantity(form.product_id, form.delta);
    save_cart(&session, &cart).await?;

    tracing::info!(
        product_id = %form.product_id,
        delta = form.delta,
        count = cart.count(),
        "Updated cart quantity"
    );

    Ok(cart_items_response(hx, &cart))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    hx: HxRequest,
    form: std::result::Result<Form<RemoveFromCartForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let cart = load_cart(&session)
        .await?
        .remove_from_cart(form.product_id);
    save_cart(&session, &cart).await?;

    tracing::info!(product_id = %form.product_id, count = cart.count(), "Removed from cart");

    Ok(cart_items_response(hx, &cart))
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        cart_count: cart.count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use automats_core::Catalog;

    use super::*;

    fn sample_cart() -> Cart {
        let catalog = Catalog::seeded();
        let eva = catalog.find(ProductId::new(1)).unwrap();
        let leather = catalog.find(ProductId::new(2)).unwrap();
        Cart::new()
            .add_to_cart(eva)
            .add_to_cart(leather)
            .add_to_cart(eva)
    }

    #[test]
    fn test_cart_view_from_cart() {
        let view = CartView::from(&sample_cart());
        assert_eq!(view.count, 3);
        assert_eq!(view.total, "14500 ₽");
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items.first().unwrap().line_total, "9000 ₽");
        assert_eq!(view.summary(), "Товаров: 3");
    }

    #[test]
    fn test_empty_cart_summary() {
        let view = CartView::from(&Cart::new());
        assert_eq!(view.summary(), "Корзина пуста");
        assert_eq!(view.total, "0 ₽");
    }

    #[test]
    fn test_cart_items_fragment_renders_lines() {
        let html = CartItemsTemplate {
            cart: CartView::from(&sample_cart()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Коврики Premium EVA"));
        assert!(html.contains("14500 ₽"));
        assert!(html.contains("Товаров: 3"));
    }

    #[test]
    fn test_cart_count_fragment_hidden_when_empty() {
        let html = CartCountTemplate { cart_count: 0 }.render().unwrap();
        assert!(html.contains("id=\"cart-count\""));
        assert!(html.contains("hidden"));

        let html = CartCountTemplate { cart_count: 2 }.render().unwrap();
        assert!(html.contains(">2<"));
    }
}
