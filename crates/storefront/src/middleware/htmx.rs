//! HTMX request detection.
//!
//! Cart forms work without JavaScript: plain form posts get a redirect,
//! htmx posts (marked by `HX-Request: true`) get an HTML fragment.

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header htmx sets on every request it issues.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// Header used to fire client-side events after a cart change.
pub const HX_TRIGGER_HEADER: &str = "HX-Trigger";

/// Event name fired whenever the cart changes.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Whether the current request was issued by htmx.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get(HX_REQUEST_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        Ok(Self(is_htmx))
    }
}
