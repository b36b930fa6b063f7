//! AutoMats Storefront library.
//!
//! This crate provides the storefront as a library so the router can be
//! driven in-process by tests and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, http::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Directory holding CSS and other static assets.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the full application router with its middleware stack.
///
/// Layers are listed innermost first; see [`middleware`] for the order
/// requests pass through them.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn router() -> Router {
        app(AppState::new(StorefrontConfig::from_lookup(|_| None).unwrap()))
    }

    #[tokio::test]
    async fn test_health_through_full_stack() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("content-security-policy"));
        assert!(response.headers().contains_key(middleware::REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_upstream_request_id_is_echoed() {
        let request = Request::get("/health")
            .header(middleware::REQUEST_ID_HEADER, "edge-42")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(middleware::REQUEST_ID_HEADER).unwrap(),
            "edge-42"
        );
    }

    #[tokio::test]
    async fn test_unacceptable_request_id_is_replaced() {
        let request = Request::get("/health")
            .header(middleware::REQUEST_ID_HEADER, "has spaces")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        let id = response
            .headers()
            .get(middleware::REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap();
        assert_ne!(id, "has spaces");
        assert_eq!(id.len(), 36);
    }
}
