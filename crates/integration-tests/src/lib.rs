//! Integration tests for AutoMats Premium.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server, port or browser is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p automats-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Home page, catalog tabs, health, static assets
//! - `storefront_cart` - Session-backed cart flows, htmx fragments, JSON summary
//! - `storefront_headers` - Security headers and request IDs

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;

use automats_storefront::{app, config::StorefrontConfig, state::AppState};

/// Header value htmx sends with every request it issues.
const HTMX_HEADER: (&str, &str) = ("hx-request", "true");

/// A response with its body collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

/// One visitor browsing an in-process storefront.
///
/// Keeps the session cookie between requests the way a browser would.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Build a storefront with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration fails to load.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let config =
            StorefrontConfig::from_lookup(|_| None).expect("default configuration should load");
        Self {
            router: app(AppState::new(config)),
            cookie: None,
        }
    }

    /// A second visitor sharing this storefront (and its session store).
    #[must_use]
    pub fn other_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Issue a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, false).await
    }

    /// Issue a GET request as htmx would.
    pub async fn hx_get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, true).await
    }

    /// Post a urlencoded form as a plain browser submit.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form), false).await
    }

    /// Post a urlencoded form as htmx would.
    pub async fn hx_post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form), true).await
    }

    #[allow(clippy::expect_used)]
    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        form: Option<&str>,
        htmx: bool,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if htmx {
            builder = builder.header(HTMX_HEADER.0, HTMX_HEADER.1);
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                );
                Body::from(form.to_owned())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_owned());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
