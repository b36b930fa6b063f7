//! Security headers and per-request CSP nonce.
//!
//! Every request gets a fresh, cryptographically random nonce. Page templates
//! put it on the htmx `<script>` tag and the same value is written into the
//! `Content-Security-Policy` header on the way out.

use axum::{
    extract::{FromRequestParts, Request},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        request::Parts,
    },
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Origin serving the product photos.
pub const IMAGE_CDN: &str = "https://cdn.poehali.dev";

/// Origin serving the htmx script.
pub const SCRIPT_CDN: &str = "https://unpkg.com";

/// A CSP nonce value for script tags.
///
/// 128 random bits, base64-encoded.
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    /// Get the nonce value for use in templates.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Extractor to get the CSP nonce from request extensions.
///
/// Falls back to an empty nonce (which no script can match) when the
/// middleware is not installed.
impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!(
                "CSP nonce not found in request extensions - middleware may be misconfigured"
            );
            Self(String::new())
        }))
    }
}

/// Build the CSP header value for a nonce.
///
/// ```text
/// default-src 'none';
/// script-src 'self' 'nonce-<nonce>' https://unpkg.com;
/// style-src 'self';
/// img-src 'self' https://cdn.poehali.dev;
/// connect-src 'self';
/// frame-src 'none';
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none'
/// ```
#[must_use]
pub fn content_security_policy(nonce: &CspNonce) -> String {
    format!(
        "default-src 'none'; \
         script-src 'self' 'nonce-{nonce}' {SCRIPT_CDN}; \
         style-src 'self'; \
         img-src 'self' {IMAGE_CDN}; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'",
        nonce = nonce.value()
    )
}

/// Generate a nonce and add security headers to every response.
///
/// Headers applied:
/// - `Content-Security-Policy` - see [`content_security_policy`]
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: no-referrer` - Zero referrer leakage
/// - `Permissions-Policy` - Deny sensitive features the shop never uses
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
/// - `Cross-Origin-Embedder-Policy: credentialless` - CDN photos carry no CORP header
pub async fn security_headers_middleware(mut request: Request, next: Next) -> Response {
    let nonce = CspNonce::generate();
    request.extensions_mut().insert(nonce.clone());

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    match HeaderValue::from_str(&content_security_policy(&nonce)) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::error!(error = %e, "Failed to build CSP header"),
    }

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "camera=(), \
             geolocation=(), \
             microphone=(), \
             payment=(), \
             usb=(), \
             interest-cohort=()",
        ),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("credentialless"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_random_and_base64() {
        let a = CspNonce::generate();
        let b = CspNonce::generate();
        assert_ne!(a.value(), b.value());
        // 16 bytes -> 24 base64 chars with padding
        assert_eq!(a.value().len(), 24);
        assert!(STANDARD.decode(a.value()).is_ok());
    }

    #[test]
    fn test_csp_contains_nonce_and_cdns() {
        let nonce = CspNonce("abc123".to_string());
        let csp = content_security_policy(&nonce);
        assert!(csp.contains("'nonce-abc123'"));
        assert!(csp.contains(IMAGE_CDN));
        assert!(csp.contains(SCRIPT_CDN));
        assert!(csp.starts_with("default-src 'none'"));
        assert!(HeaderValue::from_str(&csp).is_ok());
    }
}
