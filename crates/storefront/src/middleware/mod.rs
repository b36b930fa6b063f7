//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with an empty `request_id` field)
//! 3. Request ID (fills the span field, tags Sentry, echoes the header)
//! 4. Security headers (CSP nonce generation + strict headers)
//! 5. Session layer (tower-sessions with the in-memory store)

pub mod htmx;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use htmx::{CART_UPDATED_EVENT, HX_TRIGGER_HEADER, HxRequest};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::{CspNonce, security_headers_middleware};
pub use session::create_session_layer;
