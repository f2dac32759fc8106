//! Web framework integration surface.
//!
//! This module contains no framework-specific code. It defines the
//! [`SanitizableRequest`] seam that framework glue implements, a ready-made
//! owned implementation ([`RequestParts`]), and the middleware itself.
//!
//! # Integration Model
//!
//! Framework-specific glue should:
//! 1. Let the framework parse body, query string and route parameters
//! 2. Expose them through `SanitizableRequest` (or copy them into `RequestParts`)
//! 3. Call [`XssSanitizerMiddleware::handle`] with the downstream handler as `next`
//!
//! # Example Flow
//!
//! ```
//! use xss_sanitizer::web::{xss_sanitizer, RequestParts};
//! use serde_json::json;
//!
//! // Register once, share across requests
//! let middleware = xss_sanitizer();
//!
//! // Per request
//! let mut parts = RequestParts::new("req-7");
//! parts.add_query_param("age", "<h1>30</h1>");
//! parts.add_query_param("type", "admin");
//!
//! middleware.handle(&mut parts, |req| {
//!     let age = req.query().and_then(|q| q.get("age")).and_then(|v| v.as_str());
//!     assert_eq!(age, Some("30"));
//! });
//! ```

mod adapter;
mod extract;
mod middleware;

pub use adapter::RequestParts;
pub use extract::SanitizableRequest;
pub use middleware::{xss_sanitizer, RequestReport, XssSanitizerMiddleware};
