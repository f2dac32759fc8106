//! Request-sanitizing middleware against cross-site scripting.
//!
//! This crate strips markup from inbound request data before application
//! handlers see it:
//! - **Markup stripping**: script elements are removed with their content,
//!   every other tag is unwrapped to its text
//! - **Recursive sanitization**: every string leaf of a parsed body, query or
//!   route-parameter tree is stripped; numbers become strings; structure is kept
//! - **Middleware**: the three request sections are replaced in place before
//!   the next handler runs
//!
//! # Core Types
//!
//! - [`strip`]: Strips markup from one string
//! - [`FieldValue`]: Parsed request value tree
//! - [`XssSanitizer`]: Recursive sanitizer over `FieldValue`
//! - [`web::XssSanitizerMiddleware`]: Per-request middleware
//! - [`SanitizerConfig`]: Which sections to process
//!
//! # Examples
//!
//! ```
//! use xss_sanitizer::web::{xss_sanitizer, RequestParts};
//! use xss_sanitizer::FieldValue;
//! use serde_json::json;
//!
//! let middleware = xss_sanitizer();
//!
//! let mut request = RequestParts::new("req-123");
//! request.set_body(json!({"name": "<script>hi</script>", "note": "<strong>ok</strong>"}));
//! request.set_query(json!({"age": "<h1>30</h1>", "type": "admin"}));
//!
//! middleware.handle(&mut request, |_| ());
//!
//! assert_eq!(request.body(), Some(&FieldValue::from(json!({"name": "", "note": "ok"}))));
//! assert_eq!(request.query(), Some(&FieldValue::from(json!({"age": "30", "type": "admin"}))));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod logging;
mod markup;
mod sanitizer;
mod value;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use config::{SanitizerConfig, Section};
pub use error::{StripError, StripErrorKind};
pub use logging::SanitizeLog;
pub use markup::{strip, MarkupStripper, TagStripper};
pub use sanitizer::{sanitize, SanitizeReport, XssSanitizer};
pub use value::{FieldKind, FieldValue};
