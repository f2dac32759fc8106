//! The sanitizing middleware.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework parses body, query and route parameters
//!   ↓
//! XssSanitizerMiddleware::handle(&mut request, next)
//!   ↓  (each configured, present section replaced by its sanitized copy)
//! next(&mut request): downstream handlers see only stripped strings
//! ```

use crate::config::{SanitizerConfig, Section};
use crate::logging::SanitizeLog;
use crate::markup::{MarkupStripper, TagStripper};
use crate::sanitizer::{SanitizeReport, XssSanitizer};

use super::SanitizableRequest;

/// What one middleware invocation did to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestReport {
    sections: Vec<Section>,
    totals: SanitizeReport,
}

impl RequestReport {
    /// Sections that were present and sanitized, in processing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns `true` if `section` was present and sanitized.
    pub fn was_processed(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Counters summed over all processed sections.
    pub fn totals(&self) -> SanitizeReport {
        self.totals
    }
}

/// Request middleware that strips markup from body, query and route
/// parameters before the next handler runs.
///
/// The middleware is stateless between requests and `Send + Sync`, so a
/// single instance can be registered once and shared by every worker.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::web::{xss_sanitizer, RequestParts};
/// use xss_sanitizer::FieldValue;
/// use serde_json::json;
///
/// let middleware = xss_sanitizer();
///
/// let mut request = RequestParts::new("req-1");
/// request.set_body(json!({"name": "<script>hi</script>", "note": "<strong>ok</strong>"}));
///
/// let note = middleware.handle(&mut request, |req| {
///     req.body().and_then(|b| b.get("note")).cloned()
/// });
///
/// assert_eq!(note, Some(FieldValue::from("ok")));
/// assert_eq!(request.body(), Some(&FieldValue::from(json!({"name": "", "note": "ok"}))));
/// ```
#[derive(Debug, Clone)]
pub struct XssSanitizerMiddleware<S = TagStripper> {
    sanitizer: XssSanitizer<S>,
    config: SanitizerConfig,
}

impl XssSanitizerMiddleware<TagStripper> {
    /// Creates the middleware with the default [`TagStripper`].
    pub fn new(config: SanitizerConfig) -> Self {
        Self::with_stripper(config, TagStripper)
    }
}

impl Default for XssSanitizerMiddleware<TagStripper> {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl<S: MarkupStripper> XssSanitizerMiddleware<S> {
    /// Creates the middleware with a custom markup stripper.
    pub fn with_stripper(mut config: SanitizerConfig, stripper: S) -> Self {
        config.normalize();
        let sanitizer = XssSanitizer::with_stripper(stripper).coerce_numbers(config.coerces_numbers());

        Self { sanitizer, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitizes the request, then passes it to `next`.
    ///
    /// Returns whatever `next` returns. The middleware never fails: absent
    /// sections are skipped and unexpected shapes pass through.
    pub fn handle<R, F, T>(&self, request: &mut R, next: F) -> T
    where
        R: SanitizableRequest + ?Sized,
        F: FnOnce(&mut R) -> T,
    {
        self.sanitize_request(request);
        next(request)
    }

    /// Replaces every configured, present section of `request` with its
    /// sanitized copy.
    pub fn sanitize_request<R>(&self, request: &mut R) -> RequestReport
    where
        R: SanitizableRequest + ?Sized,
    {
        let request_id = request.request_id().to_owned();
        let log = SanitizeLog::new(&request_id);
        let mut report = RequestReport::default();

        for &section in self.config.sections() {
            let Some(slot) = request.section_mut(section) else {
                log.section_absent(section);
                continue;
            };

            let (sanitized, section_report) = self.sanitizer.sanitize_with_report(std::mem::take(slot));
            *slot = sanitized;

            log.section_sanitized(section, &section_report);
            report.sections.push(section);
            report.totals.merge(section_report);
        }

        report
    }
}

/// Creates the middleware with the default configuration: all three
/// sections, numbers coerced to strings.
pub fn xss_sanitizer() -> XssSanitizerMiddleware {
    XssSanitizerMiddleware::default()
}
