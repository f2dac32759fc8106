use crate::config::Section;
use crate::sanitizer::SanitizeReport;

/// A request-scoped logger for sanitization events.
///
/// `SanitizeLog` is lifetime-bound to the request id it was created for, so
/// every event it emits carries that id as a structured `request_id` field.
/// Events never include field values: a stripped payload is attacker input and
/// does not belong in logs.
///
/// The crate never installs a `tracing` subscriber; the host application
/// decides where events go.
#[derive(Debug, Clone, Copy)]
pub struct SanitizeLog<'a> {
    request_id: &'a str,
}

impl<'a> SanitizeLog<'a> {
    /// Creates a logger for `request_id`.
    pub fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Records the outcome of sanitizing one section.
    ///
    /// Sections where markup was removed are logged at info level, clean
    /// sections at debug level, and stripper failures at warn level.
    pub fn section_sanitized(&self, section: Section, report: &SanitizeReport) {
        if report.strip_failures > 0 {
            tracing::warn!(
                request_id = %self.request_id,
                section = %section,
                strip_failures = report.strip_failures,
                "some fields could not be stripped and were left unchanged"
            );
        }

        if report.strings_altered > 0 {
            tracing::info!(
                request_id = %self.request_id,
                section = %section,
                strings_visited = report.strings_visited,
                strings_altered = report.strings_altered,
                numbers_coerced = report.numbers_coerced,
                "removed markup from request section"
            );
        } else {
            tracing::debug!(
                request_id = %self.request_id,
                section = %section,
                strings_visited = report.strings_visited,
                numbers_coerced = report.numbers_coerced,
                "request section clean"
            );
        }
    }

    /// Records that a configured section was absent from the request.
    pub fn section_absent(&self, section: Section) {
        tracing::trace!(request_id = %self.request_id, section = %section, "request section absent");
    }
}
