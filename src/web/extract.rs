//! The seam between framework request types and the middleware.

use crate::config::Section;
use crate::value::FieldValue;

/// A request whose parsed sections can be sanitized in place.
///
/// Framework integrations implement this for their own request type (or for a
/// wrapper around it). The middleware only ever replaces the value behind the
/// returned reference; it never adds or removes sections.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::web::SanitizableRequest;
/// use xss_sanitizer::{FieldValue, Section};
///
/// // Example framework-specific implementation with only a body
/// struct JsonRequest {
///     id: String,
///     body: Option<FieldValue>,
/// }
///
/// impl SanitizableRequest for JsonRequest {
///     fn request_id(&self) -> &str {
///         &self.id
///     }
///
///     fn section_mut(&mut self, section: Section) -> Option<&mut FieldValue> {
///         match section {
///             Section::Body => self.body.as_mut(),
///             Section::Query | Section::Params => None,
///         }
///     }
/// }
/// ```
pub trait SanitizableRequest {
    /// Identifier used to correlate log events with the request.
    fn request_id(&self) -> &str;

    /// Returns the parsed section, or `None` if the request does not have it.
    fn section_mut(&mut self, section: Section) -> Option<&mut FieldValue>;
}
