//! Framework-agnostic request parts.

use std::collections::BTreeMap;

use crate::config::Section;
use crate::value::FieldValue;

use super::SanitizableRequest;

/// Owned body, query and route parameters of one request.
///
/// `RequestParts` is the simplest [`SanitizableRequest`]: framework code
/// copies the parsed sections in, runs the middleware, and hands the
/// sanitized parts to its handlers. A section that was never set is absent
/// and stays absent.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::web::RequestParts;
/// use serde_json::json;
///
/// let mut parts = RequestParts::new("req-12345");
/// parts.set_body(json!({"comment": "<b>hi</b>"}));
/// parts.add_query_param("page", "2");
/// parts.add_path_param("id", "42");
///
/// assert!(parts.body().is_some());
/// assert_eq!(parts.query().and_then(|q| q.get("page")).and_then(|v| v.as_str()), Some("2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParts {
    request_id: String,
    body: Option<FieldValue>,
    query: Option<FieldValue>,
    params: Option<FieldValue>,
}

impl RequestParts {
    /// Creates request parts with all sections absent.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Self::default()
        }
    }

    /// Sets the parsed body.
    pub fn set_body(&mut self, body: impl Into<FieldValue>) {
        self.body = Some(body.into());
    }

    /// Sets the parsed query string.
    pub fn set_query(&mut self, query: impl Into<FieldValue>) {
        self.query = Some(query.into());
    }

    /// Sets the route parameters.
    pub fn set_params(&mut self, params: impl Into<FieldValue>) {
        self.params = Some(params.into());
    }

    /// Adds one query parameter, creating the query mapping if needed.
    ///
    /// A query section that is not a mapping is replaced.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        insert_field(&mut self.query, key.into(), value.into());
    }

    /// Adds one route parameter, creating the params mapping if needed.
    ///
    /// A params section that is not a mapping is replaced.
    pub fn add_path_param(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        insert_field(&mut self.params, key.into(), value.into());
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the body, if present.
    pub fn body(&self) -> Option<&FieldValue> {
        self.body.as_ref()
    }

    /// Returns the query, if present.
    pub fn query(&self) -> Option<&FieldValue> {
        self.query.as_ref()
    }

    /// Returns the route parameters, if present.
    pub fn params(&self) -> Option<&FieldValue> {
        self.params.as_ref()
    }

    /// Returns `section`, if present.
    pub fn section(&self, section: Section) -> Option<&FieldValue> {
        match section {
            Section::Body => self.body(),
            Section::Query => self.query(),
            Section::Params => self.params(),
        }
    }
}

fn insert_field(slot: &mut Option<FieldValue>, key: String, value: FieldValue) {
    match slot {
        Some(FieldValue::Mapping(map)) => {
            map.insert(key, value);
        }
        _ => {
            *slot = Some(FieldValue::Mapping(BTreeMap::from([(key, value)])));
        }
    }
}

impl SanitizableRequest for RequestParts {
    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn section_mut(&mut self, section: Section) -> Option<&mut FieldValue> {
        match section {
            Section::Body => self.body.as_mut(),
            Section::Query => self.query.as_mut(),
            Section::Params => self.params.as_mut(),
        }
    }
}
