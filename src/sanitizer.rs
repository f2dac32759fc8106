use crate::markup::{MarkupStripper, TagStripper};
use crate::value::FieldValue;

/// Counters collected while sanitizing one value tree.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::XssSanitizer;
/// use serde_json::json;
///
/// let (_, report) = XssSanitizer::new()
///     .sanitize_with_report(json!({"a": "<b>x</b>", "b": "y", "c": 3}).into());
///
/// assert_eq!(report.strings_visited, 3);
/// assert_eq!(report.strings_altered, 1);
/// assert_eq!(report.numbers_coerced, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// String leaves passed to the stripper, coerced numbers included.
    pub strings_visited: usize,
    /// String leaves whose content changed.
    pub strings_altered: usize,
    /// Number leaves converted to strings.
    pub numbers_coerced: usize,
    /// String leaves kept unchanged because the stripper failed.
    pub strip_failures: usize,
}

impl SanitizeReport {
    /// Adds the counters of `other` to `self`.
    pub fn merge(&mut self, other: SanitizeReport) {
        self.strings_visited += other.strings_visited;
        self.strings_altered += other.strings_altered;
        self.numbers_coerced += other.numbers_coerced;
        self.strip_failures += other.strip_failures;
    }
}

/// Recursive sanitizer for request value trees.
///
/// Every string leaf is replaced by its stripped form and every number leaf
/// by its stripped decimal string. Arrays and mappings are rebuilt with the
/// same length, order and keys. Booleans and nulls pass through unchanged.
///
/// The sanitizer holds no mutable state and is `Send + Sync` whenever its
/// stripper is, so one instance can serve concurrent requests.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::{FieldValue, XssSanitizer};
/// use serde_json::{json, Value};
///
/// let sanitizer = XssSanitizer::new();
/// let input = json!({
///     "name": "<script>hi</script>",
///     "note": "<strong>ok</strong>",
///     "ids": [100, 200],
///     "active": true,
/// });
///
/// let output = Value::from(sanitizer.sanitize(FieldValue::from(input)));
///
/// assert_eq!(output, json!({"name": "", "note": "ok", "ids": ["100", "200"], "active": true}));
/// ```
#[derive(Debug, Clone)]
pub struct XssSanitizer<S = TagStripper> {
    stripper: S,
    coerce_numbers: bool,
}

impl XssSanitizer<TagStripper> {
    /// Creates a sanitizer backed by the default [`TagStripper`].
    pub fn new() -> Self {
        Self::with_stripper(TagStripper)
    }
}

impl Default for XssSanitizer<TagStripper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MarkupStripper> XssSanitizer<S> {
    /// Creates a sanitizer backed by a custom markup stripper.
    pub fn with_stripper(stripper: S) -> Self {
        Self {
            stripper,
            coerce_numbers: true,
        }
    }

    /// Sets whether number leaves are converted to strings (default: `true`).
    ///
    /// When disabled, numbers pass through unchanged like booleans do.
    pub fn coerce_numbers(mut self, coerce: bool) -> Self {
        self.coerce_numbers = coerce;
        self
    }

    /// Returns a sanitized copy of `value`.
    pub fn sanitize(&self, value: FieldValue) -> FieldValue {
        self.sanitize_with_report(value).0
    }

    /// Returns a sanitized copy of `value` together with traversal counters.
    pub fn sanitize_with_report(&self, value: FieldValue) -> (FieldValue, SanitizeReport) {
        let mut report = SanitizeReport::default();
        let sanitized = self.walk(value, &mut report);
        (sanitized, report)
    }

    fn walk(&self, value: FieldValue, report: &mut SanitizeReport) -> FieldValue {
        match value {
            FieldValue::String(s) => FieldValue::String(self.strip_leaf(s, report)),
            FieldValue::Number(n) if self.coerce_numbers => {
                report.numbers_coerced += 1;
                FieldValue::String(self.strip_leaf(n.to_string(), report))
            }
            FieldValue::Array(items) => FieldValue::Array(
                items
                    .into_iter()
                    .map(|item| self.walk(item, report))
                    .collect(),
            ),
            FieldValue::Mapping(map) => FieldValue::Mapping(
                map.into_iter()
                    .map(|(key, item)| (key, self.walk(item, report)))
                    .collect(),
            ),
            other @ (FieldValue::Null | FieldValue::Bool(_) | FieldValue::Number(_)) => other,
        }
    }

    fn strip_leaf(&self, original: String, report: &mut SanitizeReport) -> String {
        report.strings_visited += 1;

        match self.stripper.strip(&original) {
            Ok(stripped) => {
                if stripped != original {
                    report.strings_altered += 1;
                }
                stripped
            }
            Err(err) => {
                // A failed leaf must not abort its siblings.
                report.strip_failures += 1;
                tracing::warn!(kind = %err.kind(), error = %err, "markup stripping failed, keeping original value");
                original
            }
        }
    }
}

/// Sanitizes `value` with the default [`XssSanitizer`].
///
/// # Examples
///
/// ```
/// use xss_sanitizer::{sanitize, FieldValue};
///
/// assert_eq!(sanitize(FieldValue::from(20i64)), FieldValue::from("20"));
/// assert_eq!(sanitize(FieldValue::Null), FieldValue::Null);
/// ```
pub fn sanitize(value: FieldValue) -> FieldValue {
    XssSanitizer::new().sanitize(value)
}
