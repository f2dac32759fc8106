//! Middleware configuration.
//!
//! The defaults process all three request sections and coerce numbers to
//! strings. Hosts can build a config in code or deserialize it from their own
//! configuration files:
//!
//! ```
//! use xss_sanitizer::{SanitizerConfig, Section};
//!
//! let config: SanitizerConfig =
//!     serde_json::from_str(r#"{ "sections": ["body", "query"] }"#).unwrap();
//!
//! assert!(config.includes(Section::Body));
//! assert!(!config.includes(Section::Params));
//! assert!(config.coerces_numbers());
//! ```

use std::fmt;

use serde::Deserialize;

/// One of the three request sections the middleware can sanitize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Parsed request body.
    Body,
    /// Parsed URL query string.
    Query,
    /// Route parameters from path matching.
    Params,
}

impl Section {
    /// All sections, in the order the middleware processes them.
    pub const ALL: [Section; 3] = [Section::Body, Section::Query, Section::Params];

    /// Returns the lowercase section name used in logs and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Params => "params",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`XssSanitizerMiddleware`](crate::web::XssSanitizerMiddleware).
///
/// # Examples
///
/// ```
/// use xss_sanitizer::{SanitizerConfig, Section};
///
/// let config = SanitizerConfig::default().without_section(Section::Params);
///
/// assert_eq!(config.sections(), &[Section::Body, Section::Query]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizerConfig {
    sections: Vec<Section>,
    coerce_numbers: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            coerce_numbers: true,
        }
    }
}

impl SanitizerConfig {
    /// Restricts processing to `sections`.
    ///
    /// Duplicates are ignored and the fixed body, query, params order is kept
    /// regardless of the order given.
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections = sections.into_iter().collect();
        self.normalize();
        self
    }

    /// Stops processing `section`.
    pub fn without_section(mut self, section: Section) -> Self {
        self.sections.retain(|s| *s != section);
        self
    }

    /// Sets whether number leaves are converted to strings.
    pub fn coerce_numbers(mut self, coerce: bool) -> Self {
        self.coerce_numbers = coerce;
        self
    }

    /// Returns the sections to process, in processing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns `true` if `section` is processed.
    pub fn includes(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Returns `true` if number leaves become strings.
    pub fn coerces_numbers(&self) -> bool {
        self.coerce_numbers
    }

    // Deserialized configs bypass `with_sections`, so the middleware calls
    // this before use as well.
    pub(crate) fn normalize(&mut self) {
        self.sections.sort_unstable();
        self.sections.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_processes_all_sections() {
        let config = SanitizerConfig::default();

        assert_eq!(config.sections(), &Section::ALL);
        assert!(config.coerces_numbers());
    }

    #[test]
    fn with_sections_orders_and_dedups() {
        let config = SanitizerConfig::default().with_sections([
            Section::Params,
            Section::Body,
            Section::Params,
        ]);

        assert_eq!(config.sections(), &[Section::Body, Section::Params]);
    }

    #[test]
    fn without_section_removes_it() {
        let config = SanitizerConfig::default().without_section(Section::Query);

        assert!(config.includes(Section::Body));
        assert!(!config.includes(Section::Query));
        assert!(config.includes(Section::Params));
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config: SanitizerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, SanitizerConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config: SanitizerConfig =
            serde_json::from_str(r#"{"sections": ["params"], "coerce_numbers": false}"#).unwrap();

        assert_eq!(config.sections(), &[Section::Params]);
        assert!(!config.coerces_numbers());
    }

    #[test]
    fn json_rejects_unknown_sections_and_fields() {
        assert!(serde_json::from_str::<SanitizerConfig>(r#"{"sections": ["headers"]}"#).is_err());
        assert!(serde_json::from_str::<SanitizerConfig>(r#"{"allow_tags": ["b"]}"#).is_err());
    }

    #[test]
    fn section_names() {
        assert_eq!(Section::Body.to_string(), "body");
        assert_eq!(Section::Query.as_str(), "query");
        assert_eq!(format!("{}", Section::Params), "params");
    }
}
