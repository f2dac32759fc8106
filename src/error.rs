use std::fmt;

/// Error returned by a [`MarkupStripper`](crate::MarkupStripper) that could not
/// process a string.
///
/// The error never carries the rejected input, only a description of why
/// stripping failed. The sanitizer treats it as a per-leaf failure and keeps
/// the original text for that leaf.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::{StripError, StripErrorKind};
///
/// let error = StripError::new(StripErrorKind::TooLarge, "input exceeds 1 MiB");
/// assert_eq!(error.kind(), StripErrorKind::TooLarge);
/// assert_eq!(error.to_string(), "markup stripping failed (input too large): input exceeds 1 MiB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripError {
    kind: StripErrorKind,
    message: String,
}

impl StripError {
    /// Creates a new strip error.
    pub fn new(kind: StripErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> StripErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markup stripping failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for StripError {}

/// Kind of markup stripping failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripErrorKind {
    /// The markup could not be tokenized.
    Malformed,
    /// The input exceeds a limit of the stripping backend.
    TooLarge,
    /// The stripping backend failed for reasons unrelated to the input.
    Backend,
}

impl fmt::Display for StripErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed markup"),
            Self::TooLarge => write!(f, "input too large"),
            Self::Backend => write!(f, "backend failure"),
        }
    }
}
