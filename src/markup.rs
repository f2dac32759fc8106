//! Markup stripping for individual strings.
//!
//! The stripping policy has no allow-list: every tag is removed, script
//! elements are removed together with their body, and the text between any
//! other tags survives. A tag opener that never closes swallows the rest of
//! the input, since a template would close it with its own `>`.
//!
//! ```
//! use xss_sanitizer::strip;
//!
//! assert_eq!(strip("<script>alert(1)</script>"), "");
//! assert_eq!(strip("<strong>strong hello world</strong>"), "strong hello world");
//! assert_eq!(strip("a < b"), "a < b");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::StripError;

static SCRIPT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</script\b[^>]*>").expect("valid script close regex"));

/// Removes markup from a single string.
///
/// The input is scanned once, left to right. Removing a tag can join the text
/// on either side into a new tag, which is removed in turn, so the result never
/// contains a tag opener and `strip(&strip(s)) == strip(s)` always holds.
/// Input without tags is returned unchanged.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::strip;
///
/// assert_eq!(strip("<h1>xss</h1>"), "xss");
/// assert_eq!(strip("<b>bold</b> and <i>italic</i>"), "bold and italic");
/// assert_eq!(strip("<scr<b></b>ipt>alert(1)</script>"), "");
/// assert_eq!(strip("ok<img src=x onerror=alert(1)//"), "ok");
/// ```
pub fn strip(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }

    let mut scanner = Scanner::with_capacity(input.len());
    let mut pos = 0;
    while let Some(c) = input[pos..].chars().next() {
        pos += c.len_utf8();
        match scanner.push(c) {
            None => {}
            Some(Skip::Script) => match SCRIPT_CLOSE.find_at(input, pos) {
                Some(close) => pos = close.end(),
                None => break,
            },
            Some(Skip::Comment) => match input[pos..].find("-->") {
                Some(offset) => pos += offset + 3,
                None => break,
            },
        }
    }
    scanner.finish()
}

/// Raw input the scanner must skip after a removal.
enum Skip {
    /// Everything up to and including the closing script tag.
    Script,
    /// Everything up to and including `-->`.
    Comment,
}

/// Output buffer for [`strip`].
///
/// Only the text after the last kept `>` can still become part of a tag, so
/// removals truncate `out` and never look further back than that.
struct Scanner {
    out: String,
    // Positions of every `<` in `out` after the last kept `>`.
    pending: Vec<usize>,
    // The subset of `pending` that opens a tag: `<a`, `</a`, `<!` or `<?`.
    openers: Vec<usize>,
}

impl Scanner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending: Vec::new(),
            openers: Vec::new(),
        }
    }

    fn push(&mut self, c: char) -> Option<Skip> {
        match c {
            '<' => {
                self.pending.push(self.out.len());
                self.out.push(c);
                None
            }
            '>' => match self.openers.last().copied() {
                Some(start) => {
                    let script = is_script_open(&self.out[start..]);
                    self.truncate(start);
                    script.then_some(Skip::Script)
                }
                None => {
                    // No `<` before this point can open a tag any more.
                    self.out.push(c);
                    self.pending.clear();
                    None
                }
            },
            _ => {
                if c == '-' && self.out.ends_with("<!-") {
                    self.truncate(self.out.len() - 3);
                    return Some(Skip::Comment);
                }
                self.mark_opener(c);
                self.out.push(c);
                None
            }
        }
    }

    // Called before `c` is appended.
    fn mark_opener(&mut self, c: char) {
        let Some(&lt) = self.pending.last() else {
            return;
        };
        let at = self.out.len();
        let opens = if at == lt + 1 {
            c.is_ascii_alphabetic() || c == '!' || c == '?'
        } else {
            at == lt + 2 && self.out.as_bytes()[lt + 1] == b'/' && c.is_ascii_alphabetic()
        };
        if opens {
            self.openers.push(lt);
        }
    }

    fn truncate(&mut self, start: usize) {
        self.out.truncate(start);
        while self.pending.last().is_some_and(|&p| p >= start) {
            self.pending.pop();
        }
        while self.openers.last().is_some_and(|&p| p >= start) {
            self.openers.pop();
        }
    }

    fn finish(mut self) -> String {
        if let Some(&start) = self.openers.first() {
            self.out.truncate(start);
        }
        self.out
    }
}

// `tag` starts at its `<` and excludes the closing `>`.
fn is_script_open(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() >= 7
        && bytes[1..7].eq_ignore_ascii_case(b"script")
        && !tag[7..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// A pluggable markup detection backend.
///
/// The sanitizer calls [`strip`](MarkupStripper::strip) once per string leaf.
/// Implementations must remove script elements with their content and unwrap
/// every other tag, keeping its text. A failure only affects the leaf being
/// stripped: the sanitizer keeps that leaf's original text and moves on.
///
/// Closures with the matching signature implement the trait:
///
/// ```
/// use xss_sanitizer::{MarkupStripper, StripError};
///
/// let upper = |input: &str| -> Result<String, StripError> { Ok(input.to_uppercase()) };
/// assert_eq!(upper.strip("abc").unwrap(), "ABC");
/// ```
pub trait MarkupStripper: Send + Sync {
    /// Returns `input` with markup removed.
    ///
    /// # Errors
    ///
    /// Returns `StripError` if the backend cannot process `input`.
    fn strip(&self, input: &str) -> Result<String, StripError>;
}

impl<F> MarkupStripper for F
where
    F: Fn(&str) -> Result<String, StripError> + Send + Sync,
{
    fn strip(&self, input: &str) -> Result<String, StripError> {
        self(input)
    }
}

/// The default regex-backed stripper. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagStripper;

impl MarkupStripper for TagStripper {
    fn strip(&self, input: &str) -> Result<String, StripError> {
        Ok(strip(input))
    }
}
