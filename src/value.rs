//! The value tree the sanitizer walks.
//!
//! A request section (body, query or params) is a mapping from field name to
//! [`FieldValue`]. Hosts that parse JSON bodies with `serde_json` can convert
//! in both directions without loss.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

/// A parsed request value: a string, a number, an array, a mapping, or one of
/// the pass-through scalars (`Bool`, `Null`).
///
/// Numbers keep the parser's representation so that their decimal form is
/// reproduced exactly when the sanitizer coerces them to strings.
///
/// # Examples
///
/// ```
/// use xss_sanitizer::FieldValue;
/// use serde_json::json;
///
/// let value = FieldValue::from(json!({"name": "<b>Ada</b>", "tags": [1, 2]}));
/// assert_eq!(value.get("name").and_then(FieldValue::as_str), Some("<b>Ada</b>"));
/// assert_eq!(value.get("tags").map(FieldValue::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// Absent value; passed through unchanged.
    #[default]
    Null,
    /// Boolean flag; passed through unchanged.
    Bool(bool),
    /// Numeric leaf.
    Number(Number),
    /// String leaf.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<FieldValue>),
    /// Key-value mapping. Key order carries no meaning.
    Mapping(BTreeMap<String, FieldValue>),
}

/// The shape of a [`FieldValue`] without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// [`FieldValue::Null`]
    Null,
    /// [`FieldValue::Bool`]
    Bool,
    /// [`FieldValue::Number`]
    Number,
    /// [`FieldValue::String`]
    String,
    /// [`FieldValue::Array`]
    Array,
    /// [`FieldValue::Mapping`]
    Mapping,
}

impl FieldValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Null => FieldKind::Null,
            Self::Bool(_) => FieldKind::Bool,
            Self::Number(_) => FieldKind::Number,
            Self::String(_) => FieldKind::String,
            Self::Array(_) => FieldKind::Array,
            Self::Mapping(_) => FieldKind::Mapping,
        }
    }

    /// Returns the string content if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self {
            Self::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Number of direct children for containers, `0` for leaves.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(items) => items.len(),
            Self::Mapping(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns `true` if this is a container without children, or a leaf.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::String(s) => Value::String(s),
            FieldValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            FieldValue::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        Self::Mapping(map)
    }
}
