//! Proptest strategies shared by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

use crate::value::FieldValue;

/// Text that contains no tag, though it may contain a lone `<` or `>`.
pub(crate) fn arb_plain_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 .,!?&;:()\\[\\]=-]{0,40}").unwrap(),
        prop::string::string_regex("[a-z ]{0,10} < [0-9]{1,3} > [a-z ]{0,10}").unwrap(),
    ]
}

/// Text mixing plain fragments with tags, comments and script elements.
pub(crate) fn arb_markup_string() -> impl Strategy<Value = String> {
    let tokens = vec![
        "<b>",
        "</b>",
        "<h1 class=\"x\">",
        "</h1>",
        "<br/>",
        "<script>",
        "</script>",
        "<SCRIPT src=x>",
        "<!--",
        "-->",
        "<!DOCTYPE html>",
        "<",
        ">",
        "scr",
        "ipt",
    ];
    let fragment = prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ]{0,8}").unwrap(),
        prop::sample::select(tokens).prop_map(String::from),
    ];

    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

/// Arbitrary request value trees up to four levels deep.
pub(crate) fn arb_field_value() -> impl Strategy<Value = FieldValue> {
    let leaf = prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<i64>().prop_map(FieldValue::from),
        arb_markup_string().prop_map(FieldValue::String),
    ];

    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(FieldValue::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(FieldValue::Mapping),
        ]
    })
}

/// Returns `true` if both trees have the same containers, keys and lengths.
///
/// A number leaf matches a string leaf, since sanitization coerces numbers.
pub(crate) fn same_shape(before: &FieldValue, after: &FieldValue) -> bool {
    match (before, after) {
        (FieldValue::Array(a), FieldValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_shape(x, y))
        }
        (FieldValue::Mapping(a), FieldValue::Mapping(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| same_shape(x, y)))
        }
        (FieldValue::Number(_), FieldValue::String(_)) => true,
        (a, b) => a.kind() == b.kind(),
    }
}

/// Runs `f` under a thread-local `tracing` subscriber and returns its output.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
