//! Query-string flattening for EspoCRM read requests.
//!
//! EspoCRM parses query strings the PHP way: nested arrays and objects are
//! spelled out with bracketed key paths, so
//! `{"whereGroup": [{"type": "equals"}]}` becomes `whereGroup[0][type]=equals`.

use serde_json::Value;
use url::form_urlencoded;

#[derive(Debug, Clone)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Render a key path: the top-level key is bare, everything below it (and
/// any list index, even at the top) is bracketed.
fn render_key(path: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for (depth, segment) in path.iter().enumerate() {
        match segment {
            Segment::Key(key) if depth == 0 => out.push_str(key),
            Segment::Key(key) => {
                out.push('[');
                out.push_str(key);
                out.push(']');
            }
            Segment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn walk<'a>(value: &'a Value, path: &mut Vec<Segment<'a>>, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                walk(item, path, pairs);
                path.pop();
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                path.push(Segment::Key(key));
                walk(item, path, pairs);
                path.pop();
            }
        }
        scalar => {
            let key = render_key(path);
            let rendered = render_scalar(scalar);
            // A repeated key keeps its first position and takes the last value.
            match pairs.iter_mut().find(|(existing, _)| *existing == key) {
                Some(pair) => pair.1 = rendered,
                None => pairs.push((key, rendered)),
            }
        }
    }
}

/// Flatten `value` into `(key path, value)` pairs in traversal order.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    walk(value, &mut Vec::new(), &mut pairs);
    pairs
}

/// Flatten `value` and form-urlencode the pairs into a query string
/// (without the leading `?`).
pub fn http_build_query(value: &Value) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, rendered) in flatten(value) {
        serializer.append_pair(&key, &rendered);
    }
    serializer.finish()
}
