use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step of a [`Path`]: an object key or an array index.
///
/// Serializes untagged, as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

/// Location of a value relative to an observable's root. The root is the
/// empty path.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// The step as an object key; indices are stringified.
    pub fn to_key(&self) -> String {
        match self {
            PathStep::Key(key) => key.clone(),
            PathStep::Index(index) => index.to_string(),
        }
    }

    /// The step as an array index. Keys count when they are canonical
    /// decimal integers (`"3"`, not `"03"` or `"+3"`).
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(index) => Some(*index),
            PathStep::Key(key) => parse_index(key),
        }
    }
}

fn parse_index(token: &str) -> Option<usize> {
    let canonical = token == "0"
        || (!token.is_empty()
            && !token.starts_with('0')
            && token.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        token.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // `~` first so the `~1` produced for `/` is not escaped again.
    component.replace('~', "~0").replace('/', "~1")
}

fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Format a path as an RFC 6901 JSON Pointer. The root formats as `""`.
///
/// ```
/// use goodish_core::{format_path, PathStep};
///
/// let path = vec![PathStep::from("a/b"), PathStep::Index(0)];
/// assert_eq!(format_path(&path), "/a~1b/0");
/// assert_eq!(format_path(&[]), "");
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Parse a JSON Pointer into a path.
///
/// A missing leading `/` is tolerated. Canonical decimal tokens become
/// [`PathStep::Index`], everything else a [`PathStep::Key`].
///
/// ```
/// use goodish_core::{parse_path, PathStep};
///
/// assert_eq!(parse_path("/list/1/name"), vec![
///     PathStep::Key("list".into()),
///     PathStep::Index(1),
///     PathStep::Key("name".into()),
/// ]);
/// assert_eq!(parse_path("a~0b"), vec![PathStep::Key("a~b".into())]);
/// ```
pub fn parse_path(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/')
        .map(|token| match parse_index(token) {
            Some(index) => PathStep::Index(index),
            None => PathStep::Key(unescape_component(token)),
        })
        .collect()
}

fn child<'a>(value: &'a Value, step: &PathStep) -> Option<&'a Value> {
    match (value, step) {
        (Value::Object(map), PathStep::Key(key)) => map.get(key),
        (Value::Object(map), PathStep::Index(index)) => map.get(&index.to_string()),
        (Value::Array(arr), step) => arr.get(step.as_index()?),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, step: &PathStep) -> Option<&'a mut Value> {
    match (value, step) {
        (Value::Object(map), PathStep::Key(key)) => map.get_mut(key),
        (Value::Object(map), PathStep::Index(index)) => map.get_mut(&index.to_string()),
        (Value::Array(arr), step) => arr.get_mut(step.as_index()?),
        _ => None,
    }
}

pub(crate) fn value_at_path<'a>(value: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    path.iter().try_fold(value, |cur, step| child(cur, step))
}

pub(crate) fn value_at_path_mut<'a>(
    value: &'a mut Value,
    path: &[PathStep],
) -> Option<&'a mut Value> {
    let mut cur = value;
    for step in path {
        cur = child_mut(cur, step)?;
    }
    Some(cur)
}

/// Paths of every object and array inside `value`, `value` itself included,
/// in depth-first order.
pub(crate) fn container_paths(value: &Value) -> Vec<Path> {
    fn walk(value: &Value, path: &mut Path, out: &mut Vec<Path>) {
        match value {
            Value::Object(map) => {
                out.push(path.clone());
                for (key, child) in map {
                    path.push(PathStep::Key(key.clone()));
                    walk(child, path, out);
                    path.pop();
                }
            }
            Value::Array(arr) => {
                out.push(path.clone());
                for (index, child) in arr.iter().enumerate() {
                    path.push(PathStep::Index(index));
                    walk(child, path, out);
                    path.pop();
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    walk(value, &mut Vec::new(), &mut out);
    out
}
