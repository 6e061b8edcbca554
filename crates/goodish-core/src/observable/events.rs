use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Path, PathStep};

/// The three event names an observable publishes on its bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Changed,
    Deleted,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Added, ChangeKind::Changed, ChangeKind::Deleted];

    /// Bus event name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Changed => "changed",
            ChangeKind::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutation of an observed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChangeEvent {
    /// A value was stored where there was none.
    Added { path: Path, value: Value },
    /// An existing value was replaced by a different one.
    Changed { path: Path, value: Value },
    /// A value was removed.
    Deleted { path: Path },
}

impl ChangeEvent {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeEvent::Added { .. } => ChangeKind::Added,
            ChangeEvent::Changed { .. } => ChangeKind::Changed,
            ChangeEvent::Deleted { .. } => ChangeKind::Deleted,
        }
    }

    pub fn path(&self) -> &[PathStep] {
        match self {
            ChangeEvent::Added { path, .. }
            | ChangeEvent::Changed { path, .. }
            | ChangeEvent::Deleted { path } => path,
        }
    }

    /// The new value, for `Added` and `Changed`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ChangeEvent::Added { value, .. } | ChangeEvent::Changed { value, .. } => Some(value),
            ChangeEvent::Deleted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = ChangeKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["added", "changed", "deleted"]);
        assert_eq!(ChangeKind::Changed.to_string(), "changed");
    }

    #[test]
    fn test_accessors() {
        let ev = ChangeEvent::Changed {
            path: vec![PathStep::Key("a".into())],
            value: json!(2),
        };
        assert_eq!(ev.kind(), ChangeKind::Changed);
        assert_eq!(ev.path(), &[PathStep::Key("a".into())]);
        assert_eq!(ev.value(), Some(&json!(2)));

        let ev = ChangeEvent::Deleted { path: vec![] };
        assert_eq!(ev.value(), None);
        assert!(ev.path().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let ev = ChangeEvent::Added {
            path: vec![PathStep::Key("list".into()), PathStep::Index(0)],
            value: json!({"id": 1}),
        };
        assert_eq!(
            serde_json::to_value(&ev).unwrap(),
            json!({"type": "added", "path": ["list", 0], "value": {"id": 1}})
        );
    }
}
