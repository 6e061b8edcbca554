use std::borrow::BorrowMut;

use serde_json::Value;

use super::{parse_path, Observable, ObservableError, PathStep};

/// A cursor into an [`Observable`], addressing one path.
///
/// Mutations through a handle publish exactly like the matching
/// [`Observable`] methods.
pub struct Handle<'a, B: BorrowMut<Value>> {
    observable: &'a mut Observable<B>,
    path: Vec<PathStep>,
}

impl<'a, B: BorrowMut<Value>> Handle<'a, B> {
    pub(super) fn new(observable: &'a mut Observable<B>, path: Vec<PathStep>) -> Self {
        Self { observable, path }
    }

    pub fn at_ptr(mut self, ptr: &str) -> Self {
        self.path.extend(parse_path(ptr));
        self
    }

    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.push(PathStep::Key(key.into()));
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathStep::Index(index));
        self
    }

    pub fn path(&self) -> &[PathStep] {
        &self.path
    }

    pub fn get(&self) -> Option<&Value> {
        self.observable.get(&self.path)
    }

    pub fn set(&mut self, value: Value) -> Result<(), ObservableError> {
        self.observable.set(&self.path, value)
    }

    pub fn delete(&mut self) -> Result<bool, ObservableError> {
        self.observable.delete(&self.path)
    }

    pub fn push(&mut self, value: Value) -> Result<usize, ObservableError> {
        self.observable.push(&self.path, value)
    }

    pub fn pop(&mut self) -> Result<Option<Value>, ObservableError> {
        self.observable.pop(&self.path)
    }

    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), ObservableError> {
        self.observable.insert(&self.path, index, value)
    }

    pub fn remove(&mut self, index: usize) -> Result<Value, ObservableError> {
        self.observable.remove(&self.path, index)
    }

    /// Element or entry count of the addressed array or object.
    pub fn len(&self) -> Option<usize> {
        match self.get()? {
            Value::Array(arr) => Some(arr.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Keys of the addressed object, in insertion order.
    pub fn keys(&self) -> Option<Vec<String>> {
        self.get()?.as_object().map(|map| map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ChangeEvent, ChangeKind};
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_handle_navigation() {
        let mut o = Observable::new(json!({"a": {"list": [1, 2]}})).unwrap();
        let h = o.root().at_key("a").at_key("list").at_index(1);
        assert_eq!(h.path(), [PathStep::from("a"), PathStep::from("list"), PathStep::Index(1)]);
        assert_eq!(h.get(), Some(&json!(2)));

        let h = o.at("/a").at_ptr("/list");
        assert_eq!(h.len(), Some(2));
        assert_eq!(o.root().keys(), Some(vec!["a".to_string()]));
        assert_eq!(o.at("/a/list/0").len(), None);
    }

    #[test]
    fn test_handle_mutations_publish() {
        let mut o = Observable::new(json!({"list": []})).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        o.on(ChangeKind::Added, move |ev: &ChangeEvent| s.lock().unwrap().push(ev.clone()));

        let mut list = o.at("/list");
        assert_eq!(list.push(json!("x")).unwrap(), 0);
        list.insert(0, json!("w")).unwrap();
        assert_eq!(list.remove(1).unwrap(), json!("x"));
        assert_eq!(list.pop().unwrap(), Some(json!("w")));
        assert_eq!(list.pop().unwrap(), None);

        o.at("/name").set(json!("n")).unwrap();
        assert!(o.at("/name").delete().unwrap());

        assert_eq!(seen.lock().unwrap().len(), 3);
        assert_eq!(o.value(), &json!({"list": []}));
    }
}
