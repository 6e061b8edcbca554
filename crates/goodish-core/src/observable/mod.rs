//! Observable JSON documents.
//!
//! An [`Observable`] wraps a root object or array and is the only way to
//! mutate it while it is observed. Every mutation goes through an explicit
//! accessor (`set`, `delete`, `push`, ...) which publishes a [`ChangeEvent`] on
//! the observable's [`Emitter`] under the event name `added`, `changed` or
//! `deleted`, tagged with the full path from the root.
//!
//! The root is never copied: an `Observable<&mut Value>` mutates the caller's
//! document in place, an `Observable<Value>` owns it until
//! [`Observable::into_inner`].
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use goodish_core::{observe, ChangeKind, format_path};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": 1});
//! let mut o = observe(&mut doc).unwrap();
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! for kind in ChangeKind::ALL {
//!     let log = Arc::clone(&log);
//!     o.on(kind, move |ev| {
//!         let line = format!("{} {}", ev.kind(), format_path(ev.path()));
//!         log.lock().unwrap().push(line);
//!     });
//! }
//!
//! o.at("/b").set(json!(2)).unwrap(); // added
//! o.at("/a").set(json!(2)).unwrap(); // changed
//! o.at("/a").delete().unwrap();      // deleted
//! drop(o);
//!
//! assert_eq!(*log.lock().unwrap(), vec!["added /b", "changed /a", "deleted /a"]);
//! assert_eq!(doc, json!({"b": 2}));
//! ```

use std::borrow::BorrowMut;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, trace};

use crate::emitter::{Emitter, ListenerId};

mod events;
mod handle;
mod path;

pub use events::{ChangeEvent, ChangeKind};
pub use handle::Handle;
pub use path::{format_path, parse_path, Path, PathStep};
use path::{container_paths, value_at_path, value_at_path_mut};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservableError {
    #[error("Can only convert objects and arrays to observable objects")]
    NotContainer,
    #[error("mutation needs a non-empty path")]
    InvalidPath,
    #[error("path not found: {0}")]
    PathNotFound(String),
    #[error("parent of {0} is not an object or array")]
    ParentNotContainer(String),
    #[error("value at {0} is not an array")]
    NotArray(String),
    #[error("invalid array index: {0}")]
    InvalidKey(String),
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Wrap `root` in an [`Observable`].
pub fn observe<B: BorrowMut<Value>>(root: B) -> Result<Observable<B>, ObservableError> {
    Observable::new(root)
}

/// A JSON object or array plus the bus its changes are published on.
#[derive(Debug)]
pub struct Observable<B: BorrowMut<Value> = Value> {
    root: B,
    bus: Emitter<ChangeEvent>,
}

/// Where a mutation lands: an object entry or an array element.
enum Slot<'a> {
    Entry(&'a mut Map<String, Value>, String),
    Element(&'a mut Vec<Value>, usize),
}

fn locate<'a>(root: &'a mut Value, path: &[PathStep]) -> Result<Slot<'a>, ObservableError> {
    let Some((leaf, parent_path)) = path.split_last() else {
        return Err(ObservableError::InvalidPath);
    };
    match value_at_path_mut(root, parent_path) {
        Some(Value::Object(map)) => Ok(Slot::Entry(map, leaf.to_key())),
        Some(Value::Array(arr)) => {
            let index = leaf
                .as_index()
                .ok_or_else(|| ObservableError::InvalidKey(leaf.to_string()))?;
            Ok(Slot::Element(arr, index))
        }
        Some(_) => Err(ObservableError::ParentNotContainer(format_path(path))),
        None => Err(ObservableError::PathNotFound(format_path(parent_path))),
    }
}

fn array_at<'a>(
    root: &'a mut Value,
    path: &[PathStep],
) -> Result<&'a mut Vec<Value>, ObservableError> {
    match value_at_path_mut(root, path) {
        Some(Value::Array(arr)) => Ok(arr),
        Some(_) => Err(ObservableError::NotArray(format_path(path))),
        None => Err(ObservableError::PathNotFound(format_path(path))),
    }
}

fn child_path(path: &[PathStep], index: usize) -> Path {
    let mut out = path.to_vec();
    out.push(PathStep::Index(index));
    out
}

fn publish(bus: &mut Emitter<ChangeEvent>, event: ChangeEvent) {
    let kind = event.kind();
    let listeners = bus.emit(kind.as_str(), &event);
    trace!(kind = kind.as_str(), path = %format_path(event.path()), listeners, "change published");
}

impl<B: BorrowMut<Value>> Observable<B> {
    /// Start observing `root`, which must be an object or an array.
    pub fn new(root: B) -> Result<Self, ObservableError> {
        if !matches!(root.borrow(), Value::Object(_) | Value::Array(_)) {
            return Err(ObservableError::NotContainer);
        }
        debug!(containers = container_paths(root.borrow()).len(), "observable created");
        Ok(Self {
            root,
            bus: Emitter::new(),
        })
    }

    /// The observed document.
    pub fn value(&self) -> &Value {
        self.root.borrow()
    }

    /// Stop observing and hand the root back.
    pub fn into_inner(self) -> B {
        self.root
    }

    /// Stop observing and hand back the root together with the bus.
    pub fn into_parts(self) -> (B, Emitter<ChangeEvent>) {
        (self.root, self.bus)
    }

    pub fn bus(&self) -> &Emitter<ChangeEvent> {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Emitter<ChangeEvent> {
        &mut self.bus
    }

    /// Listen for one kind of change.
    pub fn on<F>(&mut self, kind: ChangeKind, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.bus.on(kind.as_str(), listener)
    }

    /// Remove a listener registered with [`Observable::on`].
    pub fn off(&mut self, kind: ChangeKind, listener: ListenerId) -> bool {
        self.bus.off(kind.as_str(), Some(listener), true).unwrap_or(false)
    }

    /// Paths of every object and array currently in the document, the root
    /// (empty path) first.
    pub fn containers(&self) -> Vec<Path> {
        container_paths(self.root.borrow())
    }

    pub fn get(&self, path: &[PathStep]) -> Option<&Value> {
        value_at_path(self.root.borrow(), path)
    }

    /// A handle addressing the root.
    pub fn root(&mut self) -> Handle<'_, B> {
        Handle::new(self, Vec::new())
    }

    /// A handle addressing the JSON Pointer `ptr`.
    pub fn at(&mut self, ptr: &str) -> Handle<'_, B> {
        Handle::new(self, parse_path(ptr))
    }

    /// Store `value` at `path`.
    ///
    /// Publishes `added` when nothing was stored there (a missing key, or the
    /// index one past the end of an array), `changed` when the stored value
    /// differs from `value`, and nothing when they are equal. The event is
    /// published before the document is updated.
    ///
    /// # Errors
    ///
    /// The path must be non-empty and its parent must be an existing object or
    /// array. Array indices may be at most the array's length.
    pub fn set(&mut self, path: &[PathStep], value: Value) -> Result<(), ObservableError> {
        match locate(self.root.borrow_mut(), path)? {
            Slot::Entry(map, key) => {
                let event = match map.get(&key) {
                    None => Some(ChangeEvent::Added {
                        path: path.to_vec(),
                        value: value.clone(),
                    }),
                    Some(old) if *old != value => Some(ChangeEvent::Changed {
                        path: path.to_vec(),
                        value: value.clone(),
                    }),
                    Some(_) => None,
                };
                if let Some(event) = event {
                    publish(&mut self.bus, event);
                }
                map.insert(key, value);
            }
            Slot::Element(arr, index) => {
                let len = arr.len();
                let event = match arr.get(index) {
                    None if index == len => Some(ChangeEvent::Added {
                        path: path.to_vec(),
                        value: value.clone(),
                    }),
                    None => return Err(ObservableError::IndexOutOfBounds { index, len }),
                    Some(old) if *old != value => Some(ChangeEvent::Changed {
                        path: path.to_vec(),
                        value: value.clone(),
                    }),
                    Some(_) => None,
                };
                if let Some(event) = event {
                    publish(&mut self.bus, event);
                }
                if index == len {
                    arr.push(value);
                } else {
                    arr[index] = value;
                }
            }
        }
        Ok(())
    }

    /// Remove the value at `path`, returning whether there was one.
    ///
    /// `deleted` is published before the removal, whether or not the key
    /// existed. Array elements are replaced by `null` so later indices keep
    /// their positions; use [`Observable::remove`] to shift them.
    pub fn delete(&mut self, path: &[PathStep]) -> Result<bool, ObservableError> {
        let slot = locate(self.root.borrow_mut(), path)?;
        publish(&mut self.bus, ChangeEvent::Deleted { path: path.to_vec() });
        let existed = match slot {
            Slot::Entry(map, key) => map.shift_remove(&key).is_some(),
            Slot::Element(arr, index) => match arr.get_mut(index) {
                Some(item) => {
                    *item = Value::Null;
                    true
                }
                None => false,
            },
        };
        Ok(existed)
    }

    /// Append to the array at `path`, returning the new element's index.
    pub fn push(&mut self, path: &[PathStep], value: Value) -> Result<usize, ObservableError> {
        let arr = array_at(self.root.borrow_mut(), path)?;
        let index = arr.len();
        publish(
            &mut self.bus,
            ChangeEvent::Added {
                path: child_path(path, index),
                value: value.clone(),
            },
        );
        arr.push(value);
        Ok(index)
    }

    /// Remove the last element of the array at `path`. An empty array
    /// publishes nothing.
    pub fn pop(&mut self, path: &[PathStep]) -> Result<Option<Value>, ObservableError> {
        let arr = array_at(self.root.borrow_mut(), path)?;
        if arr.is_empty() {
            return Ok(None);
        }
        publish(
            &mut self.bus,
            ChangeEvent::Deleted {
                path: child_path(path, arr.len() - 1),
            },
        );
        Ok(arr.pop())
    }

    /// Insert into the array at `path`, shifting later elements right.
    pub fn insert(
        &mut self,
        path: &[PathStep],
        index: usize,
        value: Value,
    ) -> Result<(), ObservableError> {
        let arr = array_at(self.root.borrow_mut(), path)?;
        let len = arr.len();
        if index > len {
            return Err(ObservableError::IndexOutOfBounds { index, len });
        }
        publish(
            &mut self.bus,
            ChangeEvent::Added {
                path: child_path(path, index),
                value: value.clone(),
            },
        );
        arr.insert(index, value);
        Ok(())
    }

    /// Remove from the array at `path`, shifting later elements left.
    pub fn remove(&mut self, path: &[PathStep], index: usize) -> Result<Value, ObservableError> {
        let arr = array_at(self.root.borrow_mut(), path)?;
        let len = arr.len();
        if index >= len {
            return Err(ObservableError::IndexOutOfBounds { index, len });
        }
        publish(
            &mut self.bus,
            ChangeEvent::Deleted {
                path: child_path(path, index),
            },
        );
        Ok(arr.remove(index))
    }
}
