//! Named-event publish/subscribe hub.
//!
//! Listeners live in buckets keyed by event name. They are stored in
//! registration order and dispatched newest first.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use goodish_core::Emitter;
//!
//! let mut bus: Emitter<str> = Emitter::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen2 = Arc::clone(&seen);
//! bus.on("hello", move |msg: &str| seen2.lock().unwrap().push(format!("hello {msg}")));
//!
//! bus.emit("hello", "world");
//! assert_eq!(seen.lock().unwrap().as_slice(), ["hello world"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitterError {
    #[error("An event with this name has already been registered: {0}")]
    AlreadyRegistered(String),
    #[error("An event with this name has not been registered yet: {0}")]
    NotRegistered(String),
}

/// Handle returned on registration, used to remove that listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Listener<A: ?Sized> {
    id: ListenerId,
    callback: Box<dyn FnMut(&A) + Send>,
}

/// Event emitter dispatching a payload of type `A` to the listeners of a
/// named event.
///
/// `A` may be unsized, so `Emitter<str>` or `Emitter<[Value]>` work as well
/// as sized payloads.
pub struct Emitter<A: ?Sized> {
    next_listener_id: u64,
    buckets: BTreeMap<String, Vec<Listener<A>>>,
}

impl<A: ?Sized> Emitter<A> {
    pub fn new() -> Self {
        Self {
            next_listener_id: 1,
            buckets: BTreeMap::new(),
        }
    }

    /// Create an empty bucket for `name`.
    ///
    /// [`Emitter::on`] registers implicitly; calling this directly for a
    /// name that already has a bucket is an error.
    pub fn register(&mut self, name: &str) -> Result<(), EmitterError> {
        if self.buckets.contains_key(name) {
            return Err(EmitterError::AlreadyRegistered(name.to_string()));
        }
        debug!(event = name, "event registered");
        self.buckets.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Add a listener to `name`.
    pub fn on<F>(&mut self, name: &str, listener: F) -> ListenerId
    where
        F: FnMut(&A) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.buckets.entry(name.to_string()).or_default().push(Listener {
            id,
            callback: Box::new(listener),
        });
        trace!(event = name, listener = id.0, "listener added");
        id
    }

    /// Add a listener bound to `context`.
    ///
    /// The emitter owns the context; each dispatch hands the listener a
    /// mutable reference to it alongside the payload.
    pub fn on_with_context<C, F>(
        &mut self,
        name: &str,
        mut context: C,
        mut listener: F,
    ) -> ListenerId
    where
        C: Send + 'static,
        F: FnMut(&mut C, &A) + Send + 'static,
    {
        self.on(name, move |args: &A| listener(&mut context, args))
    }

    /// Remove one listener, or every listener of `name` when `listener` is
    /// `None`.
    ///
    /// Returns whether anything was removed. An unknown listener id is not an
    /// error.
    ///
    /// # Errors
    ///
    /// [`EmitterError::NotRegistered`] if `name` has no bucket, unless
    /// `force` is set.
    pub fn off(
        &mut self,
        name: &str,
        listener: Option<ListenerId>,
        force: bool,
    ) -> Result<bool, EmitterError> {
        let Some(bucket) = self.buckets.get_mut(name) else {
            if force {
                return Ok(false);
            }
            return Err(EmitterError::NotRegistered(name.to_string()));
        };
        let removed = match listener {
            Some(id) => match bucket.iter().position(|l| l.id == id) {
                Some(pos) => {
                    bucket.remove(pos);
                    true
                }
                None => false,
            },
            None => {
                let had_any = !bucket.is_empty();
                bucket.clear();
                had_any
            }
        };
        trace!(event = name, removed, "listeners removed");
        Ok(removed)
    }

    /// Call every listener of `name` with `args`, most recently added first.
    ///
    /// Returns the number of listeners called; an unregistered name calls
    /// nothing.
    pub fn emit(&mut self, name: &str, args: &A) -> usize {
        let Some(bucket) = self.buckets.get_mut(name) else {
            return 0;
        };
        for listener in bucket.iter_mut().rev() {
            (listener.callback)(args);
        }
        bucket.len()
    }

    /// Alias of [`Emitter::emit`].
    pub fn dispatch(&mut self, name: &str, args: &A) -> usize {
        self.emit(name, args)
    }

    pub fn has_listeners(&self) -> bool {
        self.buckets.values().any(|bucket| !bucket.is_empty())
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.buckets.get(name).map_or(0, Vec::len)
    }

    /// Drop every listener and every registration.
    pub fn remove_listeners(&mut self) {
        debug!(events = self.buckets.len(), "all listeners removed");
        self.buckets.clear();
    }
}

impl<A: ?Sized> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, bucket) in &self.buckets {
            map.entry(name, &bucket.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<i32>>>, Arc<Mutex<Vec<i32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (Arc::clone(&seen), seen)
    }

    #[test]
    fn test_emit_newest_first() {
        let mut em: Emitter<()> = Emitter::new();
        let (seen, out) = recorder();
        for n in 0..3 {
            let seen = Arc::clone(&seen);
            em.on("test", move |_| seen.lock().unwrap().push(n));
        }
        assert_eq!(em.emit("test", &()), 3);
        assert_eq!(*out.lock().unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_context_binding() {
        #[derive(Default)]
        struct Named {
            name: &'static str,
            calls: usize,
        }

        let mut em: Emitter<()> = Emitter::new();
        let names = Arc::new(Mutex::new(Vec::new()));
        for name in ["a", "b"] {
            let names = Arc::clone(&names);
            em.on_with_context("test", Named { name, calls: 0 }, move |ctx, _| {
                ctx.calls += 1;
                names.lock().unwrap().push((ctx.name, ctx.calls));
            });
        }
        em.emit("test", &());
        em.emit("test", &());
        assert_eq!(
            *names.lock().unwrap(),
            vec![("b", 1), ("a", 1), ("b", 2), ("a", 2)]
        );
    }

    #[test]
    fn test_off_by_id() {
        let mut em: Emitter<()> = Emitter::new();
        let count = Arc::new(Mutex::new(0));
        let c = Arc::clone(&count);
        let id = em.on("test", move |_| *c.lock().unwrap() += 1);
        em.emit("test", &());
        assert_eq!(*count.lock().unwrap(), 1);

        assert_eq!(em.off("test", Some(id), false), Ok(true));
        em.emit("test", &());
        assert_eq!(*count.lock().unwrap(), 1);

        assert_eq!(em.off("test", Some(id), false), Ok(false));
    }

    #[test]
    fn test_register_twice_fails() {
        let mut em: Emitter<()> = Emitter::new();
        em.register("test").unwrap();
        let err = em.register("test").unwrap_err();
        assert_eq!(err, EmitterError::AlreadyRegistered("test".into()));
        assert!(err.to_string().starts_with("An event with this name has already been registered"));
    }

    #[test]
    fn test_on_after_register_reuses_bucket() {
        let mut em: Emitter<()> = Emitter::new();
        em.register("test").unwrap();
        em.on("test", |_| {});
        em.on("test", |_| {});
        assert_eq!(em.listener_count("test"), 2);
    }

    #[test]
    fn test_on_registers_missing_bucket() {
        let mut em: Emitter<()> = Emitter::new();
        let first = em.on("test", |_| {});
        let second = em.on("test", |_| {});
        assert_ne!(first, second);
        assert_eq!(em.listener_count("test"), 2);
        assert_eq!(em.register("test"), Err(EmitterError::AlreadyRegistered("test".into())));
    }

    #[test]
    fn test_off_unregistered() {
        let mut em: Emitter<()> = Emitter::new();
        let err = em.off("test", None, false).unwrap_err();
        assert!(err.to_string().starts_with("An event with this name has not been registered yet"));
        assert_eq!(em.off("test", None, true), Ok(false));
    }

    #[test]
    fn test_payload_reaches_listener() {
        let mut em: Emitter<(String, i32)> = Emitter::new();
        let got = Arc::new(Mutex::new(None));
        let g = Arc::clone(&got);
        em.on("test", move |(a, b)| *g.lock().unwrap() = Some((a.clone(), *b)));
        em.dispatch("test", &("wow".to_string(), 7));
        assert_eq!(*got.lock().unwrap(), Some(("wow".to_string(), 7)));
    }

    #[test]
    fn test_unsized_payload() {
        let mut em: Emitter<[i32]> = Emitter::new();
        let (seen, out) = recorder();
        em.on("sum", move |args: &[i32]| seen.lock().unwrap().push(args.iter().sum()));
        em.emit("sum", &[1, 2, 3]);
        assert_eq!(*out.lock().unwrap(), vec![6]);
    }

    #[test]
    fn test_remove_listeners() {
        let mut em: Emitter<()> = Emitter::new();
        let (seen, out) = recorder();
        em.on("wow", move |_| seen.lock().unwrap().push(1));
        em.emit("wow", &());
        em.remove_listeners();
        assert_eq!(em.emit("wow", &()), 0);
        assert_eq!(*out.lock().unwrap(), vec![1]);
        assert!(em.off("wow", None, false).is_err());
    }

    #[test]
    fn test_has_listeners() {
        let mut em: Emitter<()> = Emitter::new();
        assert!(!em.has_listeners());
        em.register("idle").unwrap();
        assert!(!em.has_listeners());
        em.on("ok", |_| {});
        assert!(em.has_listeners());
    }

    #[test]
    fn test_emit_without_bucket_is_noop() {
        let mut em: Emitter<()> = Emitter::new();
        assert_eq!(em.emit("test", &()), 0);
        assert_eq!(em.dispatch("test", &()), 0);
    }

    #[test]
    fn test_off_without_id_clears_bucket() {
        let mut em: Emitter<()> = Emitter::new();
        let total = Arc::new(Mutex::new(0));
        let t1 = Arc::clone(&total);
        let first = em.on("test", move |_| *t1.lock().unwrap() += 1);
        let t2 = Arc::clone(&total);
        em.on("test", move |_| *t2.lock().unwrap() += 2);
        em.emit("test", &());
        assert_eq!(*total.lock().unwrap(), 3);

        em.off("test", Some(first), false).unwrap();
        em.emit("test", &());
        assert_eq!(*total.lock().unwrap(), 5);

        let t3 = Arc::clone(&total);
        em.on("test", move |_| *t3.lock().unwrap() += 1000);
        assert_eq!(em.off("test", None, false), Ok(true));
        em.emit("test", &());
        assert_eq!(*total.lock().unwrap(), 5);
    }

    #[test]
    fn test_debug_lists_bucket_sizes() {
        let mut em: Emitter<()> = Emitter::new();
        em.on("a", |_| {});
        assert_eq!(format!("{em:?}"), r#"{"a": 1}"#);
    }
}
