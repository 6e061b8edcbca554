//! goodish-core - Change notification primitives
//!
//! - [`emitter`]: a named-event publish/subscribe hub.
//! - [`observable`]: a JSON document wrapper that publishes `added`,
//!   `changed` and `deleted` events, tagged with the path of every mutation.

pub mod emitter;
pub mod observable;

pub use emitter::{Emitter, EmitterError, ListenerId};
pub use observable::{
    format_path, observe, parse_path, ChangeEvent, ChangeKind, Handle, Observable, ObservableError,
    Path, PathStep,
};
