//! goodish - A grab bag of small utilities.
//!
//! Re-exports [`goodish_util`] (randomness, math, sets, iterators, geometry,
//! object copying, timing) and [`goodish_core`] (event emitter and observable
//! JSON documents) under one roof.

pub use goodish_core::{emitter, observable};
pub use goodish_util::{geometry, iter, math, objects, set, timing};

pub use goodish_core::*;
pub use goodish_util::*;
