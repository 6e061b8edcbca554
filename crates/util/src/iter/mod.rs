//! Iterator and combinatorics helpers.
//!
//! Lazy sequences ([`Range`], [`Permutations`], [`Combinations`]) are plain
//! [`Iterator`]s; `collect()` materialises them.

mod arrays;
mod combinatorics;
mod range;
mod sample;

pub use arrays::{count, swap, transpose, IterError};
pub use combinatorics::{combinations_of, permutations_of, Combinations, Permutations};
pub use range::{range, range_arr, range_arr_step, range_step, Numeric, Range};
pub use sample::{random_from, random_n_from, shuffle};
