//! goodish-util - Small standalone helpers
//!
//! Seedable randomness and numeric helpers, set operations over slices,
//! iterator and combinatorics helpers, 2D geometry, shallow object copying and
//! async throttling.

pub mod geometry;
pub mod iter;
pub mod math;
pub mod objects;
pub mod set;
pub mod timing;

// Re-exports for convenience
pub use geometry::{Point, Point2D, Rectangle, Vector2D};
pub use iter::{
    combinations_of, count, permutations_of, random_from, random_n_from, range, range_arr,
    range_arr_step, range_step, shuffle, swap, transpose, Combinations, IterError, Permutations,
    Range,
};
pub use math::{
    clamp, greatest_common_divisor, lowest_common_multiple, to_fixed_num, wrap, MathError, MinStd,
    Random,
};
pub use objects::{copy_props, copy_props_value, CopyOptions, ObjectsError};
pub use set::{
    difference, difference_by, exclusive_or, exclusive_or_by, intersection, intersection_by,
    right_difference, right_difference_by, union, union_by,
};
pub use timing::{wait, Throttler};
