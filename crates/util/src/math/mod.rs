//! Numeric helpers and seedable randomness.
//!
//! Randomness lives in an explicit [`Random`] context instead of global state:
//! callers seed it with [`Random::set_seed`] for reproducible sequences and
//! return it to entropy with [`Random::clear_seed`].

mod minstd;
mod numeric;
mod random;

pub use minstd::MinStd;
pub use numeric::{
    clamp, greatest_common_divisor, lowest_common_multiple, to_fixed_num, wrap, MathError,
};
pub use random::Random;
