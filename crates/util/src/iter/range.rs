use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Add;

/// Numbers a [`Range`] can step through.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    /// `self + step`, or `None` when the sum is not representable.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);

/// Lazy half-open numeric sequence `[start, end)` advancing by `step`.
///
/// Steps accumulate, so float ranges carry the usual rounding of repeated
/// addition. A step that is zero or negative produces an empty sequence.
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: Option<T>,
    end: T,
    step: T,
}

impl<T: Numeric> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        // NaN compares unordered and ends the sequence.
        if self.step <= T::ZERO || current.partial_cmp(&self.end) != Some(Ordering::Less) {
            self.next = None;
            return None;
        }
        self.next = current.checked_step(self.step);
        Some(current)
    }
}

impl<T: Numeric> FusedIterator for Range<T> {}

/// Values from `min` up to, but excluding, `max` in steps of one.
///
/// ```
/// use goodish_util::iter::range;
///
/// let values: Vec<i32> = range(0, 5).collect();
/// assert_eq!(values, vec![0, 1, 2, 3, 4]);
/// ```
pub fn range<T: Numeric>(min: T, max: T) -> Range<T> {
    range_step(min, max, T::ONE)
}

/// Values from `min` up to, but excluding, `max` in steps of `step`.
///
/// ```
/// use goodish_util::iter::range_step;
///
/// let values: Vec<f64> = range_step(0.0, 2.0, 0.5).collect();
/// assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
/// ```
pub fn range_step<T: Numeric>(min: T, max: T, step: T) -> Range<T> {
    Range {
        next: Some(min),
        end: max,
        step,
    }
}

/// Materialised [`range`].
pub fn range_arr<T: Numeric>(min: T, max: T) -> Vec<T> {
    range(min, max).collect()
}

/// Materialised [`range_step`].
pub fn range_arr_step<T: Numeric>(min: T, max: T, step: T) -> Vec<T> {
    range_step(min, max, step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_integers() {
        assert_eq!(range(0, 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(range_arr(0, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_step() {
        assert_eq!(range_step(0.0, 2.0, 0.5).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(range_arr_step(0.0, 2.0, 0.5), vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(range_arr_step(1, 10, 4), vec![1, 5, 9]);
    }

    #[test]
    fn test_range_empty_when_min_not_below_max() {
        assert!(range(5, 5).next().is_none());
        assert!(range(6, 5).next().is_none());
    }

    #[test]
    fn test_range_nan_bounds_terminate() {
        assert_eq!(range_step(0.0, 1.0, f64::NAN).take(10).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(range_arr_step(0.0, 1.0, f64::NAN), vec![0.0]);
        assert_eq!(range_step(f64::NAN, 1.0, 0.5).take(10).count(), 0);
        assert_eq!(range_step(0.0, f64::NAN, 0.5).take(10).count(), 0);
    }

    #[test]
    fn test_range_non_positive_step_is_empty() {
        assert_eq!(range_step(0, 10, 0).count(), 0);
        assert_eq!(range_step(0, 10, -1).count(), 0);
    }

    #[test]
    fn test_range_stops_at_type_bound() {
        let values: Vec<u8> = range_step(250, 255, 10).collect();
        assert_eq!(values, vec![250]);
    }
}
