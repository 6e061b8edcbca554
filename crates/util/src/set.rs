//! Set operations over slices.
//!
//! Slices are treated as sets and compared element by element, either with
//! `PartialEq` or with a caller-supplied comparator (the `_by` variants). Every
//! operation is a pair of linear scans, O(n·m), and allocates a fresh `Vec`;
//! the inputs are never modified.

fn contains_by<T, F>(set: &[T], item: &T, comparator: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    set.iter().any(|other| comparator(item, other))
}

/// Items of `a` that also appear in `b`.
///
/// ```
/// use goodish_util::set::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3, 4, 5], &[4, 5, 6]), vec![4, 5]);
/// ```
pub fn intersection<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    intersection_by(a, b, |x, y| x == y)
}

pub fn intersection_by<T, F>(a: &[T], b: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    a.iter()
        .filter(|item| contains_by(b, item, &mut comparator))
        .cloned()
        .collect()
}

/// Items of `a` missing from `b`, followed by all of `b`.
///
/// ```
/// use goodish_util::set::union;
///
/// assert_eq!(union(&[1, 2, 3], &[3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn union<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    union_by(a, b, |x, y| x == y)
}

pub fn union_by<T, F>(a: &[T], b: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = difference_by(a, b, &mut comparator);
    out.extend_from_slice(b);
    out
}

/// Left difference: items of `a` that do not appear in `b`.
pub fn difference<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    difference_by(a, b, |x, y| x == y)
}

pub fn difference_by<T, F>(a: &[T], b: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    a.iter()
        .filter(|item| !contains_by(b, item, &mut comparator))
        .cloned()
        .collect()
}

/// Right difference: items of `b` that do not appear in `a`.
pub fn right_difference<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    difference(b, a)
}

pub fn right_difference_by<T, F>(a: &[T], b: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    difference_by(b, a, comparator)
}

/// Items that appear in exactly one of `a` and `b`.
///
/// ```
/// use goodish_util::set::exclusive_or;
///
/// assert_eq!(exclusive_or(&[1, 2, 3], &[1, 2, 3, 4, 5]), vec![4, 5]);
/// ```
pub fn exclusive_or<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    exclusive_or_by(a, b, |x, y| x == y)
}

pub fn exclusive_or_by<T, F>(a: &[T], b: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = difference_by(a, b, &mut comparator);
    out.extend(right_difference_by(a, b, &mut comparator));
    out
}
