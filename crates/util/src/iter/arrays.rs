use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IterError {
    #[error("cannot transpose ragged rows: row {row} has {found} columns, expected {expected}")]
    NotRectangular { row: usize, expected: usize, found: usize },
}

/// Number of items an iterator yields. The iterator must be finite.
///
/// ```
/// use goodish_util::iter::{count, range};
///
/// assert_eq!(count([0, 1, 2, 3]), 4);
/// assert_eq!(count(range(0, 100)), 100);
/// ```
pub fn count<I: IntoIterator>(iter: I) -> usize {
    iter.into_iter().count()
}

/// Swap two positions of a slice in place and hand the slice back.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn swap<T>(items: &mut [T], a: usize, b: usize) -> &mut [T] {
    items.swap(a, b);
    items
}

/// Transpose a rectangular 2D collection.
///
/// The width is taken from the first row; any row of a different length is
/// an error. No rows transpose to no rows.
///
/// ```
/// use goodish_util::iter::transpose;
///
/// let t = transpose(&[vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
/// assert_eq!(t, vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
/// ```
pub fn transpose<T, R>(rows: &[R]) -> Result<Vec<Vec<T>>, IterError>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let width = first.as_ref().len();
    for (row, r) in rows.iter().enumerate() {
        let found = r.as_ref().len();
        if found != width {
            return Err(IterError::NotRectangular {
                row,
                expected: width,
                found,
            });
        }
    }
    Ok((0..width)
        .map(|col| rows.iter().map(|r| r.as_ref()[col].clone()).collect())
        .collect())
}
