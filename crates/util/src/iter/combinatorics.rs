use std::iter::FusedIterator;

/// Lazy iterator over every ordering of a slice, built on Heap's algorithm.
///
/// Each permutation is produced by a single swap from the previous one; the
/// yielded `Vec`s are independent snapshots.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Vec<T>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }
        while self.i < self.current.len() {
            let i = self.i;
            if self.counters[i] < i {
                let k = if i % 2 == 1 { self.counters[i] } else { 0 };
                self.current.swap(i, k);
                self.counters[i] += 1;
                self.i = 1;
                return Some(self.current.clone());
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// All permutations of `items`, starting with `items` itself.
///
/// An empty slice has exactly one (empty) permutation.
///
/// ```
/// use goodish_util::iter::permutations_of;
///
/// let perms: Vec<Vec<i32>> = permutations_of(&[0, 1, 2]).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// ```
pub fn permutations_of<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        current: items.to_vec(),
        counters: vec![0; items.len()],
        i: 1,
        started: false,
    }
}

/// Lazy iterator over every `k`-element subset of a slice, without
/// replacement, in lexicographic index order.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Combinations<T> {
    fn current(&self) -> Vec<T> {
        self.indices.iter().map(|&i| self.pool[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let n = self.pool.len();
        let k = self.indices.len();
        // Rightmost index that can still move forward.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.current())
    }
}

impl<T: Clone> FusedIterator for Combinations<T> {}

/// All combinations of `k` items from `items`.
///
/// `k == 0` or `k > items.len()` yields nothing.
///
/// ```
/// use goodish_util::iter::combinations_of;
///
/// let combos: Vec<Vec<i32>> = combinations_of(&[0, 1, 2], 2).collect();
/// assert_eq!(combos, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
pub fn combinations_of<T: Clone>(items: &[T], k: usize) -> Combinations<T> {
    Combinations {
        pool: items.to_vec(),
        indices: (0..k).collect(),
        started: false,
        done: k == 0 || k > items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{count, range_arr};
    use std::collections::HashSet;

    #[test]
    fn test_permutation_counts() {
        let cases = [(0, 1), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120), (6, 720)];
        for (size, expected) in cases {
            let items = range_arr(0, size);
            assert_eq!(count(permutations_of(&items)), expected, "size {size}");
        }
    }

    #[test]
    fn test_permutations_unique() {
        let perms: Vec<Vec<i32>> = permutations_of(&[0, 1, 2, 3]).collect();
        let unique: HashSet<Vec<i32>> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), perms.len());
    }

    #[test]
    fn test_permutations_of_three() {
        let perms: HashSet<Vec<i32>> = permutations_of(&[0, 1, 2]).collect();
        let expected: HashSet<Vec<i32>> = [
            vec![0, 1, 2],
            vec![1, 0, 2],
            vec![2, 0, 1],
            vec![0, 2, 1],
            vec![1, 2, 0],
            vec![2, 1, 0],
        ]
        .into_iter()
        .collect();
        assert_eq!(perms, expected);
    }

    #[test]
    fn test_combination_counts() {
        let cases = [
            (1, 1, 1),
            (2, 1, 2),
            (2, 2, 1),
            (3, 1, 3),
            (3, 2, 3),
            (3, 3, 1),
            (4, 1, 4),
            (4, 2, 6),
            (4, 3, 4),
            (4, 4, 1),
        ];
        for (size, k, expected) in cases {
            let items = range_arr(0, size);
            assert_eq!(count(combinations_of(&items, k)), expected, "{size} choose {k}");
        }
    }

    #[test]
    fn test_combinations_degenerate() {
        assert_eq!(combinations_of(&[1, 2, 3], 0).count(), 0);
        assert_eq!(combinations_of(&[1, 2, 3], 4).count(), 0);
        assert_eq!(combinations_of::<i32>(&[], 1).count(), 0);
    }

    #[test]
    fn test_combinations_order() {
        let combos: Vec<Vec<char>> = combinations_of(&['a', 'b', 'c', 'd'], 3).collect();
        assert_eq!(
            combos,
            vec![
                vec!['a', 'b', 'c'],
                vec!['a', 'b', 'd'],
                vec!['a', 'c', 'd'],
                vec!['b', 'c', 'd'],
            ]
        );
    }
}
