use crate::math::Random;

/// A random element of `items` together with its index, or `None` when
/// `items` is empty.
///
/// ```
/// use goodish_util::iter::random_from;
/// use goodish_util::math::Random;
///
/// let mut rng = Random::seeded(1);
/// let (value, index) = random_from(&mut rng, &[10, 20, 30]).unwrap();
/// assert_eq!([10, 20, 30][index], *value);
/// ```
pub fn random_from<'a, T>(rng: &mut Random, items: &'a [T]) -> Option<(&'a T, usize)> {
    let index = rng.random_index(items.len())?;
    Some((&items[index], index))
}

/// `n` independent draws from `items`, with replacement.
pub fn random_n_from<T: Clone>(rng: &mut Random, items: &[T], n: usize) -> Vec<T> {
    (0..n)
        .filter_map(|_| random_from(rng, items).map(|(item, _)| item.clone()))
        .collect()
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<'a, T>(rng: &mut Random, items: &'a mut [T]) -> &'a mut [T] {
    let mut m = items.len();
    while let Some(i) = rng.random_index(m) {
        m -= 1;
        items.swap(m, i);
    }
    items
}
