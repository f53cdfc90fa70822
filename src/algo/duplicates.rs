use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The values occurring more than once in `items`. Each is reported once,
/// in the order in which its *first repetition* occurs.
///
/// Runs in linear time, using a frequency map.
///
/// ```
/// use algobox::algo::find_duplicates;
/// assert_eq!(find_duplicates(&[1, 2, 2, 3, 3, 3]), [2, 3]);
/// assert_eq!(find_duplicates(&[3, 1, 3, 1]), [3, 1]);
/// assert!(find_duplicates(&[1, 2, 3]).is_empty());
/// ```
pub fn find_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut counts = HashMap::<&T, usize>::with_capacity(items.len());
    let mut duplicates = Vec::new();
    for item in items {
        let count = counts.entry(item).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(item.clone());
        }
    }
    duplicates
}

/// [find_duplicates] for floating point values, which are neither `Eq`
/// nor `Hash`. Values are compared numerically, so `-0.0` repeats `0.0`,
/// and NaN never repeats anything.
pub fn find_duplicate_reals(items: &[f64]) -> Vec<f64> {
    let keys: Vec<u64> = items.iter().filter_map(|x| real_key(*x)).collect();
    find_duplicates(&keys)
        .into_iter()
        .map(f64::from_bits)
        .collect()
}

/// Remove repeated values, keeping the first occurrence of each, in order.
pub fn dedupe<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::<&T>::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [dedupe] for floating point values. As for [find_duplicate_reals],
/// `-0.0` repeats `0.0`, while every NaN is kept.
pub fn dedupe_reals(items: &[f64]) -> Vec<f64> {
    let mut seen = HashSet::<u64>::with_capacity(items.len());
    items
        .iter()
        .copied()
        .filter(|x| real_key(*x).map_or(true, |key| seen.insert(key)))
        .collect()
}

/// The values present in every one of `lists`, each reported once, in the
/// order of the first list. Linear in the total length of the lists.
pub fn common_elements<T: Eq + Hash + Clone>(lists: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let others: Vec<HashSet<&T>> = rest.iter().map(|list| list.iter().collect()).collect();
    dedupe(first)
        .into_iter()
        .filter(|item| others.iter().all(|set| set.contains(item)))
        .collect()
}

// Hashable stand-in for an f64: Its bit pattern, with the two zeros merged
fn real_key(x: f64) -> Option<u64> {
    if x.is_nan() {
        return None;
    }
    if x == 0. {
        return Some(0_f64.to_bits());
    }
    Some(x.to_bits())
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates() {
        assert_eq!(find_duplicates(&[1, 2, 2, 3, 3, 3]), [2, 3]);
        assert!(find_duplicates(&[1, 2, 3]).is_empty());
        assert!(find_duplicates::<i32>(&[]).is_empty());

        // Order of first repetition, not of first occurrence
        assert_eq!(find_duplicates(&[1, 2, 3, 2, 1]), [2, 1]);

        // Anything Eq + Hash will do
        let words = ["foo", "bar", "foo", "baz", "bar", "foo"];
        assert_eq!(find_duplicates(&words), ["foo", "bar"]);
    }

    #[test]
    fn reals() {
        assert_eq!(find_duplicate_reals(&[1.5, 2., 1.5, 2., 3.]), [1.5, 2.]);
        assert_eq!(find_duplicate_reals(&[-0., 1., 0.]), [0.]);
        assert!(find_duplicate_reals(&[f64::NAN, f64::NAN]).is_empty());
        assert_eq!(
            find_duplicate_reals(&[f64::INFINITY, f64::INFINITY]),
            [f64::INFINITY]
        );
    }

    #[test]
    fn deduplication() {
        assert_eq!(dedupe(&[3, 1, 3, 2, 1]), [3, 1, 2]);
        assert_eq!(dedupe(&["a", "a", "a"]), ["a"]);
        assert!(dedupe::<u8>(&[]).is_empty());
        let once = dedupe(&[5, 4, 5, 4, 3]);
        assert_eq!(dedupe(&once), once);
    }

    #[test]
    fn deduplication_of_reals() {
        assert_eq!(dedupe_reals(&[0., 1., -0., 1., 2.]), [0., 1., 2.]);
        assert_eq!(dedupe_reals(&[f64::NAN, 1., f64::NAN]).len(), 3);
    }

    #[test]
    fn common() {
        let a = [1, 2, 3, 4, 2];
        let b = [4, 2, 9];
        let c = [2, 4, 4, 7];
        assert_eq!(common_elements(&[&a[..], &b[..], &c[..]]), [2, 4]);
        assert_eq!(common_elements(&[&a[..]]), [1, 2, 3, 4]);
        assert!(common_elements(&[&a[..], &[8, 9][..]]).is_empty());
        assert!(common_elements::<i32>(&[]).is_empty());
    }
}
