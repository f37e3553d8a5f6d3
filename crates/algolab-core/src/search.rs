//! Linear and binary search.

use std::cmp::Ordering;

/// Index of the first element equal to `target`. O(n).
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Binary search over a sorted slice, iterative. O(log n).
///
/// With duplicates, any matching index may be returned.
pub fn binary_search_iterative<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Binary search over a sorted slice, recursive. O(log n) time and stack.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    fn go<T: Ord>(items: &[T], target: &T, offset: usize) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        let mid = items.len() / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => Some(offset + mid),
            Ordering::Greater => go(&items[..mid], target, offset),
            Ordering::Less => go(&items[mid + 1..], target, offset + mid + 1),
        }
    }
    go(items, target, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [i64; 7] = [1, 3, 5, 7, 9, 11, 13];

    #[test]
    fn linear_finds_first_match() {
        assert_eq!(linear_search(&[50, 10, 40, 20, 40], &40), Some(2));
        assert_eq!(linear_search(&[1, 2, 3], &4), None);
        assert_eq!(linear_search::<i32>(&[], &1), None);
    }

    #[test]
    fn binary_iterative_hits_every_element() {
        for (i, x) in SORTED.iter().enumerate() {
            assert_eq!(binary_search_iterative(&SORTED, x), Some(i));
        }
    }

    #[test]
    fn binary_recursive_hits_every_element() {
        for (i, x) in SORTED.iter().enumerate() {
            assert_eq!(binary_search_recursive(&SORTED, x), Some(i));
        }
    }

    #[test]
    fn binary_misses() {
        for x in [0, 2, 8, 14] {
            assert_eq!(binary_search_iterative(&SORTED, &x), None);
            assert_eq!(binary_search_recursive(&SORTED, &x), None);
        }
        assert_eq!(binary_search_iterative::<i64>(&[], &1), None);
        assert_eq!(binary_search_recursive::<i64>(&[], &1), None);
    }

    #[test]
    fn binary_with_duplicates_returns_a_match() {
        let v = [2, 2, 2, 2];
        assert_eq!(v[binary_search_iterative(&v, &2).unwrap()], 2);
        assert_eq!(v[binary_search_recursive(&v, &2).unwrap()], 2);
    }
}
