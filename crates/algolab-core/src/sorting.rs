//! Reference sorts to compare QuickSort against.

/// Bubble sort on a copy. Returns the sorted copy and the number of
/// comparisons, which is always n(n-1)/2. O(n²).
pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> (Vec<T>, u64) {
    let mut sorted = items.to_vec();
    let n = sorted.len();
    let mut comparisons = 0u64;
    for i in 0..n {
        for j in 0..n - i - 1 {
            comparisons += 1;
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }
    (sorted, comparisons)
}

/// Top-down merge sort into a new vector. Stable, O(n log n).
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }
    out
}

/// True when the slice is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEMO_ARRAY;

    #[test]
    fn bubble_sorts_and_counts() {
        let (sorted, comparisons) = bubble_sort(&DEMO_ARRAY);
        assert_eq!(sorted, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
        assert_eq!(comparisons, 45);
    }

    #[test]
    fn bubble_empty() {
        let (sorted, comparisons) = bubble_sort::<i32>(&[]);
        assert!(sorted.is_empty());
        assert_eq!(comparisons, 0);
    }

    #[test]
    fn bubble_leaves_input_alone() {
        let input = [3, 1, 2];
        let _ = bubble_sort(&input);
        assert_eq!(input, [3, 1, 2]);
    }

    #[test]
    fn merge_sorts() {
        assert_eq!(
            merge_sort(&DEMO_ARRAY),
            vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]
        );
        assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(merge_sort(&[1]), vec![1]);
    }

    #[test]
    fn merge_sort_is_stable() {
        // Ordered by the number only; the char tags record input order.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Tagged(u8, char);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }
        let input = [Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        let sorted = merge_sort(&input);
        let tags: Vec<char> = sorted.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn is_sorted_checks_order() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
