//! In-place QuickSort with Lomuto partitioning.
//!
//! The pivot is always the last element of the range under consideration,
//! so average behavior is O(n log n) and sorted or reverse-sorted input hits
//! the O(n²) worst case. The recursion descends into the smaller partition
//! and loops over the larger one, which keeps the stack at O(log n) frames
//! whatever the input order.

/// Counters gathered while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element comparisons against a pivot.
    pub comparisons: u64,
    /// Swaps performed, including no-op self swaps.
    pub swaps: u64,
    /// Number of partition steps.
    pub partitions: u64,
    /// Deepest nested call that partitioned something. Zero means the
    /// whole sort ran in the outermost frame.
    pub max_depth: u32,
}

/// Sort `seq[start..=end]` in place.
///
/// A range with `start >= end` holds at most one element and is left as is.
///
/// # Panics
///
/// Panics if `start < end` and `end` is not a valid index into `seq`.
///
/// # Example
/// ```
/// let mut v = [50, 10, 40, 20, 30];
/// algolab_core::quicksort::quicksort(&mut v, 0, 4);
/// assert_eq!(v, [10, 20, 30, 40, 50]);
/// ```
pub fn quicksort<T: Ord>(seq: &mut [T], start: usize, end: usize) {
    quicksort_counted(seq, start, end);
}

/// Sort the whole slice.
pub fn quicksort_slice<T: Ord>(seq: &mut [T]) {
    if let Some(end) = seq.len().checked_sub(1) {
        quicksort(seq, 0, end);
    }
}

/// Sort `seq[start..=end]` in place and report what the sort did.
pub fn quicksort_counted<T: Ord>(seq: &mut [T], start: usize, end: usize) -> SortStats {
    let mut stats = SortStats::default();
    if start >= end {
        return stats;
    }
    check_range(seq.len(), start, end);
    sort_range(&mut seq[start..=end], 0, &mut stats);
    stats
}

/// Partition `seq[start..=end]` around `seq[end]` and return the pivot's
/// final index.
///
/// Afterwards every element in `start..pivot` is `<=` the pivot and every
/// element in `pivot + 1..=end` is `>` it.
///
/// # Panics
///
/// Panics if `start > end` or `end` is out of bounds.
pub fn partition<T: Ord>(seq: &mut [T], start: usize, end: usize) -> usize {
    assert!(start <= end, "partition range [{start}, {end}] is empty");
    check_range(seq.len(), start, end);
    start + partition_with(&mut seq[start..=end], &mut SortStats::default())
}

fn check_range(len: usize, start: usize, end: usize) {
    assert!(
        end < len,
        "quicksort range [{start}, {end}] out of bounds for length {len}"
    );
}

fn sort_range<T: Ord>(mut seq: &mut [T], depth: u32, stats: &mut SortStats) {
    while seq.len() > 1 {
        stats.max_depth = stats.max_depth.max(depth);
        let pivot = partition_with(seq, stats);
        let (left, right) = std::mem::take(&mut seq).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, depth + 1, stats);
            seq = right;
        } else {
            sort_range(right, depth + 1, stats);
            seq = left;
        }
    }
}

// Lomuto scheme over the whole slice; the pivot is the last element.
// Invariant: seq[..boundary] <= pivot, seq[boundary..j] > pivot.
fn partition_with<T: Ord>(seq: &mut [T], stats: &mut SortStats) -> usize {
    let end = seq.len() - 1;
    let mut boundary = 0;
    for j in 0..end {
        stats.comparisons += 1;
        if seq[j] <= seq[end] {
            seq.swap(boundary, j);
            stats.swaps += 1;
            boundary += 1;
        }
    }
    seq.swap(boundary, end);
    stats.swaps += 1;
    stats.partitions += 1;
    boundary
}
