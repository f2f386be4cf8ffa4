//! The hybrid mergesort implementation and its public entry points

use crate::insertionsort::insertion_sort_by;
use crate::merging::merge_by;

/// The insertion sort threshold suggested for callers without a tuned value
pub const DEFAULT_INSERTION_THRESHOLD: usize = 24;

/// Sorts `slice` in place in ascending order and returns its inversion count.
///
/// Equivalent to [`merge_sort_by`] with the `<=` predicate; the caveat about
/// `threshold` documented there applies here as well.
pub fn merge_sort<T: Ord + Clone>(slice: &mut [T], threshold: usize) -> u64 {
    merge_sort_by(slice, threshold, T::le)
}

/// Sorts `slice` in place under `precedes` and returns the number of
/// inversions counted along the way.
///
/// The slice is recursively split at the midpoint into two owned partition
/// copies, which are sorted and merged back into place. Partitions of length
/// at most `threshold` are handed to insertion sort instead of being split
/// further.
///
/// **Caveat**: the insertion sort branch reports no inversions, so with
/// `threshold > 0` the returned count under-reports the true total; only
/// `threshold == 0` (pure mergesort) counts every inversion. This is the
/// defined behavior of the hybrid mode, not an accident. Use
/// [`count_inversions`] for exact counting and [`hybrid_sort`] when the
/// count is not needed.
pub fn merge_sort_by<T: Clone, F: FnMut(&T, &T) -> bool>(
    slice: &mut [T],
    threshold: usize,
    mut precedes: F,
) -> u64 {
    merge_sort_impl(slice, threshold, &mut precedes)
}

/// The actual recursive hybrid mergesort, sorts `slice` and tallies inversions
fn merge_sort_impl<T: Clone, F: FnMut(&T, &T) -> bool>(
    slice: &mut [T],
    threshold: usize,
    precedes: &mut F,
) -> u64 {
    if slice.len() < 2 {
        return 0;
    }

    if slice.len() <= threshold {
        // Inversions sorted away here are deliberately left uncounted
        insertion_sort_by(slice, &mut *precedes);
        return 0;
    }

    let middle = slice.len() / 2;
    let mut part1 = slice[..middle].to_vec();
    let mut part2 = slice[middle..].to_vec();

    let mut inversions = merge_sort_impl(&mut part1, threshold, precedes);
    inversions += merge_sort_impl(&mut part2, threshold, precedes);
    inversions + merge_by(slice, &part1, &part2, &mut *precedes)
}

/// Sorts `slice` in place in ascending order, delegating partitions of
/// length at most `threshold` to insertion sort.
pub fn hybrid_sort<T: Ord + Clone>(slice: &mut [T], threshold: usize) {
    merge_sort(slice, threshold);
}

/// Sorts `slice` in place under `precedes`, delegating partitions of length
/// at most `threshold` to insertion sort.
pub fn hybrid_sort_by<T: Clone, F: FnMut(&T, &T) -> bool>(
    slice: &mut [T],
    threshold: usize,
    precedes: F,
) {
    merge_sort_by(slice, threshold, precedes);
}

/// Returns the number of index pairs `(i, j)` with `i < j` and
/// `slice[i] > slice[j]`, leaving `slice` untouched.
///
/// Operates on a copy with threshold 0, so every inversion passes through a
/// merge and is counted exactly. A sorted slice has count 0, a reversed one
/// `n * (n - 1) / 2`.
pub fn count_inversions<T: Ord + Clone>(slice: &[T]) -> u64 {
    merge_sort(&mut slice.to_vec(), 0)
}

/// Sorts `slice` in place in descending order, delegating partitions of
/// length at most `threshold` to insertion sort.
pub fn reverse_sort<T: Ord + Clone>(slice: &mut [T], threshold: usize) {
    merge_sort_by(slice, threshold, T::ge);
}
