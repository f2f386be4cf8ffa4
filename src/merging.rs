//! Two-way merging of sorted partitions, counting cross-partition inversions

/// Merges the ascending `part1` and `part2` into `dest` and returns the
/// number of cross-partition inversions.
///
/// Equivalent to [`merge_by`] with the `<=` predicate.
///
/// # Panics
///
/// Panics if `dest.len() != part1.len() + part2.len()`.
pub fn merge<T: Ord + Clone>(dest: &mut [T], part1: &[T], part2: &[T]) -> u64 {
    merge_by(dest, part1, part2, T::le)
}

/// Merges `part1` and `part2`, each already sorted under `precedes`, into
/// `dest` in fully sorted order and returns the number of cross-partition
/// inversions.
///
/// An inversion is tallied for every pair where an element of `part2` is
/// emitted ahead of a remaining `part1` element: since `part1` is sorted,
/// all `part1.len() - i` elements still unread at that point are ordered
/// after the emitted one. Intra-partition inversions are not visible to a
/// single merge step; the recursive caller accumulates those.
///
/// Ties go to `part1`, which keeps the merge stable for tie-admitting
/// predicates and counts only strictly out-of-order pairs.
///
/// # Panics
///
/// Panics if `dest.len() != part1.len() + part2.len()`.
pub fn merge_by<T: Clone, F: FnMut(&T, &T) -> bool>(
    dest: &mut [T],
    part1: &[T],
    part2: &[T],
    mut precedes: F,
) -> u64 {
    assert_eq!(
        dest.len(),
        part1.len() + part2.len(),
        "Destination needs to have the combined partition length"
    );

    let mut i = 0;
    let mut j = 0;
    let mut inversions = 0;

    // Repeatedly emit the partition front that may precede the other
    while i + j < dest.len() {
        if j == part2.len() || (i < part1.len() && precedes(&part1[i], &part2[j])) {
            dest[i + j] = part1[i].clone();
            i += 1;
        } else {
            // Every unread part1 element is inverted against part2[j]
            dest[i + j] = part2[j].clone();
            inversions += (part1.len() - i) as u64;
            j += 1;
        }
    }

    inversions
}
