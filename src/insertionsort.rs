//! Insertion sort via adjacent transpositions

/// Sorts `slice` in place in ascending order.
///
/// Equivalent to [`insertion_sort_by`] with the `<=` predicate.
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    insertion_sort_by(slice, T::le);
}

/// Sorts `slice` in place so that `precedes(a, b)` holds for every adjacent
/// pair `(a, b)` in the result.
///
/// `precedes` decides whether its first argument may be placed before the
/// second. Elements are shifted left by repeated adjacent swaps while they
/// are out of order with their predecessor, so a predicate admitting ties
/// (like `<=`) never moves equal-ranked elements past each other and the
/// sort is stable. `O(n^2)` comparisons worst case, `O(n)` on sorted input.
pub fn insertion_sort_by<T, F: FnMut(&T, &T) -> bool>(slice: &mut [T], mut precedes: F) {
    if slice.len() < 2 {
        return;
    }

    for i in 1..slice.len() {
        // Shift slice[i] left until its predecessor may stay in front of it
        for j in (0..i).rev() {
            if precedes(&slice[j], &slice[j + 1]) {
                break;
            }

            slice.swap(j, j + 1);
        }
    }
}
