#![deny(missing_docs)]

//! A hybrid comparison sort: top-down mergesort that hands partitions at or
//! below a configurable length threshold to insertion sort, and counts the
//! inversions of the input as a byproduct of merging.
//!
//! The following entry points are provided:
//!
//! | Function             | Effect                                            |
//! |----------------------|---------------------------------------------------|
//! | [`hybrid_sort`]      | in-place ascending sort with threshold            |
//! | [`reverse_sort`]     | in-place descending sort with threshold           |
//! | [`count_inversions`] | exact inversion count, input left untouched       |
//! | [`merge_sort`]       | in-place sort, returns inversions (see its docs)  |
//!
//! The building blocks [`insertion_sort`] and [`merge`] are exposed as well.
//!
//! To sort with a custom ordering, use the `_by` extension and pass a
//! predicate deciding whether its first argument may be placed before the
//! second, e.g. [`hybrid_sort_by`]`(&mut v, 24, |a, b| a >= b)` for a
//! descending sort. A predicate that admits ties (like `<=`) keeps every
//! sort in this crate stable.
//!
//! Partitions are split off as owned copies and merged back into the caller's
//! slice, so the element type must be [`Clone`] and auxiliary memory usage is
//! `O(n)`, the classic mergesort space profile.

mod insertionsort;
mod merging;
mod mergesort;

#[cfg(test)]
mod test;

pub use insertionsort::{insertion_sort, insertion_sort_by};
pub use merging::{merge, merge_by};
pub use mergesort::{
    DEFAULT_INSERTION_THRESHOLD, count_inversions, hybrid_sort, hybrid_sort_by, merge_sort,
    merge_sort_by, reverse_sort,
};
