//! Contains various helpers intended for testing purposes

use rand::SeedableRng as _;
use rand_distr::Distribution as _;

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa8bf17eb656f828d;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// A Wrapper struct that tracks an original index with an ordered element,
/// used to test sort results for stability
#[derive(Debug, Clone)]
pub struct IndexedOrdered<T: Ord>(usize, T);

impl<T: Ord> IndexedOrdered<T> {
    /// Create a new iterator of `IndexedOrdered`, tracking the position of each element in `iter`
    pub fn map_iter(iter: impl Iterator<Item = T>) -> impl Iterator<Item = Self> {
        iter.enumerate()
            .map(|(index, element)| Self(index, element))
    }

    /// Check `slice` is sorted and check for stability, e.g. equal elements keeping initial ordering.
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        if slice.len() < 2 {
            return true;
        }

        let mut previous = &slice[0];
        for current in slice[1..].iter() {
            match current.cmp(previous) {
                // Slice is not sorted
                std::cmp::Ordering::Less => return false,
                // Elements are not stable
                std::cmp::Ordering::Equal if current.0 < previous.0 => return false,
                _ => {}
            }

            previous = current;
        }

        true
    }
}

impl<T: Ord> PartialEq for IndexedOrdered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<T: Ord> Eq for IndexedOrdered<T> {}

impl<T: Ord> PartialOrd for IndexedOrdered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedOrdered<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.1.cmp(&other.1)
    }
}

/// Count inversions pairwise in `O(n^2)`, the oracle the merge-based count is
/// checked against
pub fn brute_force_inversions<T: Ord>(slice: &[T]) -> u64 {
    slice
        .iter()
        .enumerate()
        .map(|(i, a)| slice[i + 1..].iter().filter(|b| a > *b).count() as u64)
        .sum()
}

/// `size` values drawn from a small range, so runs of equal elements are common
pub fn duplicate_heavy_values(size: usize) -> Box<[usize]> {
    std::iter::repeat_n(0..size / 4, 4).flatten().collect()
}

/// `size` values drawn from a Zipf distribution, heavily skewed towards small ranks
pub fn zipf_values(size: usize, rng: &mut Rng) -> Vec<u64> {
    let zipf = rand_distr::Zipf::new(size as f64, 1.2).expect("valid Zipf parameters");

    (0..size).map(|_| zipf.sample(rng) as u64).collect()
}
