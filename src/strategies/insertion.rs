use std::cmp::Ordering;

use crate::report::{Counters, SortReport};

sort_impl!(InsertionSort, "Insertion Sort");

/// Sorts the slice in ascending order and reports what it cost.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and performs
/// `n - 1` comparisons and no shifts on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T]) -> SortReport
where
    T: Ord,
{
    sort_by(v, T::cmp)
}

/// Sorts the slice with a comparator function and reports what it cost.
///
/// If the comparator does not implement a total order the resulting order is unspecified. All
/// original elements will remain in `v`.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> SortReport
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut counters = Counters::default();
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], &mut compare, &mut counters);
    }

    log::debug!(
        "{LABEL}: {} elements, {} comparisons, {} shifts",
        v.len(),
        counters.comparisons,
        counters.shifts
    );
    SortReport::from_shifts(LABEL, v.len(), counters)
}

/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]` so that the whole
/// `v` becomes sorted.
///
/// Every element of the prefix that is strictly greater than the tail moves one slot right,
/// each such move counts as one shift.
fn insert_tail<T, F>(v: &mut [T], compare: &mut F, counters: &mut Counters)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let tail = v.len() - 1;
    let mut hole = tail;

    while hole > 0 && counters.is_less(compare, &v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    if hole != tail {
        v[hole..].rotate_right(1);
        counters.shifts += (tail - hole) as u64;
    }
}
