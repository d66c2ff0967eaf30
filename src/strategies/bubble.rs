use std::cmp::Ordering;

use crate::report::{Counters, SortReport};

sort_impl!(BubbleSort, "Bubble Sort");

/// Sorts the slice in ascending order and reports what it cost.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and *O*(*n*)
/// on already sorted input, where a single pass without swaps ends the sort.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 1, 4, 2];
/// let report = strategy_sort_rs::strategies::bubble::sort(&mut v);
///
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// assert_eq!(report.swaps(), Some(7));
/// ```
#[inline]
pub fn sort<T>(v: &mut [T]) -> SortReport
where
    T: Ord,
{
    sort_by(v, T::cmp)
}

/// Sorts the slice with a comparator function and reports what it cost.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the sort still terminates
/// and all original elements remain in `v`.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> SortReport
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut counters = Counters::default();
    bubble_sort(v, &mut compare, &mut counters);

    let report = SortReport::from_exchanges(LABEL, v.len(), counters);
    log::debug!(
        "{LABEL}: {} elements, {} passes, {} comparisons, {} swaps",
        v.len(),
        counters.passes,
        counters.comparisons,
        counters.swaps
    );
    report
}

fn bubble_sort<T, F>(v: &mut [T], compare: &mut F, counters: &mut Counters)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After pass `i` the largest `i + 1` elements are in their final place.
    for i in 0..len - 1 {
        counters.passes += 1;
        let mut swapped = false;

        for j in 0..(len - 1 - i) {
            if counters.is_less(compare, &v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                counters.swaps += 1;
                swapped = true;
            }
        }

        log::trace!("{LABEL}: pass {} done, swapped: {swapped}", counters.passes);

        if !swapped {
            break;
        }
    }
}
