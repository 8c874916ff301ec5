//! Case-insensitive binary search over titles already ordered by [`compare_titles`].

use crate::core::{TitleAccessor, compare_titles, fold_title};
use std::cmp::Ordering;

/// Finds a title equal to `target` under [`compare_titles`].
///
/// `sorted` must be non-decreasing under [`compare_titles`], as produced by
/// [`merge_sort`](crate::merge_sort). Searching an unsorted collection is a bug; debug
/// builds assert on it (fully for small collections, on sampled neighbours otherwise).
///
/// The search inspects `mid = (low + high) / 2` over the closed interval `[low, high]` and
/// returns the first inspected index whose title matches. When several titles are equal to
/// `target`, which of their indices is returned depends on the order of inspection.
///
/// # Examples
///
/// ```
/// use titlesort::binary_search;
///
/// let sorted = vec!["Apple", "banana", "Cherry"];
///
/// assert_eq!(binary_search(&sorted, "BANANA"), Some(1));
/// assert_eq!(binary_search(&sorted, "durian"), None);
/// ```
pub fn binary_search<A: TitleAccessor + ?Sized>(sorted: &A, target: &str) -> Option<usize> {
    debug_assert!(
        is_probably_sorted(sorted),
        "binary_search called on a collection that is not ordered by compare_titles"
    );

    if sorted.is_empty() {
        return None;
    }

    let target = fold_title(target);
    let mut low = 0;
    let mut high = sorted.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        match fold_title(sorted.get_title(mid)).as_bytes().cmp(target.as_bytes()) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// Collections up to this length get a full order check before each debug search.
const FULL_CHECK_LEN: usize = 1024;

/// Returns `true` if the collection is non-decreasing under [`compare_titles`].
pub fn is_sorted<A: TitleAccessor + ?Sized>(titles: &A) -> bool {
    (1..titles.len()).all(|index| in_order(titles, index))
}

/// Checks every neighbour pair of small collections and about `FULL_CHECK_LEN` evenly
/// spaced pairs of larger ones, keeping debug searches cheap.
fn is_probably_sorted<A: TitleAccessor + ?Sized>(titles: &A) -> bool {
    let len = titles.len();
    if len <= FULL_CHECK_LEN {
        return is_sorted(titles);
    }

    let step = len / FULL_CHECK_LEN;
    (1..len).step_by(step).all(|index| in_order(titles, index))
}

fn in_order<A: TitleAccessor + ?Sized>(titles: &A, index: usize) -> bool {
    compare_titles(titles.get_title(index - 1), titles.get_title(index)) != Ordering::Greater
}
