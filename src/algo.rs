//! Stable top-down merge sort over titles.
//!
//! Titles are folded to lowercase once, up front, and each element is represented by a
//! [`SortKey`](crate::core) carrying its index and an 8-byte prefix of the folded title.
//! Most comparisons during the merge are then resolved on the cached `u64` alone.
//!
//! The main entry points are [`merge_sort`] and [`merge_sort_indices`].

use crate::core::{FoldedTitles, SortKey, TitleAccessor, compare_keys};
use std::cmp::Ordering;

/// Returns the indices that order the collection case-insensitively.
///
/// This function does not modify the input collection. Equal titles (under
/// [`compare_titles`](crate::compare_titles)) keep their original relative order.
///
/// # Returns
///
/// A vector of indices such that
/// `compare_titles(provider.get_title(indices[i]), provider.get_title(indices[i + 1]))`
/// is never `Greater`.
///
/// # Examples
///
/// ```
/// use titlesort::merge_sort_indices;
///
/// let data = vec!["banana", "Apple", "cherry", "apple"];
/// let indices = merge_sort_indices(&data);
///
/// assert_eq!(indices, vec![1, 3, 0, 2]); // Apple, apple, banana, cherry
/// ```
pub fn merge_sort_indices<A: TitleAccessor + ?Sized>(provider: &A) -> Vec<usize> {
    let len = provider.len();
    if len == 0 {
        return vec![];
    }

    let folded = FoldedTitles::new(provider);
    let keys: Vec<SortKey> = (0..len).map(|index| folded.sort_key(index)).collect();

    sort_run(&folded, &keys)
        .into_iter()
        .map(|key| key.index)
        .collect()
}

/// Returns a sorted copy of `titles`.
///
/// The input slice is left untouched; the output holds every element exactly once,
/// ordered non-decreasingly by [`compare_titles`](crate::compare_titles).
///
/// # Examples
///
/// ```
/// use titlesort::merge_sort;
///
/// let data = vec!["banana", "apple", "Cherry"];
/// let sorted = merge_sort(&data);
///
/// assert_eq!(sorted, vec!["apple", "banana", "Cherry"]);
/// assert_eq!(data, vec!["banana", "apple", "Cherry"]);
/// ```
pub fn merge_sort<T: AsRef<str> + Clone>(titles: &[T]) -> Vec<T> {
    merge_sort_indices(titles)
        .into_iter()
        .map(|index| titles[index].clone())
        .collect()
}

/// Recursively sorts `keys` into a newly allocated run.
///
/// The left half is `keys[..len / 2]`, so for odd lengths the right half holds the extra
/// element.
fn sort_run(folded: &FoldedTitles<'_>, keys: &[SortKey]) -> Vec<SortKey> {
    if keys.len() <= 1 {
        return keys.to_vec();
    }

    let mid = keys.len() / 2;
    let left = sort_run(folded, &keys[..mid]);
    let right = sort_run(folded, &keys[mid..]);

    merge(folded, &left, &right)
}

/// Merges two sorted runs, taking from `left` on ties.
fn merge(folded: &FoldedTitles<'_>, left: &[SortKey], right: &[SortKey]) -> Vec<SortKey> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare_keys(folded, &left[i], &right[j]) != Ordering::Greater {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
