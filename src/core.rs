//! Core traits and types for titlesort.
//!
//! This module defines:
//! - [`TitleAccessor`]: The trait collections implement to be sorted or searched by title.
//! - [`compare_titles`]: The case-insensitive ordering shared by sorting and searching.
//! - SortKey / FoldedTitles: Internal folded-key cache used while sorting.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Size of the folded-key prefix cached in a sort key.
pub const PREFIX_CACHE_BYTES: usize = 8;

/// Compares two titles case-insensitively.
///
/// The result is the same as comparing `a.to_lowercase()` with `b.to_lowercase()`: both
/// operands are lowercased and then ordered lexicographically by code point. Titles that
/// differ only by case are [`Ordering::Equal`], and the empty title sorts before every
/// other title.
///
/// Pure ASCII operands are compared byte by byte without allocating.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use titlesort::compare_titles;
///
/// assert_eq!(compare_titles("Cooking", "cooking"), Ordering::Equal);
/// assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare_titles("", "a"), Ordering::Less);
/// ```
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        let a = a.bytes().map(|c| c.to_ascii_lowercase());
        let b = b.bytes().map(|c| c.to_ascii_lowercase());
        return a.cmp(b);
    }

    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Returns the lowercased form of `title`, borrowing when it is already folded.
pub fn fold_title(title: &str) -> Cow<'_, str> {
    if title.bytes().all(|c| c.is_ascii() && !c.is_ascii_uppercase()) {
        Cow::Borrowed(title)
    } else {
        Cow::Owned(title.to_lowercase())
    }
}

/// A trait for accessing titles from a collection without copying.
///
/// Implement this for custom collections (e.g. records that carry a title among other
/// fields) to sort them by index with [`merge_sort_indices`](crate::merge_sort_indices) or
/// search them with [`binary_search`](crate::binary_search).
///
/// # Examples
///
/// ```
/// use titlesort::core::TitleAccessor;
///
/// struct Video {
///     title: String,
///     views: u64,
/// }
///
/// struct Library(Vec<Video>);
///
/// impl TitleAccessor for Library {
///     fn get_title(&self, index: usize) -> &str {
///         &self.0[index].title
///     }
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
/// }
/// ```
pub trait TitleAccessor {
    /// Returns the title at the given index.
    fn get_title(&self, index: usize) -> &str;

    /// Returns the number of titles in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str>> TitleAccessor for [T] {
    fn get_title(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to avoid `.as_slice()` at call sites.
impl<T: AsRef<str>> TitleAccessor for Vec<T> {
    fn get_title(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> TitleAccessor for VecDeque<T> {
    fn get_title(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Lowercased keys for every title of a collection, computed once per sort.
pub(crate) struct FoldedTitles<'a> {
    keys: Vec<Cow<'a, str>>,
}

impl<'a> FoldedTitles<'a> {
    pub(crate) fn new<A: TitleAccessor + ?Sized>(provider: &'a A) -> Self {
        let keys = (0..provider.len())
            .map(|index| fold_title(provider.get_title(index)))
            .collect();
        Self { keys }
    }

    #[inline(always)]
    pub(crate) fn key(&self, index: usize) -> &[u8] {
        self.keys[index].as_bytes()
    }

    /// First 8 bytes of the folded key at `index`, big-endian, zero padded.
    pub(crate) fn prefix(&self, index: usize) -> u64 {
        let key = self.key(index);
        let take = key.len().min(PREFIX_CACHE_BYTES);

        let mut buf = [0u8; PREFIX_CACHE_BYTES];
        buf[..take].copy_from_slice(&key[..take]);
        u64::from_be_bytes(buf)
    }

    pub(crate) fn sort_key(&self, index: usize) -> SortKey {
        SortKey {
            index,
            cache: self.prefix(index),
        }
    }
}

/// Index of a title plus its cached folded prefix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SortKey {
    pub index: usize,
    pub cache: u64,
}

/// Orders two sort keys by their folded titles.
///
/// 1. **Fast path**: compares the cached prefixes.
/// 2. **Slow path**: on a cache tie, compares the folded keys. When both keys are at least
///    8 bytes long the cached bytes are known equal and are skipped.
#[inline(always)]
pub(crate) fn compare_keys(folded: &FoldedTitles<'_>, a: &SortKey, b: &SortKey) -> Ordering {
    if a.cache != b.cache {
        return a.cache.cmp(&b.cache);
    }

    let key_a = folded.key(a.index);
    let key_b = folded.key(b.index);

    // A key shorter than the cache is zero padded, so "a" and "a\0" share a prefix.
    if key_a.len() < PREFIX_CACHE_BYTES || key_b.len() < PREFIX_CACHE_BYTES {
        return key_a.cmp(key_b);
    }

    key_a[PREFIX_CACHE_BYTES..].cmp(&key_b[PREFIX_CACHE_BYTES..])
}
