//! Process-wide title collection.
//!
//! A [`TitleStore`] owns the current [`Catalog`] behind an [`ArcSwap`]. Requests take a
//! snapshot and work on their own copy, while [`TitleStore::replace`] swaps in a whole new
//! catalog atomically.

use crate::algo::{merge_sort, merge_sort_indices};
use crate::core::TitleAccessor;
use crate::search::binary_search;
use arc_swap::ArcSwap;
use cuneiform::cuneiform;
use std::sync::Arc;
use thiserror::Error;

/// Titles served when no other collection is configured.
pub const DEFAULT_TITLES: [&str; 10] = [
    "The Art of Coding",
    "Exploring the Cosmos",
    "Cooking Masterclass: Italian Cuisine",
    "History Uncovered: Ancient Civilizations",
    "Fitness Fundamentals: Strength Training",
    "Digital Photography Essentials",
    "Financial Planning for Beginners",
    "Nature's Wonders: National Geographic",
    "Artificial Intelligence Revolution",
    "Travel Diaries: Discovering Europe",
];

/// Why a title lookup produced no match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("title required")]
    EmptyQuery,

    #[error("title '{title}' not found")]
    NotFound { title: String },
}

/// An immutable collection of titles in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    titles: Vec<String>,
}

impl Catalog {
    /// Builds a catalog holding `titles` in the given order.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Titles in insertion order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of titles, duplicates included.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns `true` if the catalog holds no titles.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Sorts a copy of the titles. The catalog itself is not modified.
    pub fn sorted(&self) -> SortedTitles {
        SortedTitles {
            titles: merge_sort(&self.titles),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_TITLES)
    }
}

/// Titles ordered by [`compare_titles`](crate::compare_titles).
///
/// The only way to build one is by sorting, so [`SortedTitles::find`] never searches an
/// unordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedTitles {
    titles: Vec<String>,
}

impl SortedTitles {
    /// Merge sorts the titles of any [`TitleAccessor`] into an owned, ordered list.
    pub fn sort<A: TitleAccessor + ?Sized>(provider: &A) -> Self {
        let titles = merge_sort_indices(provider)
            .into_iter()
            .map(|index| provider.get_title(index).to_owned())
            .collect();
        Self { titles }
    }

    /// The titles in order.
    pub fn as_slice(&self) -> &[String] {
        &self.titles
    }

    /// Consumes the view, returning the ordered titles.
    pub fn into_vec(self) -> Vec<String> {
        self.titles
    }

    /// Looks up `query` case-insensitively and returns the stored spelling.
    pub fn find(&self, query: &str) -> Option<&str> {
        binary_search(&self.titles, query).map(|index| self.titles[index].as_str())
    }
}

/// Shared handle to the current catalog.
///
/// Every request loads the catalog pointer, so the store is kept on its own cache line.
#[cuneiform]
pub struct TitleStore {
    current: ArcSwap<Catalog>,
}

impl TitleStore {
    /// Creates a store serving `catalog`.
    ///
    /// # Examples
    ///
    /// ```
    /// use titlesort::catalog::{Catalog, TitleStore};
    ///
    /// let store = TitleStore::new(Catalog::new(["Exploring the Cosmos", "art of coding"]));
    ///
    /// assert_eq!(store.find("ART OF CODING").as_deref(), Ok("art of coding"));
    /// assert_eq!(store.sorted().as_slice()[0], "art of coding");
    /// ```
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// Returns the catalog as of now. Later replacements do not affect the snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Atomically replaces the whole catalog and returns the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let titles = catalog.len();
        let previous = self.current.swap(Arc::new(catalog));
        tracing::info!(titles, previous = previous.len(), "Replaced title catalog");
        previous
    }

    /// Sorts the current snapshot.
    pub fn sorted(&self) -> SortedTitles {
        self.current.load().sorted()
    }

    /// Sorts the current snapshot and searches it for `query`.
    ///
    /// The collection is re-sorted on every call.
    pub fn find(&self, query: &str) -> Result<String, LookupError> {
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let sorted = self.sorted();
        match sorted.find(query) {
            Some(title) => {
                tracing::debug!(query, title, "Title found");
                Ok(title.to_owned())
            }
            None => {
                tracing::debug!(query, "Title not found");
                Err(LookupError::NotFound {
                    title: query.to_owned(),
                })
            }
        }
    }
}

impl Default for TitleStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl std::fmt::Debug for TitleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleStore")
            .field("current", &self.current.load())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_catalog_sorts_case_insensitively() {
        let sorted = Catalog::default().sorted().into_vec();

        assert_eq!(sorted.len(), 10);
        assert_eq!(sorted[0], "Artificial Intelligence Revolution");
        assert_eq!(sorted[9], "Travel Diaries: Discovering Europe");
    }

    #[test]
    fn sort_accepts_borrowed_titles() {
        let sorted = SortedTitles::sort(&vec!["beta", "Alpha"]);

        assert_eq!(sorted.as_slice(), &["Alpha".to_string(), "beta".to_string()]);
        assert_eq!(sorted.find("ALPHA"), Some("Alpha"));
        assert_eq!(sorted.find("gamma"), None);
    }

    #[test]
    fn sorting_leaves_catalog_untouched() {
        let catalog = Catalog::default();
        let _ = catalog.sorted();

        assert_eq!(catalog.titles()[0], "The Art of Coding");
    }

    #[rstest]
    #[case("Artificial Intelligence Revolution", "Artificial Intelligence Revolution")]
    #[case("the art of coding", "The Art of Coding")]
    #[case("THE ART OF CODING", "The Art of Coding")]
    #[case("nature's wonders: national geographic", "Nature's Wonders: National Geographic")]
    fn find_returns_stored_spelling(#[case] query: &str, #[case] expected: &str) {
        let store = TitleStore::default();
        assert_eq!(store.find(query), Ok(expected.to_string()));
    }

    #[test]
    fn find_reports_missing_title() {
        let store = TitleStore::default();
        assert_eq!(
            store.find("Nonexistent Video"),
            Err(LookupError::NotFound {
                title: "Nonexistent Video".to_string()
            })
        );
    }

    #[test]
    fn find_rejects_empty_query() {
        let store = TitleStore::default();
        assert_eq!(store.find(""), Err(LookupError::EmptyQuery));
    }

    #[test]
    fn replace_swaps_whole_catalog() {
        let store = TitleStore::default();
        let before = store.snapshot();

        let previous = store.replace(Catalog::new(["Zeta", "alpha"]));

        assert_eq!(previous.len(), 10);
        assert_eq!(before.len(), 10);
        assert_eq!(store.snapshot().titles(), &["Zeta".to_string(), "alpha".to_string()]);
        assert_eq!(store.sorted().as_slice(), &["alpha".to_string(), "Zeta".to_string()]);
        assert!(store.find("The Art of Coding").is_err());
        assert_eq!(store.find("ZETA"), Ok("Zeta".to_string()));
    }

    #[test]
    fn concurrent_readers_see_whole_catalogs() {
        let store = Arc::new(TitleStore::default());
        let small = Catalog::new(["one", "two"]);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for _ in 0..200 {
                        let len = store.sorted().as_slice().len();
                        assert!(len == 10 || len == 2, "observed partial catalog of {len}");
                    }
                });
            }
            for _ in 0..50 {
                store.replace(small.clone());
                store.replace(Catalog::default());
            }
        });
    }
}
