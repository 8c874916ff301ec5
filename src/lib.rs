//! # titlesort
//!
//! `titlesort` orders and searches collections of human-readable titles
//! case-insensitively, and serves a fixed title collection over HTTP.
//!
//! Two algorithms share one ordering, [`compare_titles`], which compares the lowercased
//! forms of two titles by code point:
//!
//! - [`merge_sort`] / [`merge_sort_indices`]: a stable top-down merge sort. The input is
//!   never modified; equal titles keep their input order.
//! - [`binary_search`]: a closed-interval binary search over titles already ordered by
//!   [`compare_titles`].
//!
//! ## Usage
//!
//! ```rust
//! use titlesort::{binary_search, merge_sort};
//!
//! let titles = vec!["Exploring the Cosmos", "the Art of Coding", "Cooking Masterclass"];
//! let sorted = merge_sort(&titles);
//!
//! assert_eq!(sorted, vec!["Cooking Masterclass", "Exploring the Cosmos", "the Art of Coding"]);
//! assert_eq!(binary_search(&sorted, "THE ART OF CODING"), Some(2));
//! ```
//!
//! ### Custom Types
//!
//! Collections of records can be sorted by index without copying titles out, by
//! implementing [`TitleAccessor`].
//!
//! ```rust
//! use titlesort::{TitleAccessor, merge_sort_indices};
//!
//! struct Video {
//!     title: String,
//! }
//!
//! struct Videos(Vec<Video>);
//!
//! impl TitleAccessor for Videos {
//!     fn get_title(&self, index: usize) -> &str {
//!         &self.0[index].title
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let videos = Videos(vec![
//!     Video { title: "travel".to_string() },
//!     Video { title: "Art".to_string() },
//! ]);
//!
//! assert_eq!(merge_sort_indices(&videos), vec![1, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - Sorting is O(N log N) comparisons. Each title is lowercased once; its first 8 folded
//!   bytes are cached next to its index so most comparisons never touch the title itself.
//! - Searching is O(log N) comparisons.
//!
//! ## Server
//!
//! With the default `server` feature, `api::create_router` exposes `GET /search?title=`
//! and `GET /sort` over a `catalog::TitleStore`.

pub mod algo;
pub mod catalog;
pub mod core;
pub mod search;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use algo::{merge_sort, merge_sort_indices};
pub use crate::core::{TitleAccessor, compare_titles};
pub use search::binary_search;

pub mod prelude {
    pub use crate::algo::{merge_sort, merge_sort_indices};
    pub use crate::catalog::{Catalog, SortedTitles, TitleStore};
    pub use crate::core::{TitleAccessor, compare_titles};
    pub use crate::search::{binary_search, is_sorted};
}
