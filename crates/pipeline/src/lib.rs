//! Filter/Sort engine for the catalog list.
//!
//! This crate provides:
//! - Filter trait and implementations (free-text query, genre)
//! - FilterPipeline for composing filters
//! - SortKey with four stable orderings
//! - ViewState and `apply_view`, the pure function from
//!   (items, query, genre, sort) to the displayed list
//!
//! ## Architecture
//! The displayed list is computed in stages:
//! 1. Filters remove items not matching the query or the selected genre
//! 2. The remaining items are sorted by the selected key, ties keeping input order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_view, GenreFilter, SortKey, ViewState};
//!
//! let view = ViewState::new()
//!     .with_query("cat")
//!     .with_genre(GenreFilter::named("comedy"))
//!     .with_sort(SortKey::MostPopular);
//!
//! let visible = apply_view(&items, &view);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod view;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use sort::{SortKey, sort_items};
pub use view::{GenreFilter, ViewState, apply_view};
