//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the catalog list.

use crate::view::ViewState;
use catalog_model::CatalogItem;

/// Core trait for filtering catalog items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across tasks
/// - Filters take ownership of the Vec<CatalogItem> and return a filtered Vec
/// - Filters must keep the relative order of the items they retain, and
///   applying one twice must give the same result as applying it once
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of items.
    ///
    /// # Arguments
    /// * `items` - The items to filter (takes ownership)
    /// * `view` - Current query, genre and sort selection
    fn apply(&self, items: Vec<CatalogItem>, view: &ViewState) -> Vec<CatalogItem>;
}
