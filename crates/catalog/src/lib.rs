//! Catalog crate: aggregation and pagination for one browsing screen.
//!
//! - **aggregator**: merges the movie and videos-with-movie collections into
//!   one deduplicated list
//! - **pagination**: the controller that drives initial load, "load more"
//!   and refresh on top of the aggregator

pub mod aggregator;
pub mod pagination;

#[cfg(test)]
mod test_support;

pub use aggregator::{AggregatedPage, aggregate, merge_unique};
pub use pagination::{
    CatalogController, CatalogSnapshot, LoadOutcome, LoadStatus, PageState, SkipReason,
};
