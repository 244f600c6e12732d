//! Filter implementations for the catalog pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod text_query;

// Re-export for convenience
pub use genre::GenreMatchFilter;
pub use text_query::TextQueryFilter;
