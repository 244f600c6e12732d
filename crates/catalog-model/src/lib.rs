//! # Catalog Model Crate
//!
//! Domain types shared by the catalog browsing crates.
//!
//! ## Main Components
//!
//! - **types**: Raw upstream records, the paginated envelope and the unified `CatalogItem`
//! - **parser**: Decode backend response bodies and normalize timestamps
//! - **error**: Error taxonomy for fetching and aggregating catalog data
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog_model::parser::parse_movie_page;
//!
//! let page = parse_movie_page(&body)?;
//! println!("{} of {} movies", page.len(), page.data.total_elements);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result, SourceKind};
pub use types::{
    // Type aliases
    ItemId,
    // Upstream records
    Genre,
    Page,
    PageData,
    RawMovie,
    RawVideo,
    // Unified model
    CatalogItem,
    MovieEntry,
    VideoEntry,
    VideoRef,
    EPOCH,
};
