//! # Sources Crate
//!
//! Everything that touches the catalog backend.
//!
//! ## Components
//!
//! ### CatalogApi
//! The request/response contract: paged movies, paged videos-with-movie,
//! the genre list, and the view/like acknowledgements.
//!
//! ### HttpCatalogApi
//! reqwest-backed implementation used by the CLI.
//!
//! ### convert
//! Turns raw movie and video records into `CatalogItem`s.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogApi, ClientConfig, HttpCatalogApi, convert};
//!
//! let api = HttpCatalogApi::new(&ClientConfig::default())?;
//! let page = api.fetch_movies(0, 10).await?;
//! let items = page
//!     .into_content()
//!     .into_iter()
//!     .map(convert::movie_to_item)
//!     .collect::<Result<Vec<_>, _>>()?;
//! ```

// Public modules
pub mod api;
pub mod config;
pub mod convert;
pub mod http;

// Re-export commonly used types
pub use api::CatalogApi;
pub use config::ClientConfig;
pub use http::HttpCatalogApi;
