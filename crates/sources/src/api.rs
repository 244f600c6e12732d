//! The upstream contract every catalog backend implements.
//!
//! The controller only ever talks to the backend through this trait, so
//! tests can swap in a scripted implementation and the CLI can plug in
//! `HttpCatalogApi`.

use async_trait::async_trait;
use catalog_model::{Genre, ItemId, Page, RawMovie, RawVideo, Result};
use std::sync::Arc;

/// Request/response operations offered by the catalog backend.
///
/// Pages are zero-based. Implementations report transport problems as
/// `CatalogError::Network` and malformed bodies as `CatalogError::Decode`.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of the movie collection
    async fn fetch_movies(&self, page: u32, page_size: u32) -> Result<Page<RawMovie>>;

    /// Fetch one page of videos, each optionally embedding its movie
    async fn fetch_videos_with_movie(&self, page: u32, page_size: u32) -> Result<Page<RawVideo>>;

    /// Fetch every known genre
    async fn fetch_genres(&self) -> Result<Vec<Genre>>;

    /// Acknowledge that a movie was opened
    async fn record_view(&self, movie_id: ItemId) -> Result<()>;

    /// Acknowledge that a movie was liked
    async fn record_like(&self, movie_id: ItemId) -> Result<()>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for Arc<T> {
    async fn fetch_movies(&self, page: u32, page_size: u32) -> Result<Page<RawMovie>> {
        (**self).fetch_movies(page, page_size).await
    }

    async fn fetch_videos_with_movie(&self, page: u32, page_size: u32) -> Result<Page<RawVideo>> {
        (**self).fetch_videos_with_movie(page, page_size).await
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        (**self).fetch_genres().await
    }

    async fn record_view(&self, movie_id: ItemId) -> Result<()> {
        (**self).record_view(movie_id).await
    }

    async fn record_like(&self, movie_id: ItemId) -> Result<()> {
        (**self).record_like(movie_id).await
    }
}
