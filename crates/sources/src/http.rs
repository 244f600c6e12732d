//! HTTP implementation of `CatalogApi` on top of reqwest.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  movies?page=&size=`
//! - `GET  videos/with-movie?page=&size=`
//! - `GET  genres`
//! - `POST movies/{id}/view`
//! - `POST movies/{id}/like`

use crate::api::CatalogApi;
use crate::config::ClientConfig;
use async_trait::async_trait;
use catalog_model::parser::{parse_genres, parse_movie_page, parse_video_page};
use catalog_model::{CatalogError, Genre, ItemId, Page, RawMovie, RawVideo, Result, SourceKind};
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// Catalog backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Build a client for the backend described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        info!("Using catalog backend at {}", config.base_url);
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::network(SourceKind::Movies, e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_paged(&self, endpoint: SourceKind, path: &str, page: u32, size: u32) -> Result<String> {
        let url = self.url(path);
        debug!("GET {} page={} size={}", url, page, size);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                CatalogError::network(endpoint, e)
            })?;

        response
            .text()
            .await
            .map_err(|e| CatalogError::network(endpoint, e))
    }

    async fn post_ack(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("POST {}", url);
        self.client
            .post(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogError::network(SourceKind::Tracking, e))?;
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn fetch_movies(&self, page: u32, page_size: u32) -> Result<Page<RawMovie>> {
        let body = self.get_paged(SourceKind::Movies, "movies", page, page_size).await?;
        parse_movie_page(&body)
    }

    #[instrument(skip(self))]
    async fn fetch_videos_with_movie(&self, page: u32, page_size: u32) -> Result<Page<RawVideo>> {
        let body = self
            .get_paged(SourceKind::Videos, "videos/with-movie", page, page_size)
            .await?;
        parse_video_page(&body)
    }

    #[instrument(skip(self))]
    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        let url = self.url("genres");
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogError::network(SourceKind::Genres, e))?
            .text()
            .await
            .map_err(|e| CatalogError::network(SourceKind::Genres, e))?;
        parse_genres(&body)
    }

    #[instrument(skip(self))]
    async fn record_view(&self, movie_id: ItemId) -> Result<()> {
        self.post_ack(&format!("movies/{}/view", movie_id)).await
    }

    #[instrument(skip(self))]
    async fn record_like(&self, movie_id: ItemId) -> Result<()> {
        self.post_ack(&format!("movies/{}/like", movie_id)).await
    }
}
