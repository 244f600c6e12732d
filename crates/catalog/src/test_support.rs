//! Scripted `CatalogApi` used by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_model::{
    CatalogError, Genre, ItemId, Page, RawMovie, RawVideo, Result, SourceKind,
};
use sources::CatalogApi;
use tokio::sync::Notify;

pub fn raw_movie(id: ItemId, title: &str, views: u64) -> RawMovie {
    RawMovie {
        id: Some(id),
        title: Some(title.to_string()),
        views: Some(views),
        genres: vec![Genre {
            id: 1,
            name: "Drama".to_string(),
        }],
        ..Default::default()
    }
}

pub fn raw_video(id: ItemId, movie: Option<RawMovie>) -> RawVideo {
    RawVideo {
        id,
        upload_date: Some("2024-01-01T00:00:00Z".to_string()),
        watched_at: None,
        movie_product: movie,
    }
}

/// Pauses `fetch_movies` for pages > 0 until released.
#[derive(Clone, Default)]
pub struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[derive(Default)]
pub struct ScriptedApi {
    movie_pages: Mutex<HashMap<u32, Vec<RawMovie>>>,
    videos: Mutex<Vec<RawVideo>>,
    genres: Vec<Genre>,
    fail_movies: AtomicBool,
    fail_videos: AtomicBool,
    fail_tracking: AtomicBool,
    movie_calls: AtomicUsize,
    video_calls: AtomicUsize,
    requested_pages: Mutex<Vec<u32>>,
    tracked: Mutex<Vec<(&'static str, ItemId)>>,
    gate: Option<Gate>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie_page(self, page: u32, movies: Vec<RawMovie>) -> Self {
        self.set_movie_page(page, movies);
        self
    }

    pub fn with_videos(self, videos: Vec<RawVideo>) -> Self {
        *self.videos.lock().unwrap() = videos;
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn failing_movies(self, fail: bool) -> Self {
        self.set_fail_movies(fail);
        self
    }

    pub fn failing_videos(self, fail: bool) -> Self {
        self.fail_videos.store(fail, Ordering::SeqCst);
        self
    }

    pub fn set_movie_page(&self, page: u32, movies: Vec<RawMovie>) {
        self.movie_pages.lock().unwrap().insert(page, movies);
    }

    pub fn set_fail_movies(&self, fail: bool) {
        self.fail_movies.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_tracking(&self, fail: bool) {
        self.fail_tracking.store(fail, Ordering::SeqCst);
    }

    pub fn movie_calls(&self) -> usize {
        self.movie_calls.load(Ordering::SeqCst)
    }

    pub fn video_calls(&self) -> usize {
        self.video_calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }

    pub fn tracked(&self) -> Vec<(&'static str, ItemId)> {
        self.tracked.lock().unwrap().clone()
    }

    fn track(&self, kind: &'static str, id: ItemId) -> Result<()> {
        self.tracked.lock().unwrap().push((kind, id));
        if self.fail_tracking.load(Ordering::SeqCst) {
            return Err(CatalogError::network(SourceKind::Tracking, "tracking endpoint down"));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for ScriptedApi {
    async fn fetch_movies(&self, page: u32, _page_size: u32) -> Result<Page<RawMovie>> {
        self.movie_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_pages.lock().unwrap().push(page);

        if page > 0 {
            if let Some(gate) = &self.gate {
                gate.started.notify_one();
                gate.release.notified().await;
            }
        }

        if self.fail_movies.load(Ordering::SeqCst) {
            return Err(CatalogError::network(SourceKind::Movies, "connection reset"));
        }
        let movies = self
            .movie_pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_default();
        Ok(Page::new(movies))
    }

    async fn fetch_videos_with_movie(&self, _page: u32, _page_size: u32) -> Result<Page<RawVideo>> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_videos.load(Ordering::SeqCst) {
            return Err(CatalogError::network(SourceKind::Videos, "timed out"));
        }
        Ok(Page::new(self.videos.lock().unwrap().clone()))
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        Ok(self.genres.clone())
    }

    async fn record_view(&self, movie_id: ItemId) -> Result<()> {
        self.track("view", movie_id)
    }

    async fn record_like(&self, movie_id: ItemId) -> Result<()> {
        self.track("like", movie_id)
    }
}
