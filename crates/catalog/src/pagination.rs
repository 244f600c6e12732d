//! # Pagination Controller
//!
//! Drives repeated aggregator runs for one catalog screen:
//!
//! ```text
//! Idle -> FetchingInitial -> Idle | Error
//! Idle -> FetchingMore    -> Idle | Error (page unchanged)
//! any  -> Refreshing      -> Idle | Error (page reset to 0 on success)
//! ```
//!
//! ## Invariants
//! - At most one fetch is in flight; `load_more` is refused while one is
//! - The page index only advances after a successful fetch
//! - Failed loads never clear the items already on screen
//! - Every initial load or refresh bumps a generation counter; a response
//!   that comes back under an older generation is discarded, so a slow
//!   "load more" can never land on top of a newer refresh
//!
//! State lives behind an async mutex that is never held across an upstream
//! call, so the controller can be shared between tasks through `&self`.

use catalog_model::{CatalogItem, Genre, ItemId, Result};
use pipeline::{ViewState, apply_view};
use sources::CatalogApi;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::aggregator::{self, AggregatedPage};

/// What the screen should be showing about loading
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    FetchingInitial,
    FetchingMore,
    Refreshing,
    /// Last fetch failed; previously loaded items are still displayed
    Error(String),
}

/// Paging cursor of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    /// Last page successfully applied (zero-based)
    pub page: u32,
    /// Whether the last movie page came back full; false until page 0 lands
    pub has_more: bool,
    pub in_flight: bool,
}

/// Why `load_more` did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InFlight,
    /// Page 0 has not been applied yet
    NotLoaded,
    Exhausted,
}

/// Result of a load request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response applied; `added` counts ids that were not on screen before
    Loaded { added: usize },
    /// Request refused without side effects
    Skipped(SkipReason),
    /// Response arrived after a newer reload and was dropped
    Stale,
}

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub items: Vec<CatalogItem>,
    pub page: PageState,
    pub status: LoadStatus,
}

#[derive(Debug, Default)]
struct CatalogState {
    items: Vec<CatalogItem>,
    page: PageState,
    status: LoadStatus,
    generation: u64,
    /// Set once an initial load or refresh has been applied
    loaded: bool,
    genres: Vec<Genre>,
}

/// Screen-scoped catalog state plus the upstream it pages through
pub struct CatalogController<A> {
    api: A,
    page_size: u32,
    state: Mutex<CatalogState>,
}

impl<A: CatalogApi> CatalogController<A> {
    /// Create a controller; nothing is fetched until `load_initial`.
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            state: Mutex::new(CatalogState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// First load of the screen.
    pub async fn load_initial(&self) -> Result<LoadOutcome> {
        self.reload(LoadStatus::FetchingInitial).await
    }

    /// Pull-to-refresh: page 0 again, replacing everything on success.
    pub async fn refresh(&self) -> Result<LoadOutcome> {
        self.reload(LoadStatus::Refreshing).await
    }

    #[instrument(skip(self))]
    async fn reload(&self, status: LoadStatus) -> Result<LoadOutcome> {
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.page.in_flight = true;
            state.status = status;
            state.generation
        };

        let result = aggregator::fetch_initial(&self.api, self.page_size).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            warn!(
                "Dropping reload response from generation {} (current {})",
                generation, state.generation
            );
            return Ok(LoadOutcome::Stale);
        }
        state.page.in_flight = false;

        match result {
            Ok(AggregatedPage {
                items,
                raw_movie_count,
            }) => {
                let added = items.len();
                state.items = items;
                state.loaded = true;
                state.page.page = 0;
                state.page.has_more = raw_movie_count >= self.page_size as usize;
                state.status = LoadStatus::Idle;
                info!(
                    "Loaded {} items (has_more: {})",
                    added, state.page.has_more
                );
                Ok(LoadOutcome::Loaded { added })
            }
            Err(e) => {
                warn!("Reload failed, keeping {} items: {}", state.items.len(), e);
                state.status = LoadStatus::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch the next page and append it.
    ///
    /// A no-op (`Skipped`) while another fetch is in flight, before page 0
    /// has been loaded, or once a short page has been seen. On failure the page counter stays put, so calling
    /// again retries the same page.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let (generation, next_page) = {
            let mut state = self.state.lock().await;
            if state.page.in_flight {
                debug!("load_more refused: fetch in flight");
                return Ok(LoadOutcome::Skipped(SkipReason::InFlight));
            }
            if !state.loaded {
                debug!("load_more refused: nothing loaded yet");
                return Ok(LoadOutcome::Skipped(SkipReason::NotLoaded));
            }
            if !state.page.has_more {
                debug!("load_more refused: no more pages");
                return Ok(LoadOutcome::Skipped(SkipReason::Exhausted));
            }
            state.page.in_flight = true;
            state.status = LoadStatus::FetchingMore;
            (state.generation, state.page.page + 1)
        };

        let result = aggregator::fetch_page(&self.api, next_page, self.page_size).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            warn!("Dropping page {} fetched before a reload", next_page);
            return Ok(LoadOutcome::Stale);
        }
        state.page.in_flight = false;

        match result {
            Ok(AggregatedPage {
                items,
                raw_movie_count,
            }) => {
                let before = state.items.len();
                let existing = std::mem::take(&mut state.items);
                state.items = aggregator::merge_unique(existing, items);
                let added = state.items.len() - before;

                state.page.page = next_page;
                state.page.has_more = raw_movie_count >= self.page_size as usize;
                state.status = LoadStatus::Idle;
                info!(
                    "Appended page {}: {} new items (has_more: {})",
                    next_page, added, state.page.has_more
                );
                Ok(LoadOutcome::Loaded { added })
            }
            Err(e) => {
                warn!("Loading page {} failed: {}", next_page, e);
                state.status = LoadStatus::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch the genre list for the filter picker.
    pub async fn load_genres(&self) -> Result<Vec<Genre>> {
        let genres = self.api.fetch_genres().await?;
        self.state.lock().await.genres = genres.clone();
        Ok(genres)
    }

    pub async fn genres(&self) -> Vec<Genre> {
        self.state.lock().await.genres.clone()
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.lock().await;
        CatalogSnapshot {
            items: state.items.clone(),
            page: state.page,
            status: state.status.clone(),
        }
    }

    /// Displayed list for `view`, recomputed from the accumulated items.
    pub async fn visible(&self, view: &ViewState) -> Vec<CatalogItem> {
        let state = self.state.lock().await;
        apply_view(&state.items, view)
    }

    /// Count a view locally, then tell the backend.
    ///
    /// Backend failures are logged and otherwise ignored.
    pub async fn record_view(&self, id: ItemId) {
        if !self.bump(id, CatalogItem::bump_views).await {
            return;
        }
        if let Err(e) = self.api.record_view(id).await {
            warn!("Failed to record view for {}: {}", id, e);
        }
    }

    /// Count a like locally, then tell the backend.
    ///
    /// Backend failures are logged and otherwise ignored.
    pub async fn record_like(&self, id: ItemId) {
        if !self.bump(id, CatalogItem::bump_likes).await {
            return;
        }
        if let Err(e) = self.api.record_like(id).await {
            warn!("Failed to record like for {}: {}", id, e);
        }
    }

    /// Apply an optimistic counter update. Returns whether the backend should
    /// hear about it: placeholders have no movie record to track against.
    async fn bump(&self, id: ItemId, apply: fn(&mut CatalogItem)) -> bool {
        let mut state = self.state.lock().await;
        match state.items.iter_mut().find(|item| item.id() == id) {
            Some(item) if !item.is_movie() => {
                debug!("Not tracking video-only item {}", id);
                false
            }
            Some(item) => {
                apply(item);
                true
            }
            None => true,
        }
    }
}
