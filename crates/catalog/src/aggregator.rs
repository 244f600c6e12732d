//! # Catalog Aggregator
//!
//! Combines the movie collection and the videos-with-movie collection into
//! one deduplicated list of `CatalogItem`s:
//! 1. Convert raw movies (movie-kind) and raw videos (movie-kind when a
//!    movie is attached, video-only placeholder otherwise)
//! 2. Concatenate movies first, then videos
//! 3. Keep one entry per id, movie-kind taking precedence
//!
//! Only page 0 pulls videos; later pages are movies only. Errors are never
//! swallowed here, the pagination controller decides what the user sees.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use catalog_model::{CatalogError, CatalogItem, ItemId, RawMovie, RawVideo, Result, SourceKind};
use sources::{CatalogApi, convert};
use tracing::{debug, info, warn};

/// Items produced by one fetch, plus what the controller needs to page on
#[derive(Debug, Clone)]
pub struct AggregatedPage {
    pub items: Vec<CatalogItem>,
    /// Raw movie records returned; fewer than the page size means no more pages
    pub raw_movie_count: usize,
}

/// Merge `incoming` into `existing`, keeping a single entry per id.
///
/// The first occurrence of an id keeps its position. A later movie-kind
/// record replaces an earlier video-only placeholder in place; any other
/// duplicate is dropped. Running this over the whole accumulated list after
/// every append is what lets a late movie record evict a stale placeholder.
pub fn merge_unique(existing: Vec<CatalogItem>, incoming: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let existing_len = existing.len();
    let incoming_len = incoming.len();

    let mut merged: Vec<CatalogItem> = Vec::with_capacity(existing_len + incoming_len);
    let mut positions: HashMap<ItemId, usize> = HashMap::new();

    for item in existing.into_iter().chain(incoming) {
        match positions.entry(item.id()) {
            Entry::Occupied(slot) => {
                let kept = &mut merged[*slot.get()];
                if !kept.is_movie() && item.is_movie() {
                    *kept = item;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(item);
            }
        }
    }

    debug!(
        "Merged items: existing={}, incoming={}, total_after_dedup={}",
        existing_len,
        incoming_len,
        merged.len()
    );

    merged
}

/// Convert and merge one page of movies with one page of videos.
pub fn aggregate(movies: Vec<RawMovie>, videos: Vec<RawVideo>) -> Result<Vec<CatalogItem>> {
    let movie_items = movies
        .into_iter()
        .map(convert::movie_to_item)
        .collect::<Result<Vec<_>>>()?;
    let video_items: Vec<CatalogItem> = videos.into_iter().map(convert::video_to_item).collect();

    Ok(merge_unique(movie_items, video_items))
}

/// Fetch page 0 of both collections concurrently and aggregate them.
///
/// Both requests are awaited jointly. If exactly one fails the error is
/// reported as `PartialSourceFailure` naming the failed side; if both fail
/// the movie error is returned.
pub async fn fetch_initial<A: CatalogApi + ?Sized>(api: &A, page_size: u32) -> Result<AggregatedPage> {
    let (movies, videos) = tokio::join!(
        api.fetch_movies(0, page_size),
        api.fetch_videos_with_movie(0, page_size)
    );

    let (movies, videos) = match (movies, videos) {
        (Ok(movies), Ok(videos)) => (movies, videos),
        (Err(e), Ok(_)) => {
            return Err(CatalogError::PartialSourceFailure {
                failed: SourceKind::Movies,
                source: Box::new(e),
            });
        }
        (Ok(_), Err(e)) => {
            return Err(CatalogError::PartialSourceFailure {
                failed: SourceKind::Videos,
                source: Box::new(e),
            });
        }
        (Err(movie_err), Err(video_err)) => {
            warn!("Both initial fetches failed; videos: {}", video_err);
            return Err(movie_err);
        }
    };

    let raw_movie_count = movies.len();
    info!(
        "Fetched initial page: movies={}, videos={}",
        raw_movie_count,
        videos.len()
    );

    let items = aggregate(movies.into_content(), videos.into_content())?;
    Ok(AggregatedPage {
        items,
        raw_movie_count,
    })
}

/// Fetch a later page (movies only) and convert it.
pub async fn fetch_page<A: CatalogApi + ?Sized>(api: &A, page: u32, page_size: u32) -> Result<AggregatedPage> {
    let movies = api.fetch_movies(page, page_size).await?;
    let raw_movie_count = movies.len();
    info!("Fetched page {}: movies={}", page, raw_movie_count);

    let items = aggregate(movies.into_content(), Vec::new())?;
    Ok(AggregatedPage {
        items,
        raw_movie_count,
    })
}
