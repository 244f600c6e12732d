//! Core domain types for the catalog.
//!
//! Two families live here:
//! - Raw upstream records (`RawMovie`, `RawVideo`, `Page<T>`) exactly as the
//!   backend sends them, with every optional field kept optional
//! - The unified `CatalogItem` the rest of the workspace works with

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a catalog entry (movie id, or video id for placeholders)
pub type ItemId = i64;

/// Epoch zero, the timestamp used when an item carries no date at all
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Upstream Records
// =============================================================================

/// A genre/category as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// A movie record from the movie collection, or embedded in a video record.
///
/// `id` is only optional because embedded payloads sometimes omit it; the
/// movie collection itself always carries one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMovie {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub likes: Option<u64>,
    /// Runtime in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    /// Backend timestamp, kept as text until conversion
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A video record, optionally carrying the movie it belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    pub id: ItemId,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub watched_at: Option<String>,
    #[serde(default)]
    pub movie_product: Option<RawMovie>,
}

/// Paginated envelope: `{ data: { content, totalElements, numberOfElements } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: PageData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageData<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number_of_elements: u64,
}

impl<T> Page<T> {
    /// Build a page around `content`, counting it as both page size and total.
    pub fn new(content: Vec<T>) -> Self {
        let count = content.len() as u64;
        Self {
            data: PageData {
                content,
                total_elements: count,
                number_of_elements: count,
            },
        }
    }

    /// Number of records actually returned on this page
    pub fn len(&self) -> usize {
        self.data.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.content.is_empty()
    }

    pub fn into_content(self) -> Vec<T> {
        self.data.content
    }
}

// =============================================================================
// CatalogItem - The Unified Model
// =============================================================================

/// Back-reference to the video a movie-kind item was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRef {
    pub id: ItemId,
    /// Watch timestamp, falling back to the upload date
    pub watched_at: Option<DateTime<Utc>>,
}

/// A fully described movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub year: Option<i32>,
    pub views: u64,
    pub likes: u64,
    pub duration: Option<u32>,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub source_video: Option<VideoRef>,
}

/// Placeholder for a video that has no separate movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: ItemId,
    pub title: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// One displayable entry of the catalog.
///
/// Movie-kind entries always win over video-only placeholders sharing the
/// same id when lists are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Movie(MovieEntry),
    VideoOnly(VideoEntry),
}

impl CatalogItem {
    pub fn id(&self) -> ItemId {
        match self {
            CatalogItem::Movie(m) => m.id,
            CatalogItem::VideoOnly(v) => v.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogItem::Movie(m) => &m.title,
            CatalogItem::VideoOnly(v) => &v.title,
        }
    }

    /// Empty for placeholders
    pub fn description(&self) -> &str {
        match self {
            CatalogItem::Movie(m) => &m.description,
            CatalogItem::VideoOnly(_) => "",
        }
    }

    pub fn views(&self) -> u64 {
        match self {
            CatalogItem::Movie(m) => m.views,
            CatalogItem::VideoOnly(_) => 0,
        }
    }

    pub fn likes(&self) -> u64 {
        match self {
            CatalogItem::Movie(m) => m.likes,
            CatalogItem::VideoOnly(_) => 0,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            CatalogItem::Movie(m) => m.year,
            CatalogItem::VideoOnly(_) => None,
        }
    }

    pub fn genres(&self) -> &[String] {
        match self {
            CatalogItem::Movie(m) => &m.genres,
            CatalogItem::VideoOnly(_) => &[],
        }
    }

    pub fn is_movie(&self) -> bool {
        matches!(self, CatalogItem::Movie(_))
    }

    /// Timestamp used by the "newest first" ordering.
    ///
    /// Creation time if known, else the originating video's watch/upload
    /// time, else epoch zero.
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        match self {
            CatalogItem::Movie(m) => m
                .created_at
                .or_else(|| m.source_video.as_ref().and_then(|v| v.watched_at))
                .unwrap_or(EPOCH),
            CatalogItem::VideoOnly(v) => v.uploaded_at.unwrap_or(EPOCH),
        }
    }

    /// Optimistically count one more view. Placeholders carry no counters.
    pub fn bump_views(&mut self) {
        if let CatalogItem::Movie(m) = self {
            m.views = m.views.saturating_add(1);
        }
    }

    /// Optimistically count one more like. Placeholders carry no counters.
    pub fn bump_likes(&mut self) {
        if let CatalogItem::Movie(m) = self {
            m.likes = m.likes.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn movie(id: ItemId) -> MovieEntry {
        MovieEntry {
            id,
            title: "Heat".to_string(),
            description: String::new(),
            year: Some(1995),
            views: 3,
            likes: 1,
            duration: Some(170),
            image_url: None,
            genres: vec!["Crime".to_string()],
            created_at: None,
            source_video: None,
        }
    }

    #[test]
    fn test_sort_timestamp_prefers_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let watched = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut entry = movie(1);
        entry.created_at = Some(created);
        entry.source_video = Some(VideoRef { id: 9, watched_at: Some(watched) });

        assert_eq!(CatalogItem::Movie(entry).sort_timestamp(), created);
    }

    #[test]
    fn test_sort_timestamp_falls_back_to_video_then_epoch() {
        let watched = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut entry = movie(1);
        entry.source_video = Some(VideoRef { id: 9, watched_at: Some(watched) });
        assert_eq!(CatalogItem::Movie(entry).sort_timestamp(), watched);

        assert_eq!(CatalogItem::Movie(movie(2)).sort_timestamp(), EPOCH);
        let placeholder = CatalogItem::VideoOnly(VideoEntry {
            id: 3,
            title: "Video #3".to_string(),
            uploaded_at: None,
        });
        assert_eq!(placeholder.sort_timestamp(), EPOCH);
    }

    #[test]
    fn test_bump_counters() {
        let mut item = CatalogItem::Movie(movie(1));
        item.bump_views();
        item.bump_likes();
        assert_eq!(item.views(), 4);
        assert_eq!(item.likes(), 2);

        let mut placeholder = CatalogItem::VideoOnly(VideoEntry {
            id: 2,
            title: "Video #2".to_string(),
            uploaded_at: None,
        });
        placeholder.bump_views();
        assert_eq!(placeholder.views(), 0);
        assert!(!placeholder.is_movie());
    }

    #[test]
    fn test_page_helpers() {
        let page = Page::new(vec![1, 2, 3]);
        assert_eq!(page.len(), 3);
        assert_eq!(page.data.number_of_elements, 3);
        assert!(!page.is_empty());
        assert_eq!(page.into_content(), vec![1, 2, 3]);
    }
}
