//! Turning raw upstream records into `CatalogItem`s.
//!
//! ## Rules
//! - A movie-collection record becomes a movie-kind item; it must carry an id
//! - A video with an embedded movie becomes a movie-kind item that inherits
//!   every movie field and remembers the video it came from
//! - A video without a movie becomes a video-only placeholder built from the
//!   video id, its timestamp and a generated title

use catalog_model::parser::parse_timestamp;
use catalog_model::{
    CatalogError, CatalogItem, ItemId, MovieEntry, RawMovie, RawVideo, Result, VideoEntry,
    VideoRef,
};

/// Title given to videos that have no movie record of their own
pub fn placeholder_title(video_id: ItemId) -> String {
    format!("Video #{}", video_id)
}

/// Convert a record from the movie collection.
pub fn movie_to_item(raw: RawMovie) -> Result<CatalogItem> {
    let id = raw.id.ok_or_else(|| CatalogError::MissingField {
        entity: "movie".to_string(),
        field: "id".to_string(),
    })?;
    Ok(CatalogItem::Movie(movie_entry(raw, id, None)))
}

/// Convert a record from the videos-with-movie collection.
///
/// The embedded movie's own id is used when present, otherwise the video id
/// stands in for it.
pub fn video_to_item(raw: RawVideo) -> CatalogItem {
    let watched_at = raw
        .watched_at
        .as_deref()
        .and_then(parse_timestamp)
        .or_else(|| raw.upload_date.as_deref().and_then(parse_timestamp));

    match raw.movie_product {
        Some(movie) => {
            let id = movie.id.unwrap_or(raw.id);
            let back_ref = VideoRef {
                id: raw.id,
                watched_at,
            };
            CatalogItem::Movie(movie_entry(movie, id, Some(back_ref)))
        }
        None => CatalogItem::VideoOnly(VideoEntry {
            id: raw.id,
            title: placeholder_title(raw.id),
            uploaded_at: watched_at,
        }),
    }
}

fn movie_entry(raw: RawMovie, id: ItemId, source_video: Option<VideoRef>) -> MovieEntry {
    MovieEntry {
        id,
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        year: raw.release_year,
        views: raw.views.unwrap_or(0),
        likes: raw.likes.unwrap_or(0),
        duration: raw.duration,
        image_url: raw.image_url,
        genres: raw.genres.into_iter().map(|g| g.name).collect(),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        source_video,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Genre;

    fn raw_movie(id: Option<ItemId>, title: &str, views: u64) -> RawMovie {
        RawMovie {
            id,
            title: Some(title.to_string()),
            views: Some(views),
            genres: vec![Genre { id: 1, name: "Drama".to_string() }],
            ..Default::default()
        }
    }

    #[test]
    fn test_movie_to_item_requires_id() {
        let err = movie_to_item(raw_movie(None, "A", 1)).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { .. }));

        let item = movie_to_item(raw_movie(Some(7), "A", 1)).unwrap();
        assert_eq!(item.id(), 7);
        assert_eq!(item.genres(), &["Drama".to_string()]);
        assert!(item.is_movie());
    }

    #[test]
    fn test_video_with_movie_inherits_fields() {
        let video = RawVideo {
            id: 1,
            upload_date: Some("2024-01-01".to_string()),
            watched_at: None,
            movie_product: Some(raw_movie(None, "A", 10)),
        };

        let item = video_to_item(video);
        assert_eq!(item.id(), 1);
        assert_eq!(item.title(), "A");
        assert_eq!(item.views(), 10);
        match item {
            CatalogItem::Movie(entry) => {
                let back_ref = entry.source_video.expect("back reference should be set");
                assert_eq!(back_ref.id, 1);
                assert!(back_ref.watched_at.is_some());
            }
            CatalogItem::VideoOnly(_) => panic!("expected a movie-kind item"),
        }
    }

    #[test]
    fn test_embedded_movie_id_wins_over_video_id() {
        let video = RawVideo {
            id: 50,
            movie_product: Some(raw_movie(Some(3), "C", 0)),
            ..Default::default()
        };
        assert_eq!(video_to_item(video).id(), 3);
    }

    #[test]
    fn test_video_without_movie_is_placeholder() {
        let video = RawVideo {
            id: 2,
            upload_date: None,
            watched_at: Some("2024-05-01T08:00:00Z".to_string()),
            movie_product: None,
        };

        let item = video_to_item(video);
        assert!(!item.is_movie());
        assert_eq!(item.id(), 2);
        assert_eq!(item.title(), "Video #2");
        assert_eq!(item.views(), 0);
    }
}
