//! Filter to keep only items tagged with the selected genre.
//!
//! Matching is substring based rather than exact so that naming variance on
//! the backend ("Sci-Fi" vs "Sci-Fi & Fantasy") still lines up.

use crate::traits::Filter;
use crate::view::{GenreFilter, ViewState};
use catalog_model::CatalogItem;

/// Keeps items with at least one genre containing the selected name.
///
/// ## Algorithm
/// 1. `GenreFilter::All` keeps every item
/// 2. Otherwise lowercase the selection once
/// 3. Keep items where any genre name, lowercased, contains it
pub struct GenreMatchFilter;

pub fn matches_genre(item: &CatalogItem, needle: &str) -> bool {
    item.genres()
        .iter()
        .any(|genre| genre.to_lowercase().contains(needle))
}

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply(&self, items: Vec<CatalogItem>, view: &ViewState) -> Vec<CatalogItem> {
        let needle = match &view.genre {
            GenreFilter::All => return items,
            GenreFilter::Named(name) => name.to_lowercase(),
        };

        items
            .into_iter()
            .filter(|item| matches_genre(item, &needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::{MovieEntry, VideoEntry};

    fn movie(id: i64, genres: &[&str]) -> CatalogItem {
        CatalogItem::Movie(MovieEntry {
            id,
            title: format!("Movie {}", id),
            description: String::new(),
            year: None,
            views: 0,
            likes: 0,
            duration: None,
            image_url: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            created_at: None,
            source_video: None,
        })
    }

    #[test]
    fn test_genre_filter() {
        let items = vec![
            movie(1, &["Action", "Adventure"]),
            movie(2, &["Drama"]),
            movie(3, &["Sci-Fi & Fantasy"]),
        ];

        let view = ViewState::default().with_genre(GenreFilter::named("sci-fi"));
        let filtered = GenreMatchFilter.apply(items.clone(), &view);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), 3);

        let view = ViewState::default().with_genre(GenreFilter::named("ACTION"));
        let filtered = GenreMatchFilter.apply(items, &view);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), 1);
    }

    #[test]
    fn test_all_sentinel_matches_everything() {
        let items = vec![
            movie(1, &[]),
            CatalogItem::VideoOnly(VideoEntry {
                id: 2,
                title: "Video #2".to_string(),
                uploaded_at: None,
            }),
        ];

        let filtered = GenreMatchFilter.apply(items.clone(), &ViewState::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_placeholders_never_match_a_named_genre() {
        let items = vec![CatalogItem::VideoOnly(VideoEntry {
            id: 2,
            title: "Video #2".to_string(),
            uploaded_at: None,
        })];
        let view = ViewState::default().with_genre(GenreFilter::named("drama"));

        assert!(GenreMatchFilter.apply(items, &view).is_empty());
    }
}
