//! Free-text search over titles and descriptions.

use crate::traits::Filter;
use crate::view::ViewState;
use catalog_model::CatalogItem;
use rayon::prelude::*;

/// Keeps items whose title or description contains the query.
///
/// ## Algorithm
/// 1. An empty or all-whitespace query keeps everything
/// 2. Otherwise lowercase the query once, surrounding spaces included
/// 3. Keep an item if its lowercased title OR description contains it
pub struct TextQueryFilter;

/// Case-insensitive substring match against title or description.
pub fn matches_query(item: &CatalogItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title().to_lowercase().contains(needle)
        || item.description().to_lowercase().contains(needle)
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn apply(&self, items: Vec<CatalogItem>, view: &ViewState) -> Vec<CatalogItem> {
        if view.query.trim().is_empty() {
            return items;
        }
        let needle = view.query.to_lowercase();

        // Indexed parallel collect keeps the input order
        items
            .into_par_iter()
            .filter(|item| matches_query(item, &needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::{MovieEntry, VideoEntry};

    fn movie(id: i64, title: &str, description: &str) -> CatalogItem {
        CatalogItem::Movie(MovieEntry {
            id,
            title: title.to_string(),
            description: description.to_string(),
            year: None,
            views: 0,
            likes: 0,
            duration: None,
            image_url: None,
            genres: vec![],
            created_at: None,
            source_video: None,
        })
    }

    #[test]
    fn test_text_query_filter() {
        let items = vec![movie(1, "Cat", ""), movie(2, "Dog", ""), movie(3, "Catfish", "")];
        let view = ViewState::default().with_query("cat");

        let filtered = TextQueryFilter.apply(items, &view);

        let titles: Vec<_> = filtered.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Cat", "Catfish"]);
    }

    #[test]
    fn test_matches_description_case_insensitively() {
        let items = vec![
            movie(1, "Heat", "A CAT burglar crew"),
            movie(2, "Alien", "In space"),
        ];
        let view = ViewState::default().with_query("CAT");

        let filtered = TextQueryFilter.apply(items, &view);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), 1);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let items = vec![
            movie(1, "Catfish", ""),
            movie(2, "The Cat", ""),
            movie(3, "Heat", "A cat burglar"),
        ];
        let view = ViewState::default().with_query(" cat");

        let filtered = TextQueryFilter.apply(items, &view);

        let ids: Vec<_> = filtered.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_whitespace_query_keeps_everything() {
        let items = vec![movie(1, "Heat", ""), movie(2, "Alien", "")];
        let view = ViewState::default().with_query("   ");

        assert_eq!(TextQueryFilter.apply(items.clone(), &view), items);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let items = vec![
            movie(1, "Heat", ""),
            CatalogItem::VideoOnly(VideoEntry {
                id: 2,
                title: "Video #2".to_string(),
                uploaded_at: None,
            }),
        ];

        let filtered = TextQueryFilter.apply(items.clone(), &ViewState::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_placeholder_title_is_searchable() {
        let items = vec![CatalogItem::VideoOnly(VideoEntry {
            id: 12,
            title: "Video #12".to_string(),
            uploaded_at: None,
        })];
        let view = ViewState::default().with_query("video #1");

        assert_eq!(TextQueryFilter.apply(items, &view).len(), 1);
    }
}
