//! Sort orders for the displayed list.
//!
//! Every order is stable: items that compare equal keep the relative order
//! they had in the input list.

use catalog_model::{CatalogError, CatalogItem};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// How the displayed list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Descending by creation (or originating video) timestamp
    #[default]
    Newest,
    /// Descending by view count
    MostPopular,
    /// Ascending by title
    TitleAsc,
    /// Descending by release year
    YearDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::MostPopular,
        SortKey::TitleAsc,
        SortKey::YearDesc,
    ];

    /// Compare two items under this key; `Equal` means "keep input order".
    pub fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortKey::Newest => b.sort_timestamp().cmp(&a.sort_timestamp()),
            SortKey::MostPopular => b.views().cmp(&a.views()),
            SortKey::TitleAsc => compare_titles(a.title(), b.title()),
            SortKey::YearDesc => b.year().unwrap_or(0).cmp(&a.year().unwrap_or(0)),
        }
    }
}

/// Accent- and case-insensitive key: NFD, combining marks dropped, lowercased.
fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Folded titles first; accents, then case, only break ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Sort `items` in place under `key`.
///
/// `par_sort_by` is a stable merge sort, which is what keeps ties in input
/// order.
pub fn sort_items(items: &mut [CatalogItem], key: SortKey) {
    items.par_sort_by(|a, b| key.compare(a, b));
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Newest => "newest",
            SortKey::MostPopular => "popular",
            SortKey::TitleAsc => "title",
            SortKey::YearDesc => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "popular" => Ok(SortKey::MostPopular),
            "title" => Ok(SortKey::TitleAsc),
            "year" => Ok(SortKey::YearDesc),
            _ => Err(CatalogError::InvalidValue {
                field: "sort".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
