//! Screen-scoped view state and the pure view function.
//!
//! `ViewState` is passed explicitly into the engine rather than captured, so
//! recomputing the displayed list on every change is just another call to
//! `apply_view`.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreMatchFilter, TextQueryFilter};
use crate::sort::{SortKey, sort_items};
use catalog_model::{CatalogError, CatalogItem};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The genre selected in the picker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GenreFilter {
    /// Sentinel matching every item
    #[default]
    All,
    Named(String),
}

impl GenreFilter {
    /// `"all"` (any case) and blank names collapse to the sentinel.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            GenreFilter::All
        } else {
            GenreFilter::Named(trimmed.to_string())
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str("all"),
            GenreFilter::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GenreFilter::named(s))
    }
}

/// Current query, genre and sort selection of one screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub query: String,
    pub genre: GenreFilter,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_genre(mut self, genre: GenreFilter) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Build a view from loosely typed inputs (CLI flags, query strings).
    pub fn parse(query: Option<&str>, genre: Option<&str>, sort: Option<&str>) -> Result<Self, CatalogError> {
        let sort = match sort {
            Some(raw) => raw.parse()?,
            None => SortKey::default(),
        };
        Ok(Self {
            query: query.unwrap_or_default().to_string(),
            genre: genre.map(GenreFilter::named).unwrap_or_default(),
            sort,
        })
    }
}

/// Compute the displayed list: text filter, then genre filter, then sort.
///
/// Pure and side-effect free; the input slice is left untouched.
pub fn apply_view(items: &[CatalogItem], view: &ViewState) -> Vec<CatalogItem> {
    let pipeline = FilterPipeline::new()
        .add_filter(TextQueryFilter)
        .add_filter(GenreMatchFilter);

    let mut visible = pipeline.apply(items.to_vec(), view);
    sort_items(&mut visible, view.sort);
    visible
}
