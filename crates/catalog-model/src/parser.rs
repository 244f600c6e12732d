//! Decoding of backend response bodies.
//!
//! The backend wraps collections in a paginated envelope:
//! `{ "data": { "content": [...], "totalElements": N, "numberOfElements": M } }`.
//! Genre lists come either wrapped in `data` or as a bare array.
//!
//! Timestamps arrive in more than one shape (RFC 3339, offset-less
//! `LocalDateTime`, plain dates), so they are kept as text on the raw records
//! and normalized here.

use crate::error::{CatalogError, Result};
use crate::types::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Parse a page of movie records
pub fn parse_movie_page(body: &str) -> Result<Page<RawMovie>> {
    serde_json::from_str(body).map_err(|e| CatalogError::decode("movie page", e))
}

/// Parse a page of video records (each optionally embedding a movie)
pub fn parse_video_page(body: &str) -> Result<Page<RawVideo>> {
    serde_json::from_str(body).map_err(|e| CatalogError::decode("video page", e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreBody {
    Wrapped { data: Vec<Genre> },
    Bare(Vec<Genre>),
}

/// Parse the genre list, accepting both the wrapped and bare forms
pub fn parse_genres(body: &str) -> Result<Vec<Genre>> {
    let parsed: GenreBody =
        serde_json::from_str(body).map_err(|e| CatalogError::decode("genre list", e))?;
    Ok(match parsed {
        GenreBody::Wrapped { data } => data,
        GenreBody::Bare(genres) => genres,
    })
}

/// Normalize a backend timestamp to UTC.
///
/// Offset-less values are taken as UTC; a bare date is midnight. Anything
/// else yields `None` and the caller falls back to the next timestamp source.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
