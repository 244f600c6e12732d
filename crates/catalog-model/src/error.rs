//! Error types shared by every catalog crate.
//!
//! An empty page is not an error: it decodes into an empty `content` list and
//! renders as an empty state.

use std::fmt;
use thiserror::Error;

/// Which upstream collection a request was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Movies,
    Videos,
    Genres,
    Tracking,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Movies => "movies",
            SourceKind::Videos => "videos",
            SourceKind::Genres => "genres",
            SourceKind::Tracking => "tracking",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while fetching, decoding or aggregating catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Upstream request was rejected, failed in transit or timed out
    #[error("Network failure talking to {endpoint}: {reason}")]
    Network { endpoint: SourceKind, reason: String },

    /// Response body did not match the expected envelope
    #[error("Failed to decode {what}: {reason}")]
    Decode { what: String, reason: String },

    /// A record is missing a field we cannot synthesize
    #[error("Missing {field} on {entity} record")]
    MissingField { entity: String, field: String },

    /// One of the two concurrent initial fetches failed while the other succeeded
    #[error("Partial source failure: {failed} fetch failed")]
    PartialSourceFailure {
        failed: SourceKind,
        #[source]
        source: Box<CatalogError>,
    },

    /// A user supplied value (sort key, genre, ...) could not be interpreted
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl CatalogError {
    pub fn network(endpoint: SourceKind, reason: impl fmt::Display) -> Self {
        CatalogError::Network {
            endpoint,
            reason: reason.to_string(),
        }
    }

    pub fn decode(what: impl Into<String>, reason: impl fmt::Display) -> Self {
        CatalogError::Decode {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// True when the failure came from the transport rather than the payload.
    pub fn is_network(&self) -> bool {
        match self {
            CatalogError::Network { .. } => true,
            CatalogError::PartialSourceFailure { source, .. } => source.is_network(),
            _ => false,
        }
    }
}

/// Convenience type alias for Results in the catalog crates
pub type Result<T> = std::result::Result<T, CatalogError>;
