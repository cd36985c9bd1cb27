use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ResourceKind;

/// Failure reported by a [`Catalog`](super::Catalog) implementation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog answered with status {0}")]
    Status(StatusCode),
}

/// Why a link, lookup or search produced no metadata.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not parse Spotify URL: {0}")]
    UnrecognizedUrl(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: String },

    #[error("{operation} for '{target}' returned an unexpected response shape")]
    UnexpectedShape {
        operation: &'static str,
        target: String,
    },

    #[error("{operation} for '{target}' failed: {source}")]
    Catalog {
        operation: &'static str,
        target: String,
        #[source]
        source: CatalogError,
    },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
