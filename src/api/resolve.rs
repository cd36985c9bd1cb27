use std::sync::Arc;

use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;

use crate::{
    spotify::{DEFAULT_SEARCH_LIMIT, LinkResolver, PathfinderClient, ResolveError},
    types::{ResolveEnvelope, ResolveResult, SearchEnvelope, TrackRecord},
};

pub type SharedResolver = Arc<LinkResolver<PathfinderClient>>;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

// Malformed query strings are reported in the envelope like any other failure.
pub async fn resolve(
    params: Result<Query<ResolveParams>, QueryRejection>,
    Extension(resolver): Extension<SharedResolver>,
) -> Json<ResolveEnvelope> {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return Json(ResolveEnvelope::failure(rejection.body_text())),
    };

    let outcome = resolver.resolve(&params.url).await;
    Json(ResolveEnvelope::from_outcome(&outcome))
}

pub async fn search(
    params: Result<Query<SearchParams>, QueryRejection>,
    Extension(resolver): Extension<SharedResolver>,
) -> Json<SearchEnvelope> {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return Json(SearchEnvelope::failure(rejection.body_text())),
    };

    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let outcome = resolver.search_tracks(&params.q, limit).await;
    Json(SearchEnvelope::from_outcome(outcome))
}

impl ResolveEnvelope {
    pub fn from_outcome(outcome: &Result<ResolveResult, ResolveError>) -> Self {
        match outcome {
            Ok(result) => {
                let tracks = result.tracks().to_vec();
                ResolveEnvelope {
                    success: true,
                    kind: Some(result.kind()),
                    id: Some(result.id().to_string()),
                    track_count: Some(tracks.len()),
                    tracks: Some(tracks),
                    error: None,
                }
            }
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn failure(error: String) -> Self {
        ResolveEnvelope {
            success: false,
            kind: None,
            id: None,
            tracks: None,
            track_count: None,
            error: Some(error),
        }
    }
}

impl SearchEnvelope {
    pub fn from_outcome(outcome: Result<Vec<TrackRecord>, ResolveError>) -> Self {
        match outcome {
            Ok(tracks) => SearchEnvelope {
                success: true,
                count: Some(tracks.len()),
                tracks: Some(tracks),
                error: None,
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    pub fn failure(error: String) -> Self {
        SearchEnvelope {
            success: false,
            tracks: None,
            count: None,
            error: Some(error),
        }
    }
}
