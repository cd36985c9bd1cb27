//! # API Module
//!
//! HTTP endpoints exposing the link resolver to other services. A backend
//! that receives user-submitted Spotify links can call these instead of
//! linking the library directly.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, returns status and version.
//! - [`resolve`] - `GET /resolve?url=<link>`, resolves a track, playlist or
//!   album link. Answers with an envelope:
//!
//!   ```json
//!   { "success": true, "type": "playlist", "id": "37i9dQZF1FoyQGyinuuvRu",
//!     "tracks": [ ... ], "track_count": 50 }
//!   ```
//!
//!   or, when nothing could be resolved:
//!
//!   ```json
//!   { "success": false, "error": "could not parse Spotify URL: ..." }
//!   ```
//!
//! - [`search`] - `GET /search?q=<query>&limit=<n>`, free-text track search
//!   answering `{ "success": true, "tracks": [...], "count": 5 }`.
//!
//! Failures, including missing or malformed query parameters, are reported
//! inside the envelope with a `200` status so callers only need one decoding
//! path.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spolink::api::{health, resolve, search};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/resolve", get(resolve))
//!     .route("/search", get(search))
//!     .layer(Extension(resolver));
//! ```

mod health;
mod resolve;

pub use health::health;
pub use resolve::{ResolveParams, SearchParams, SharedResolver, resolve, search};
