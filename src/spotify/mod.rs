//! # Spotify Integration Module
//!
//! This module turns Spotify links into normalized track metadata. It is the
//! translation layer between spolink's callers (CLI, HTTP API) and the
//! external catalog that actually knows about tracks and playlists.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, HTTP API)
//!          ↓
//! LinkResolver
//!     ├── Link extraction (kind + id from a URL)
//!     ├── Track lookup / playlist lookup / search
//!     └── Payload extraction (pure functions over JSON)
//!          ↓
//! Catalog (trait) ── PathfinderClient (reqwest, JSON)
//!          ↓
//! Spotify pathfinder endpoint
//! ```
//!
//! ## Core Modules
//!
//! ### Link Extraction
//!
//! [`link`] - Finds `spotify.com/{track,playlist,album}/<id>` anywhere in a
//! string. Tracks are tested first, then playlists, then albums.
//!
//! ### Payload Extraction
//!
//! [`extract`] - Reaches into the catalog's nested response shapes and
//! builds fully populated [`TrackRecord`](crate::types::TrackRecord)s. Every
//! missing field gets a sentinel value instead of failing the record.
//!
//! ### Catalog
//!
//! [`catalog`] - The [`Catalog`] seam and its HTTP implementation
//! [`PathfinderClient`]. Tests substitute in-memory catalogs.
//!
//! ### Resolver
//!
//! [`resolver`] - [`LinkResolver`] dispatches a link to the matching lookup
//! and wraps the outcome in a [`ResolveResult`](crate::types::ResolveResult).
//!
//! ## Error Handling Philosophy
//!
//! Metadata is best effort. Unrecognized links, failed upstream calls and
//! unexpected response shapes are logged where they are detected and returned
//! as [`ResolveError`] values. Nothing is retried, and nothing panics.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let resolver = LinkResolver::new(PathfinderClient::from_env());
//!
//! let result = resolver
//!     .resolve("https://open.spotify.com/playlist/37i9dQZF1FoyQGyinuuvRu")
//!     .await?;
//! for track in result.tracks() {
//!     println!("{} - {}", track.title, track.artist);
//! }
//!
//! let hits = resolver.search_tracks("Christian pop", 5).await?;
//! ```
//!
//! ## Thread Safety
//!
//! A [`LinkResolver`] holds no mutable state. It is `Send + Sync` whenever its
//! catalog is, and can be shared behind an `Arc`.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod link;
pub mod resolver;

pub use catalog::{Catalog, PathfinderClient};
pub use error::{CatalogError, ResolveError};
pub use resolver::{DEFAULT_PLAYLIST_LIMIT, DEFAULT_SEARCH_LIMIT, LinkResolver};
