use crate::{
    spotify::{Catalog, ResolveError, extract, link},
    types::{ResolveResult, ResourceKind, TrackRecord},
    warning,
};

pub const DEFAULT_PLAYLIST_LIMIT: usize = 50;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Turns Spotify links into normalized track metadata using a [`Catalog`].
///
/// Every operation is independent: nothing is cached between calls, and a
/// failure at any step is logged where it happens and returned as a
/// [`ResolveError`] rather than raised.
pub struct LinkResolver<C> {
    catalog: C,
    playlist_limit: usize,
}

impl<C: Catalog> LinkResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            playlist_limit: DEFAULT_PLAYLIST_LIMIT,
        }
    }

    pub fn with_playlist_limit(mut self, limit: usize) -> Self {
        self.playlist_limit = limit;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolves a Spotify link into its metadata.
    ///
    /// Tracks and playlists are looked up in the catalog; albums return a stub
    /// without any upstream call. A playlist that exists but has no tracks is
    /// `Ok` with a count of zero, distinct from a failed lookup.
    ///
    /// # Example
    ///
    /// ```
    /// let resolver = LinkResolver::new(PathfinderClient::from_env());
    /// match resolver.resolve("https://open.spotify.com/track/ABC123").await {
    ///     Ok(result) => println!("{} tracks", result.tracks().len()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub async fn resolve(&self, url: &str) -> Result<ResolveResult, ResolveError> {
        let Some(resource) = link::extract_id(url) else {
            warning!("Could not parse Spotify URL: {}", url);
            return Err(ResolveError::UnrecognizedUrl(url.to_string()));
        };

        match resource.kind {
            ResourceKind::Track => {
                let track = self.fetch_track(&resource.id).await?;
                Ok(ResolveResult::Track {
                    id: resource.id,
                    track,
                })
            }
            ResourceKind::Playlist => {
                let tracks = self
                    .fetch_playlist_tracks(&resource.id, self.playlist_limit)
                    .await?;
                Ok(ResolveResult::playlist(resource.id, tracks))
            }
            ResourceKind::Album => Ok(ResolveResult::album_stub(resource.id)),
        }
    }

    /// Looks up a single track by searching for its `spotify:track:` URI.
    ///
    /// Searches the catalog for `spotify:track:<id>` with a limit of one and
    /// normalizes the first hit. The returned record carries the requested id,
    /// whatever id the payload reports.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Spotify track id, not validated
    ///
    /// # Returns
    ///
    /// - `Ok(TrackRecord)` - fully populated record, missing fields defaulted
    /// - `Err(ResolveError::NotFound)` - the search had no hit, or the hit
    ///   carried no track data
    /// - `Err(ResolveError::UnexpectedShape)` - the response had no item list
    /// - `Err(ResolveError::Catalog)` - the catalog call failed
    ///
    /// # Example
    ///
    /// ```
    /// let track = resolver.fetch_track("7qiZfU4dY1lsylvNFoYL2E").await?;
    /// println!("{} - {} ({})", track.artist, track.title, track.album);
    /// ```
    pub async fn fetch_track(&self, track_id: &str) -> Result<TrackRecord, ResolveError> {
        const OPERATION: &str = "track lookup";

        let query = format!("spotify:track:{}", track_id);
        let response = match self.catalog.search_songs(&query, 1).await {
            Ok(response) => response,
            Err(source) => {
                warning!("Error fetching track {}: {}", track_id, source);
                return Err(ResolveError::Catalog {
                    operation: OPERATION,
                    target: track_id.to_string(),
                    source,
                });
            }
        };

        let Some(items) = extract::search_items(&response) else {
            warning!("Unexpected response shape fetching track {}", track_id);
            return Err(ResolveError::UnexpectedShape {
                operation: OPERATION,
                target: track_id.to_string(),
            });
        };

        match items.first().and_then(extract::search_track_data) {
            Some(data) => Ok(extract::track_record(track_id.to_string(), data)),
            None => {
                warning!("Track {} not found", track_id);
                Err(ResolveError::NotFound {
                    kind: ResourceKind::Track,
                    id: track_id.to_string(),
                })
            }
        }
    }

    /// Fetches up to `limit` tracks of a playlist.
    ///
    /// Asks the catalog for a page of `limit` items and reads only that page.
    /// The first `limit` items are considered and items without track data
    /// are skipped, so the result may be shorter than `limit` even when the
    /// playlist is larger.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify playlist id
    /// * `limit` - Maximum number of items to read ([`DEFAULT_PLAYLIST_LIMIT`]
    ///   when called through [`resolve`](Self::resolve) without configuration)
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TrackRecord>)` - the tracks in playlist order, possibly empty
    /// - `Err(ResolveError::UnexpectedShape)` - the response had no item list
    /// - `Err(ResolveError::Catalog)` - the catalog call failed
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = resolver
    ///     .fetch_playlist_tracks("37i9dQZF1FoyQGyinuuvRu", 20)
    ///     .await?;
    /// assert!(tracks.len() <= 20);
    /// ```
    pub async fn fetch_playlist_tracks(
        &self,
        playlist_id: &str,
        limit: usize,
    ) -> Result<Vec<TrackRecord>, ResolveError> {
        const OPERATION: &str = "playlist lookup";

        let response = match self.catalog.get_playlist(playlist_id, limit).await {
            Ok(response) => response,
            Err(source) => {
                warning!("Error fetching playlist {}: {}", playlist_id, source);
                return Err(ResolveError::Catalog {
                    operation: OPERATION,
                    target: playlist_id.to_string(),
                    source,
                });
            }
        };

        let Some(items) = extract::playlist_items(&response) else {
            warning!("Unexpected response shape fetching playlist {}", playlist_id);
            return Err(ResolveError::UnexpectedShape {
                operation: OPERATION,
                target: playlist_id.to_string(),
            });
        };

        Ok(items
            .iter()
            .take(limit)
            .filter_map(extract::playlist_track_data)
            .map(extract::playlist_record)
            .collect())
    }

    /// Free-text track search.
    ///
    /// Passes `query` to the catalog unchanged. Unlike the other lookups,
    /// records carry a `popularity` score (0 when the catalog omits it).
    ///
    /// # Arguments
    ///
    /// * `query` - Search terms
    /// * `limit` - Maximum number of hits ([`DEFAULT_SEARCH_LIMIT`] from the
    ///   CLI and HTTP API)
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<TrackRecord>)` - matching tracks, possibly empty
    /// - `Err(ResolveError::UnexpectedShape)` - the response had no item list
    /// - `Err(ResolveError::Catalog)` - the catalog call failed
    ///
    /// # Example
    ///
    /// ```
    /// for track in resolver.search_tracks("Christian pop", 5).await? {
    ///     println!("{} - {}", track.title, track.artist);
    /// }
    /// ```
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TrackRecord>, ResolveError> {
        const OPERATION: &str = "track search";

        let response = match self.catalog.search_songs(query, limit).await {
            Ok(response) => response,
            Err(source) => {
                warning!("Error searching for '{}': {}", query, source);
                return Err(ResolveError::Catalog {
                    operation: OPERATION,
                    target: query.to_string(),
                    source,
                });
            }
        };

        let Some(items) = extract::search_items(&response) else {
            warning!("Unexpected response shape searching for '{}'", query);
            return Err(ResolveError::UnexpectedShape {
                operation: OPERATION,
                target: query.to_string(),
            });
        };

        Ok(items
            .iter()
            .filter_map(extract::search_track_data)
            .map(extract::search_record)
            .collect())
    }
}
