use std::future::Future;

use reqwest::Client;
use serde_json::{Value, json};

use crate::{config, spotify::CatalogError};

const SEARCH_OPERATION: &str = "searchDesktop";
const PLAYLIST_OPERATION: &str = "fetchPlaylist";

/// Upstream service the resolver reads raw track metadata from.
///
/// Implementations hand back the response body untouched; all interpretation
/// of its shape happens in [`crate::spotify::extract`].
pub trait Catalog {
    /// Searches songs, returning at most `limit` hits.
    fn search_songs(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Value, CatalogError>> + Send;

    /// Fetches the first page of a playlist's contents.
    ///
    /// `limit` is the number of items the caller will read; the page must be
    /// at least that large. Implementations may return more.
    fn get_playlist(
        &self,
        playlist_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Value, CatalogError>> + Send;
}

/// Catalog backed by Spotify's GraphQL "pathfinder" endpoint.
///
/// The client does not obtain credentials itself. When `SPOLINK_CATALOG_TOKEN`
/// is set it is sent as a bearer token, and when persisted query hashes are
/// configured they are attached as the `persistedQuery` extension.
#[derive(Debug, Clone)]
pub struct PathfinderClient {
    client: Client,
    url: String,
    token: Option<String>,
    search_hash: Option<String>,
    playlist_hash: Option<String>,
}

impl PathfinderClient {
    /// Creates a client posting to `url`.
    ///
    /// # Arguments
    ///
    /// * `url` - Full URL of the GraphQL query endpoint
    /// * `token` - Pre-obtained bearer token, or `None` to send no
    ///   `Authorization` header
    ///
    /// # Example
    ///
    /// ```
    /// let client = PathfinderClient::new("http://127.0.0.1:9000/query", None);
    /// let resolver = LinkResolver::new(client);
    /// ```
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            token,
            search_hash: None,
            playlist_hash: None,
        }
    }

    /// Creates a client from the loaded configuration.
    ///
    /// Reads `SPOLINK_CATALOG_URL`, `SPOLINK_CATALOG_TOKEN`,
    /// `SPOLINK_SEARCH_HASH` and `SPOLINK_PLAYLIST_HASH` through
    /// [`crate::config`]. Call [`config::load_env`] first so values from the
    /// `.env` file are visible.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let resolver = LinkResolver::new(PathfinderClient::from_env());
    /// ```
    pub fn from_env() -> Self {
        Self::new(config::catalog_url(), config::catalog_token())
            .with_query_hashes(config::search_query_hash(), config::playlist_query_hash())
    }

    /// Attaches persisted query hashes to the search and playlist operations.
    ///
    /// # Arguments
    ///
    /// * `search` - sha256 hash sent with `searchDesktop`, if any
    /// * `playlist` - sha256 hash sent with `fetchPlaylist`, if any
    ///
    /// A `None` hash sends the operation without the `persistedQuery`
    /// extension.
    pub fn with_query_hashes(mut self, search: Option<String>, playlist: Option<String>) -> Self {
        self.search_hash = search;
        self.playlist_hash = playlist;
        self
    }

    async fn query(
        &self,
        operation: &str,
        variables: Value,
        hash: Option<&str>,
    ) -> Result<Value, CatalogError> {
        let mut body = json!({
            "operationName": operation,
            "variables": variables,
        });
        if let Some(hash) = hash {
            body["extensions"] = json!({
                "persistedQuery": { "version": 1, "sha256Hash": hash }
            });
        }

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

impl Catalog for PathfinderClient {
    async fn search_songs(&self, query: &str, limit: usize) -> Result<Value, CatalogError> {
        let variables = json!({
            "searchTerm": query,
            "offset": 0,
            "limit": limit,
            "numberOfTopResults": 5,
            "includeAudiobooks": false,
        });
        self.query(SEARCH_OPERATION, variables, self.search_hash.as_deref())
            .await
    }

    async fn get_playlist(&self, playlist_id: &str, limit: usize) -> Result<Value, CatalogError> {
        let variables = json!({
            "uri": format!("spotify:playlist:{}", playlist_id),
            "offset": 0,
            "limit": limit,
        });
        self.query(PLAYLIST_OPERATION, variables, self.playlist_hash.as_deref())
            .await
    }
}
