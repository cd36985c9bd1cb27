//! Configuration management for spolink.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Every setting is optional and has a
//! default, so spolink runs without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::spotify::DEFAULT_PLAYLIST_LIMIT;

pub const DEFAULT_CATALOG_URL: &str = "https://api-partner.spotify.com/pathfinder/v1/query";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `spolink` data directory if it doesn't exist and loads
/// variables from `spolink/.env` inside it. Variables already present in the
/// process environment are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spolink/.env`
/// - macOS: `~/Library/Application Support/spolink/.env`
/// - Windows: `%LOCALAPPDATA%/spolink/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists
/// but cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spolink/.env");
    path
}

/// Returns the catalog endpoint queried for track and playlist data.
///
/// Reads `SPOLINK_CATALOG_URL`, defaulting to [`DEFAULT_CATALOG_URL`].
pub fn catalog_url() -> String {
    env::var("SPOLINK_CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string())
}

/// Returns the bearer token sent to the catalog, if one is configured.
///
/// spolink never obtains tokens itself; `SPOLINK_CATALOG_TOKEN` must hold an
/// already valid token.
pub fn catalog_token() -> Option<String> {
    non_empty_var("SPOLINK_CATALOG_TOKEN")
}

pub fn search_query_hash() -> Option<String> {
    non_empty_var("SPOLINK_SEARCH_HASH")
}

pub fn playlist_query_hash() -> Option<String> {
    non_empty_var("SPOLINK_PLAYLIST_HASH")
}

/// Returns the maximum number of tracks read from a playlist.
///
/// Reads `SPOLINK_PLAYLIST_LIMIT`; unset or unparsable values fall back to
/// [`DEFAULT_PLAYLIST_LIMIT`].
pub fn playlist_limit() -> usize {
    env::var("SPOLINK_PLAYLIST_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PLAYLIST_LIMIT)
}

/// Returns the address the HTTP API binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to [`DEFAULT_SERVER_ADDRESS`].
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
