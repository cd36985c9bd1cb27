//! spolink library
//!
//! Resolves Spotify track, playlist and album links into normalized track
//! metadata by querying an external catalog. The library is usable on its own
//! and also backs the `spolink` command-line tool and its HTTP API.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for resolving links and searching tracks
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `server` - HTTP server wiring for the API endpoints
//! - `spotify` - Link extraction, catalog client and resolver
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spolink::spotify::{LinkResolver, PathfinderClient};
//!
//! #[tokio::main]
//! async fn main() -> spolink::Res<()> {
//!     spolink::config::load_env().await?;
//!     let resolver = LinkResolver::new(PathfinderClient::from_env());
//!     let result = resolver.resolve("https://open.spotify.com/track/7qiZfU4dY1lsylvNFoYL2E").await?;
//!     println!("{:?}", result);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result used where failures are only reported, not matched on.
///
/// Structured failures of the resolver itself use
/// [`spotify::ResolveError`]; this alias covers the surrounding plumbing
/// (server startup, configuration) whose errors are simply displayed.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a green `✓` line for a completed operation.
///
/// # Example
///
/// ```
/// success!("Resolved playlist {} with {} tracks", id, count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and terminates the process with exit code 1.
///
/// Only the binary's command layer uses this; library code reports failures
/// through [`warning!`] and returns them as values.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for a recoverable problem.
///
/// The resolver uses this to record every lookup that produced nothing,
/// together with the operation and the identifier or query involved.
///
/// # Example
///
/// ```
/// warning!("Error fetching playlist {}: {}", playlist_id, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
