//! # CLI Module
//!
//! User-facing commands of the `spolink` binary. Each command builds a
//! [`LinkResolver`](crate::spotify::LinkResolver) from the loaded
//! configuration, runs one operation and presents the outcome.
//!
//! ## Commands
//!
//! - [`resolve`] - Resolves a track, playlist or album link and prints the
//!   tracks as a table (or as JSON with `--json`).
//! - [`search`] - Free-text track search.
//! - [`serve`] - Runs the HTTP API from [`crate::server`].
//!
//! ## Output
//!
//! Status lines use the crate's `info!`, `success!` and `warning!` macros.
//! Anything that leaves the command without a result goes through `error!`,
//! which prints the reason and exits with status 1. Network calls show a
//! spinner while they are in flight.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spolink resolve https://open.spotify.com/playlist/37i9dQZF1FoyQGyinuuvRu
//! spolink resolve https://open.spotify.com/track/7qiZfU4dY1lsylvNFoYL2E --json
//! spolink search "Christian pop" --limit 5
//! spolink serve
//! ```

mod resolve;
mod search;
mod serve;

pub use resolve::resolve;
pub use search::search;
pub use serve::serve;
