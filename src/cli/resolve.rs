use tabled::Table;

use crate::{
    config, error, info,
    spotify::{LinkResolver, PathfinderClient},
    success,
    types::ResolveResult,
    utils,
};

pub async fn resolve(url: String, as_json: bool) {
    let resolver =
        LinkResolver::new(PathfinderClient::from_env()).with_playlist_limit(config::playlist_limit());

    let pb = utils::spinner("Resolving Spotify link...");
    let outcome = resolver.resolve(&url).await;
    pb.finish_and_clear();

    let result = match outcome {
        Ok(result) => result,
        Err(e) => error!("Nothing resolved for {}. Err: {}", url, e),
    };

    if as_json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize result. Err: {}", e),
        }
        return;
    }

    match &result {
        ResolveResult::Track { id, .. } => success!("Resolved track {}", id),
        ResolveResult::Playlist { id, count, .. } => {
            success!("Resolved playlist {} with {} tracks", id, count)
        }
        ResolveResult::Album { id, note, .. } => {
            info!("Album {}: track listing {}", id, note);
            return;
        }
    }

    if !result.tracks().is_empty() {
        println!("{}", Table::new(utils::track_rows(result.tracks())));
    }
}
