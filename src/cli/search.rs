use tabled::Table;

use crate::{
    error,
    spotify::{LinkResolver, PathfinderClient},
    success, utils, warning,
};

pub async fn search(query: String, limit: usize, as_json: bool) {
    let resolver = LinkResolver::new(PathfinderClient::from_env());

    let pb = utils::spinner(format!("Searching for '{}'...", query));
    let outcome = resolver.search_tracks(&query, limit).await;
    pb.finish_and_clear();

    let tracks = match outcome {
        Ok(tracks) => tracks,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    if as_json {
        match serde_json::to_string_pretty(&tracks) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize tracks. Err: {}", e),
        }
        return;
    }

    if tracks.is_empty() {
        warning!("No tracks found for '{}'", query);
        return;
    }

    success!("Found {} tracks", tracks.len());
    println!("{}", Table::new(utils::track_rows(&tracks)));
}
