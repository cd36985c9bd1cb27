use std::sync::Arc;

use crate::{
    config, error,
    server::start_api_server,
    spotify::{LinkResolver, PathfinderClient},
};

pub async fn serve() {
    let resolver = Arc::new(
        LinkResolver::new(PathfinderClient::from_env())
            .with_playlist_limit(config::playlist_limit()),
    );

    if let Err(e) = start_api_server(resolver).await {
        error!("API server stopped. Err: {}", e);
    }
}
