use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, config, info};

pub fn router(resolver: api::SharedResolver) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/resolve", get(api::resolve))
        .route("/search", get(api::search))
        .layer(Extension(resolver))
}

pub async fn start_api_server(resolver: api::SharedResolver) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(resolver)).await?;
    Ok(())
}
