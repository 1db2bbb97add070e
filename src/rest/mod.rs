// rest/mod.rs — Public REST API server.
//
// Axum HTTP server bridging the four public endpoints to the insight
// provider. CORS is permissive: the original consumer is a browser
// dashboard served from a different origin.
//
// Endpoints:
//   POST /business-data
//   GET  /regenerate-headline
//   GET  /health
//   GET  /

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: AppContext) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("insight API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(routes::meta::service_info))
        .route("/business-data", post(routes::insights::business_data))
        .route(
            "/regenerate-headline",
            get(routes::insights::regenerate_headline),
        )
        .route("/health", get(routes::health::health))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
