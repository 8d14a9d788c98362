//! Discussion Feed
//!
//! Serves a page whose discussion container is filled with cards rendered
//! from an upstream JSON endpoint. Every page load and every resize is one
//! render cycle: fetch, transform, replace.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::HttpDiscussionSource;
use app::FeedService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes without the rate limiter, which needs peer addresses
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(feed::SCRIPT_PATH, get(handlers::feed_script))
        .route("/feed", get(handlers::get_feed))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,discussion_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting discussion feed...");

    let config = Config::from_env();
    tracing::info!(
        upstream = %config.discussions_url,
        breakpoint_px = config.mobile_breakpoint_px,
        "Configuration loaded"
    );

    let source = Arc::new(
        HttpDiscussionSource::new(config.discussions_url.clone(), config.upstream_timeout)
            .context("Failed to build HTTP client")?,
    );
    let feed_service = Arc::new(FeedService::new(source, config.responsive_limit()));

    let state = AppState { feed_service };

    // Rate limiting config: 2 req/sec sustained, burst of 10
    // Page load costs three requests (page, script, feed)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(10)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
