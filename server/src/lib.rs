//! # HackFlow Dashboard Backend
//!
//! Read-only REST backend for the hackathon dashboard, plus the static
//! single-page UI. All data lives in Redis as JSON documents (see
//! [`database`]); the only derived endpoint is `/api/analytics` (see
//! [`analytics`]). Writes happen exclusively through the `seed` companion.
//!
//! # Endpoints
//!
//! - `/` and `/static/*`: dashboard page and assets
//! - `/api/{collection}`: every document of a streamed collection
//! - `/api/public_stats`: the `public_stats/main` singleton, else 404 `{}`
//! - `/api/hackathon`: the `hackathon/info` singleton, else 404 `{}`
//! - `/api/analytics`: summary aggregated over four collections
//!
//! # Setup
//!
//! Seed the store, then run the server.
//! ```sh
//! cargo run -p seed
//! RUST_LOG=info cargo run -p hackflow
//! ```

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod analytics;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;

use routes::{analytics_handler, collection_handler, hackathon_handler, public_stats_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let static_dir = &state.config.static_dir;

    let app = Router::new()
        .route("/api/public_stats", get(public_stats_handler))
        .route("/api/hackathon", get(hackathon_handler))
        .route("/api/analytics", get(analytics_handler))
        .route("/api/{collection}", get(collection_handler))
        .route_service("/", ServeFile::new(format!("{static_dir}/index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
