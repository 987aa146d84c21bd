mod config;
mod errors;
mod forms;
mod generation;
mod letter;
mod models;
mod routes;
mod session;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::analyzer::FixedProfileAnalyzer;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;
use crate::templates::html::ResumeRenderer;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeAI API v{}", env!("CARGO_PKG_VERSION"));

    // Compile resume layouts once; a broken template is a startup failure
    let renderer = Arc::new(ResumeRenderer::new()?);
    info!("Resume templates compiled");

    info!(
        "Simulated generation delay: {}ms",
        config.generation_delay.as_millis()
    );

    let sessions = SessionStore::new(config.session_ttl);
    sessions.spawn_sweeper(SESSION_SWEEP_INTERVAL);
    info!("Session idle TTL: {}s", config.session_ttl.as_secs());

    let state = AppState {
        config: config.clone(),
        sessions,
        renderer,
        analyzer: Arc::new(FixedProfileAnalyzer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
