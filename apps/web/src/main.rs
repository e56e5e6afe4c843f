mod config;
mod errors;
mod form;
mod generation;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Shell v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (credentials come from the user per submission)
    let llm = LlmClient::new(config.openai_api_url.clone(), config.llm_timeout)?;
    info!(
        "LLM client initialized (model: {}, endpoint: {}, timeout: {}s)",
        llm_client::MODEL,
        llm.api_url(),
        config.llm_timeout.as_secs()
    );
    if config.require_qualifications {
        info!("Qualifications are required for every submission");
    }

    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Same-origin page; no CORS layer.
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
