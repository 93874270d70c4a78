mod analysis;
mod config;
mod db;
mod errors;
mod llm_client;
mod mentor;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::store::{AnalysisStore, PgAnalysisStore};
use crate::config::Config;
use crate::db::create_pool;
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

    info!("Starting CareerScope API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize persistence (optional: analyzer requests fail without it)
    let store: Option<Arc<dyn AnalysisStore>> = match config.database_url.as_deref() {
        Some(url) => {
            let store: Arc<dyn AnalysisStore> = Arc::new(PgAnalysisStore::new(create_pool(url)?));
            Some(store)
        }
        None => {
            warn!("DATABASE_URL is not set; analyzer requests will fail");
            None
        }
    };

    // Initialize LLM client
    if config.ai_gateway_api_key.is_none() {
        warn!("AI_GATEWAY_API_KEY is not set; AI requests will fail");
    }
    let llm = LlmClient::new(
        config.ai_gateway_url.clone(),
        config.ai_gateway_api_key.clone(),
    );
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.ai_gateway_url
    );

    let state = AppState { llm, store };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
