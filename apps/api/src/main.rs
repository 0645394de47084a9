mod config;
mod db;
mod errors;
mod extraction;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod normalize;
mod research;
mod resume;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::OpenAiClient;
use crate::normalize::AtPhraseExtractor;
use crate::research::CompanyResearcher;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgCandidateStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hiring API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed candidate store
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgCandidateStore::new(db));

    // Initialize LLM client
    let llm = OpenAiClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.openai_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    // Company research is optional
    let researcher = CompanyResearcher::new(config.serper_api_key.clone())
        .context("Failed to build search HTTP client")?;
    info!(
        "Company research {}",
        if researcher.is_enabled() { "enabled" } else { "disabled" }
    );

    let state = AppState {
        llm: Arc::new(llm),
        store,
        company_extractor: Arc::new(AtPhraseExtractor),
        researcher,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
