mod config;
mod errors;
mod llm_client;
mod report;
mod resources;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::report::generator::{LlmReportGenerator, ReportGenerator, StaticReportGenerator};
use crate::resources::ResourceFinder;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first. All credentials are optional — missing ones
    // degrade their feature instead of failing startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Disha API v{}", env!("CARGO_PKG_VERSION"));

    // Report backend: LLM-backed when a Gemini key is configured,
    // deterministic static report otherwise.
    let report_generator: Arc<dyn ReportGenerator> = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM report generator initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmReportGenerator::new(LlmClient::new(key.clone())))
        }
        None => {
            info!("GEMINI_API_KEY not set — serving deterministic fallback reports");
            Arc::new(StaticReportGenerator)
        }
    };

    // Resource aggregation core
    let resources = ResourceFinder::new(&config);
    if config.youtube_api_key.is_none() {
        info!("YOUTUBE_API_KEY not set — video results disabled");
    }
    if config.google_api_key.is_none() || config.google_cse_id.is_none() {
        info!("Google CSE not configured — tier-2 course search disabled");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        report_generator,
        resources,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
