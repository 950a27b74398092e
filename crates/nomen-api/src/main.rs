//! Nomen API Server
//!
//! Serves surname extraction over HTTP. The NER pipeline is loaded once at
//! startup and shared read-only by every request.
//!
//! Author: hephaex@gmail.com

use nomen_api::{create_router, state::AppState};
use nomen_core::config::{AppConfig, LoggingConfig};
use nomen_extractor::{load_ner_pipeline, InformationExtractor};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::var("NOMEN_CONFIG") {
        Ok(path) => AppConfig::from_file(path)?.with_env_override()?,
        Err(_) => AppConfig::from_env()?,
    };

    // Initialize tracing
    init_tracing(&config.logging);

    // Load the NER pipeline once for the whole process
    let pipeline = load_ner_pipeline(&config.ner)?;
    let extractor = InformationExtractor::new(pipeline);

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state
    let state = Arc::new(AppState::new(config, extractor));

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Nomen API Server starting on http://{}", addr);
    tracing::info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "nomen_api={level},nomen_extractor={level},tower_http={level}",
            level = logging.level
        )
        .into()
    });

    if logging.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
