use signal_gateway::api::{run_server, AppState};
use signal_gateway::{AppConfig, LLMClient, SignalService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Signal Gateway...");

    // Load Configuration
    let config = AppConfig::load()?;
    info!("Loaded Configuration: {:?}", config);

    if config.llm.key_configured() {
        info!("OpenAI API key configured");
    } else {
        warn!("⚠️ OPENAI_API_KEY not set - every /signal call will answer HOLD (API error)");
    }

    if let Some(url) = &config.llm.base_url {
        info!("Using Custom OpenAI Base URL: {}", url);
    }
    info!("Using LLM Model: {}", config.llm.model);

    let llm_client = LLMClient::new(&config.llm);

    let app_state = Arc::new(AppState {
        signals: SignalService::new(Arc::new(llm_client)),
        config,
    });

    info!("Initializing API Server...");
    run_server(app_state).await?;

    Ok(())
}
