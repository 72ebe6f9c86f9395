use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::constants::server::ROOT_MESSAGE;
use crate::error::GatewayResult;
use crate::signal::{Decision, MarketState, Recommendation, SignalService};

pub struct AppState {
    pub signals: SignalService,
    pub config: AppConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub openai_key_set: bool,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/signal", post(get_signal))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> GatewayResult<()> {
    let addr = state.config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("API Server listening on {}", addr);
    serve(listener, state).await
}

/// Serve on an already-bound listener.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> GatewayResult<()> {
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn root() -> Json<Value> {
    Json(json!({"message": ROOT_MESSAGE, "status": "active"}))
}

async fn get_signal(
    State(state): State<Arc<AppState>>,
    Json(market): Json<MarketState>,
) -> Json<Decision> {
    // Own task so a panic while handling becomes a HOLD instead of a dropped connection.
    let task_state = state.clone();
    let task_market = market.clone();
    let handle = tokio::spawn(async move { task_state.signals.get_signal(&task_market).await });

    match handle.await {
        Ok(decision) => Json(decision),
        Err(e) => {
            let message = if e.is_panic() {
                panic_message(e.into_panic())
            } else {
                e.to_string()
            };
            error!("❌ [SIGNAL] Server error for {}: {}", market.symbol, message);
            Json(Recommendation::server_error(&message).stamp(&market))
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        openai_key_set: state.config.llm.key_configured(),
    })
}
