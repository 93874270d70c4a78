use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Whether analyzer requests can persist (`DATABASE_URL` set).
    pub database: bool,
    /// Whether AI requests can be sent (`AI_GATEWAY_API_KEY` set).
    pub ai_gateway: bool,
}

/// GET /health
/// Always 200; the flags show which credentials are missing.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: "careerscope-api",
        database: state.store.is_some(),
        ai_gateway: state.llm.has_api_key(),
    })
}
