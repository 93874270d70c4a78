//! Axum route handlers for the Analyzer API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::analyzer::{analyze_profile, AnalysisOutcome};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::state::AppState;

/// Pulls a non-blank string `link` out of an arbitrary JSON body.
fn require_link(body: &Value) -> Result<&str, AppError> {
    body.get("link")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .ok_or_else(|| AppError::Validation("Link is required".to_string()))
}

/// POST /api/v1/analyze-profile
///
/// Classifies the link, asks the AI gateway for an analysis, parses and scores
/// the reply, and stores the record. The body is read as raw JSON so a missing or
/// non-string `link` maps to 400 rather than the extractor's 422.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let Json(body) =
        payload.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;
    let link = require_link(&body)?;

    let store = state
        .store
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is not configured".to_string()))?;

    let outcome = analyze_profile(&state.llm, store, link).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    let store = state
        .store
        .as_deref()
        .ok_or_else(|| AppError::Config("DATABASE_URL is not configured".to_string()))?;

    store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}
