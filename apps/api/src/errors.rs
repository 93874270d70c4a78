use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// User-facing text for an upstream 429. Clients match on it, keep it stable.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// User-facing text for an upstream 402.
pub const CREDITS_EXHAUSTED_MESSAGE: &str =
    "AI credits exhausted. Please add credits to continue.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{ "error": "...", "details"?: "..." }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    #[error("AI gateway credits exhausted")]
    CreditsExhausted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited => AppError::RateLimited,
            LlmError::CreditsExhausted => AppError::CreditsExhausted,
            LlmError::MissingApiKey => {
                AppError::Config("AI_GATEWAY_API_KEY is not configured".to_string())
            }
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::CreditsExhausted => StatusCode::PAYMENT_REQUIRED,
            AppError::Config(_)
            | AppError::Database(_)
            | AppError::Llm(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => (msg.clone(), None),
            AppError::RateLimited => (RATE_LIMIT_MESSAGE.to_string(), None),
            AppError::CreditsExhausted => (CREDITS_EXHAUSTED_MESSAGE.to_string(), None),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (msg.clone(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                ("Failed to save analysis".to_string(), Some(e.to_string()))
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                ("AI gateway error".to_string(), Some(msg.clone()))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (e.to_string(), Some(format!("{e:?}")))
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
