pub mod health;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::analysis::handlers as analysis;
use crate::mentor::handlers as mentor;
use crate::state::AppState;

/// Answers any OPTIONS request that is not a full CORS preflight with an empty 200.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Wildcard origin; the browser client sends the hosting platform's auth headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analyzer API
        .route(
            "/api/v1/analyze-profile",
            post(analysis::handle_analyze_profile).options(preflight),
        )
        .route("/api/v1/analyses/:id", get(analysis::handle_get_analysis))
        // Mentor API
        .route(
            "/api/v1/mentor-chat",
            post(mentor::handle_mentor_chat).options(preflight),
        )
        .route("/api/v1/mentor/tones", get(mentor::handle_list_tones))
        .layer(cors_layer())
        .with_state(state)
}
