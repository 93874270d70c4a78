use std::sync::Arc;

use crate::analysis::store::AnalysisStore;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// `None` when `DATABASE_URL` is unset; analyzer requests then fail with a config error.
    pub store: Option<Arc<dyn AnalysisStore>>,
}
