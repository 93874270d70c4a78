//! Profile analysis — orchestrates the full analyzer pipeline.
//!
//! Flow: classify_link → build prompt → LLM call → parse_feedback →
//!       extract_score → persist → return outcome.
//!
//! Every step runs once and in order. Any failure is terminal for the request.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::classifier::{classify_link, ProfileType};
use crate::analysis::parser::{parse_feedback, StructuredFeedback};
use crate::analysis::prompts::build_messages;
use crate::analysis::scoring::extract_score;
use crate::analysis::store::AnalysisStore;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::analysis::NewAnalysis;

/// Token ceiling for an analysis reply. Mentor chat gets more.
pub const ANALYSIS_MAX_TOKENS: u32 = 2000;

/// Result of one analysis, in the shape the analyzer endpoint returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub score: u8,
    pub feedback: StructuredFeedback,
    pub raw_analysis: String,
}

/// Runs the analyzer pipeline for `link` and persists the result.
pub async fn analyze_profile(
    llm: &LlmClient,
    store: &dyn AnalysisStore,
    link: &str,
) -> Result<AnalysisOutcome, AppError> {
    // Step 1: Classify
    let profile_type = classify_link(link);
    info!("Analyzing {} profile: {}", profile_type.as_str(), link);

    // Step 2: Prompt + LLM call
    let messages = build_messages(profile_type, link);
    let raw_analysis = llm.complete(&messages, ANALYSIS_MAX_TOKENS).await?;

    // Step 3: Parse + score
    let feedback = parse_feedback(&raw_analysis);
    let (score, source) = extract_score(&raw_analysis);
    info!("Analysis scored {}/100 ({:?})", score, source);

    // Step 4: Persist
    let record = NewAnalysis {
        link: link.to_string(),
        profile_type,
        score,
        feedback,
    };
    let id = store.insert(&record).await?;
    info!("Analysis {} saved", id);

    Ok(AnalysisOutcome {
        id,
        profile_type,
        score,
        feedback: record.feedback,
        raw_analysis,
    })
}
