use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::classifier::ProfileType;
use crate::analysis::parser::StructuredFeedback;

/// A stored analysis, as read back from `profile_analyses`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub link: String,
    #[serde(rename = "type")]
    pub profile_type: String,
    pub score: i32,
    pub feedback: Value,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// The write side of an analysis: everything except the store-generated fields.
/// `user_id` is always written as NULL.
#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub link: String,
    pub profile_type: ProfileType,
    pub score: u8,
    pub feedback: StructuredFeedback,
}
