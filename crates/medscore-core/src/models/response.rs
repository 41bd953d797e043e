use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

/// Lifecycle of a submission: draft → submitted → reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseStatus {
    Draft,
    #[default]
    Submitted,
    Reviewed,
}

/// A patient's submission against one template, with its computed score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub template_id: Uuid,
    pub patient_id: Uuid,
    /// The raw answer map, exactly as submitted.
    pub responses: Value,
    pub calculated_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub score_breakdown: Value,
    #[serde(default)]
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    pub status: ResponseStatus,
    pub submitted_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl SurveyResponse {
    /// Overwrite the computed fields in place. This is the only mutation a
    /// stored response ever sees.
    pub fn apply(&mut self, update: CalculatedUpdate) {
        self.calculated_score = Some(update.score);
        self.category = Some(update.category);
        self.interpretation = update.interpretation;
        self.ai_summary = update.narrative;
        self.score_breakdown = update.breakdown;
        self.status = update.status;
    }
}

/// Request body for a new submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyResponseCreate {
    pub template_id: Uuid,
    pub patient_id: Uuid,
    #[ts(type = "Record<string, unknown>")]
    pub responses: serde_json::Map<String, Value>,
}

/// Fields rewritten by the scoring pipeline after a response exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedUpdate {
    pub score: f64,
    pub category: String,
    pub interpretation: String,
    pub narrative: Option<String>,
    pub breakdown: Value,
    pub status: ResponseStatus,
}
