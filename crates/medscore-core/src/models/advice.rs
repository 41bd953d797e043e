use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

/// Stored patient-facing advice generated from a scored questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AiAdvice {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub survey_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_text: String,
    pub score: Option<f64>,
    #[serde(default)]
    pub category: String,
    /// `{score, category, breakdown}` at the time of generation.
    #[serde(default)]
    pub details: Value,
    pub advice_text: String,
    pub created_at: jiff::Timestamp,
}

/// What the caller shows to the patient. The disclaimer is carried
/// separately from the advice text and rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdviceResult {
    pub id: Uuid,
    pub survey_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_text: String,
    pub advice_text: String,
    pub disclaimer: String,
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    pub created_at: jiff::Timestamp,
}
