use medscore_core::models::advice::AiAdvice;
use medscore_core::models::response::SurveyResponse;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Scoring actions that leave an audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SubmitResponse,
    CreateAdvice,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::SubmitResponse => "survey_response.submit",
            AuditAction::CreateAdvice => "ai_advice.create",
        }
    }

    /// Kind of record the action writes.
    pub fn resource_type(self) -> &'static str {
        match self {
            AuditAction::SubmitResponse => "survey_response",
            AuditAction::CreateAdvice => "ai_advice",
        }
    }
}

/// One stored scoring result, attributed to whoever caused it.
///
/// Events go to the log pipeline through `tracing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_id: Uuid,
    pub patient_id: Uuid,
    pub actor: String,
    pub instrument: String,
    pub category: String,
}

impl AuditEvent {
    /// A scored survey response was stored.
    pub fn response_submitted(response: &SurveyResponse, instrument: &str, actor: &str) -> Self {
        Self {
            action: AuditAction::SubmitResponse,
            resource_id: response.id,
            patient_id: response.patient_id,
            actor: actor.to_string(),
            instrument: instrument.to_string(),
            category: response.category.clone().unwrap_or_default(),
        }
    }

    /// Advice was stored for a patient.
    pub fn advice_created(advice: &AiAdvice, user_id: Uuid) -> Self {
        Self {
            action: AuditAction::CreateAdvice,
            resource_id: advice.id,
            patient_id: advice.patient_id,
            actor: user_id.to_string(),
            instrument: advice.survey_code.clone(),
            category: advice.category.clone(),
        }
    }

    pub fn emit(&self) {
        info!(
            audit.action = self.action.as_str(),
            audit.resource_type = self.action.resource_type(),
            audit.resource_id = %self.resource_id,
            audit.patient_id = %self.patient_id,
            audit.actor = %self.actor,
            audit.instrument = %self.instrument,
            audit.category = %self.category,
            "audit event"
        );
    }
}
