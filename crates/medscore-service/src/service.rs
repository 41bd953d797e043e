use medscore_core::models::advice::{AdviceResult, AiAdvice};
use medscore_core::models::answer::Answers;
use medscore_core::models::patient::Patient;
use medscore_core::models::response::{
    CalculatedUpdate, ResponseStatus, SurveyResponse, SurveyResponseCreate,
};
use medscore_core::models::template::SurveyTemplate;
use medscore_instruments::calculate;
use medscore_instruments::scoring::{Breakdown, ScoreResult};
use medscore_narrative::advice::{fallback_advice, interpretation_prompt, patient_advice_prompt};
use medscore_narrative::generator::{narrate, TextGenerator};
use medscore_narrative::normalize::{normalize_advice_text, PATIENT_ADVICE_DISCLAIMER};
use medscore_narrative::prompts::PromptSet;
use medscore_storage::store::{AdviceStore, PatientStore, ResponseStore, TemplateStore};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::audit::AuditEvent;
use crate::error::ServiceError;

/// What callers get back for a scored answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOutcome {
    pub score: f64,
    pub category: String,
    /// `"<CODE> (<category>)"`.
    pub interpretation: String,
    #[ts(type = "Record<string, unknown>")]
    pub breakdown: Breakdown,
}

impl ScoreOutcome {
    pub fn new(code: &str, result: ScoreResult) -> Self {
        Self {
            interpretation: result.interpretation(code),
            score: result.score,
            category: result.category,
            breakdown: result.breakdown,
        }
    }
}

/// Score `answers` against an already loaded template.
pub fn evaluate(template: &SurveyTemplate, answers: &Answers) -> Result<ScoreOutcome, ServiceError> {
    let result = calculate(template, answers)?;
    Ok(ScoreOutcome::new(&template.code, result))
}

pub struct SurveyService<S, G> {
    store: S,
    generator: Option<G>,
    prompts: PromptSet,
}

impl<S, G> SurveyService<S, G>
where
    S: TemplateStore + ResponseStore + PatientStore + AdviceStore,
    G: TextGenerator,
{
    pub fn new(store: S, generator: Option<G>, prompts: PromptSet) -> Self {
        Self {
            store,
            generator,
            prompts,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn list_templates(&self) -> Result<Vec<SurveyTemplate>, ServiceError> {
        Ok(self.store.list_active_templates().await?)
    }

    pub async fn template_by_code(&self, code: &str) -> Result<SurveyTemplate, ServiceError> {
        self.store
            .get_template_by_code(code)
            .await?
            .ok_or_else(|| ServiceError::TemplateNotFound(code.to_string()))
    }

    /// Score an answer set against the template registered under `code`.
    pub async fn calculate(&self, code: &str, answers: &Answers) -> Result<ScoreOutcome, ServiceError> {
        let template = self.template_by_code(code).await?;
        evaluate(&template, answers)
    }

    /// Score and store a submission.
    ///
    /// The response is written with its score first. A clinician-facing
    /// narrative, when a generator is configured, is added afterwards; if
    /// that fails the stored response is returned as created.
    pub async fn submit_response(
        &self,
        user_sub: &str,
        submission: SurveyResponseCreate,
    ) -> Result<SurveyResponse, ServiceError> {
        let template = self
            .store
            .get_template_by_id(submission.template_id)
            .await?
            .ok_or_else(|| ServiceError::TemplateNotFound(submission.template_id.to_string()))?;

        let answers = Answers::from_json_map(&submission.responses);
        let result = calculate(&template, &answers)?;
        let interpretation = result.interpretation(&template.code);

        let now = jiff::Timestamp::now();
        let response = SurveyResponse {
            id: Uuid::new_v4(),
            template_id: template.id,
            patient_id: submission.patient_id,
            responses: Value::Object(submission.responses),
            calculated_score: Some(result.score),
            category: Some(result.category.clone()),
            score_breakdown: result.breakdown.to_value(),
            interpretation: interpretation.clone(),
            ai_summary: None,
            status: ResponseStatus::Submitted,
            submitted_at: now,
            reviewed_by: None,
            reviewed_at: None,
            notes: None,
            created_at: now,
        };
        self.store.create_response(&response).await?;

        info!(
            response_id = %response.id,
            code = %template.code,
            score = result.score,
            category = %result.category,
            "survey response scored"
        );
        AuditEvent::response_submitted(&response, &template.code, user_sub).emit();

        let prompt = interpretation_prompt(&template.name, &result);
        let Some(summary) = narrate(
            self.generator.as_ref(),
            &self.prompts.survey_interpretation,
            &prompt,
        )
        .await
        else {
            return Ok(response);
        };

        let update = CalculatedUpdate {
            score: result.score,
            category: result.category,
            interpretation,
            narrative: Some(summary),
            breakdown: response.score_breakdown.clone(),
            status: ResponseStatus::Submitted,
        };
        match self.store.update_calculated(response.id, update).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                warn!(response_id = %response.id, error = %e, "failed to store narrative");
                Ok(response)
            }
        }
    }

    /// Score an answer set for a patient and store advice about the result.
    ///
    /// The patient record is created on first use. Generated advice replaces
    /// the templated fallback only when it is non-empty after disclaimer
    /// removal.
    pub async fn create_advice(
        &self,
        user_id: Uuid,
        survey_code: &str,
        answers: &Answers,
        user_text: &str,
    ) -> Result<AdviceResult, ServiceError> {
        if user_id.is_nil() {
            return Err(ServiceError::Validation("user_id is required".to_string()));
        }
        let survey_code = survey_code.trim();
        if survey_code.is_empty() {
            return Err(ServiceError::Validation("survey_code is required".to_string()));
        }

        let template = self.template_by_code(survey_code).await?;
        let result = calculate(&template, answers)?;
        let patient = self.resolve_patient(user_id).await?;

        let prompt = patient_advice_prompt(&template.name, &template.code, &result, user_text);
        let advice_text = match narrate(self.generator.as_ref(), &self.prompts.patient_advice, &prompt).await {
            Some(text) => text,
            None => {
                info!(code = %template.code, "using fallback advice");
                fallback_advice(&template.name, &result)
            }
        };

        let advice = AiAdvice {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            survey_code: survey_code.to_string(),
            user_text: user_text.trim().to_string(),
            score: Some(result.score),
            category: result.category.clone(),
            details: json!({
                "score": result.score,
                "category": result.category,
                "breakdown": result.breakdown.to_value(),
            }),
            advice_text: normalize_advice_text(&advice_text),
            created_at: jiff::Timestamp::now(),
        };
        self.store.create_advice(&advice).await?;

        AuditEvent::advice_created(&advice, user_id).emit();

        Ok(to_result(advice))
    }

    /// A page of the user's advice, newest first. Empty when the user has no
    /// patient record yet.
    pub async fn list_advice(
        &self,
        user_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<AdviceResult>, ServiceError> {
        if user_id.is_nil() {
            return Err(ServiceError::Validation("user_id is required".to_string()));
        }
        let Some(patient) = self.store.get_patient_by_user_id(user_id).await? else {
            return Ok(Vec::new());
        };

        let advice = self
            .store
            .list_advice_by_patient(patient.id, limit, offset)
            .await?;
        Ok(advice.into_iter().map(to_result).collect())
    }

    async fn resolve_patient(&self, user_id: Uuid) -> Result<Patient, ServiceError> {
        if let Some(patient) = self.store.get_patient_by_user_id(user_id).await? {
            return Ok(patient);
        }

        let patient = self.store.create_patient(&Patient::provision(user_id)).await?;
        info!(user_id = %user_id, patient_id = %patient.id, "provisioned patient record");
        Ok(patient)
    }
}

/// Stored advice as shown to the patient. Text is normalized again on the
/// way out so records written before a filter change read clean.
fn to_result(advice: AiAdvice) -> AdviceResult {
    AdviceResult {
        id: advice.id,
        survey_code: advice.survey_code,
        user_text: advice.user_text,
        advice_text: normalize_advice_text(&advice.advice_text),
        disclaimer: PATIENT_ADVICE_DISCLAIMER.to_string(),
        score: advice.score,
        category: advice.category,
        created_at: advice.created_at,
    }
}
