//! Store traits consumed by the service layer.
//!
//! Absence is `Ok(None)`, never an error, so callers can tell "not there"
//! apart from "could not look".

use std::future::Future;

use medscore_core::models::advice::AiAdvice;
use medscore_core::models::patient::Patient;
use medscore_core::models::response::{CalculatedUpdate, SurveyResponse};
use medscore_core::models::template::SurveyTemplate;
use uuid::Uuid;

use crate::error::StorageError;

pub trait TemplateStore: Send + Sync {
    fn get_template_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<SurveyTemplate>, StorageError>> + Send;

    fn get_template_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<SurveyTemplate>, StorageError>> + Send;

    /// Active templates ordered by name.
    fn list_active_templates(
        &self,
    ) -> impl Future<Output = Result<Vec<SurveyTemplate>, StorageError>> + Send;

    /// Insert or replace a template, keyed by its code.
    fn put_template(
        &self,
        template: &SurveyTemplate,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

pub trait ResponseStore: Send + Sync {
    fn create_response(
        &self,
        response: &SurveyResponse,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn get_response(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<SurveyResponse>, StorageError>> + Send;

    /// Rewrite the computed fields of an existing response and return it.
    /// A missing response is [`StorageError::NotFound`].
    fn update_calculated(
        &self,
        id: Uuid,
        update: CalculatedUpdate,
    ) -> impl Future<Output = Result<SurveyResponse, StorageError>> + Send;
}

pub trait PatientStore: Send + Sync {
    fn get_patient_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Patient>, StorageError>> + Send;

    /// Create the record for `patient.user_id`. If one already exists, it is
    /// returned unchanged, so concurrent first requests converge on a single
    /// record.
    fn create_patient(
        &self,
        patient: &Patient,
    ) -> impl Future<Output = Result<Patient, StorageError>> + Send;
}

pub trait AdviceStore: Send + Sync {
    fn create_advice(
        &self,
        advice: &AiAdvice,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// A page of a patient's advice, newest first.
    fn list_advice_by_patient(
        &self,
        patient_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<Vec<AiAdvice>, StorageError>> + Send;
}

/// Newest first, ties broken by id so pages are stable.
pub(crate) fn newest_first(advice: &mut [AiAdvice]) {
    advice.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}

/// Active templates by name, then code.
pub(crate) fn active_by_name(mut templates: Vec<SurveyTemplate>) -> Vec<SurveyTemplate> {
    templates.retain(|t| t.is_active);
    templates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    templates
}
