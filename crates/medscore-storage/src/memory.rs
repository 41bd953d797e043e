//! In-process store for tests and local runs.

use std::collections::{BTreeMap, HashMap};

use medscore_core::models::advice::AiAdvice;
use medscore_core::models::patient::Patient;
use medscore_core::models::response::{CalculatedUpdate, SurveyResponse};
use medscore_core::models::template::SurveyTemplate;
use medscore_core::s3_keys;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{
    active_by_name, newest_first, AdviceStore, PatientStore, ResponseStore, TemplateStore,
};

#[derive(Debug, Default)]
struct Records {
    templates: BTreeMap<String, SurveyTemplate>,
    responses: HashMap<Uuid, SurveyResponse>,
    /// Keyed by user id.
    patients: HashMap<Uuid, Patient>,
    advice: Vec<AiAdvice>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `templates`.
    pub fn with_templates(templates: impl IntoIterator<Item = SurveyTemplate>) -> Self {
        let records = Records {
            templates: templates
                .into_iter()
                .map(|t| (t.code.clone(), t))
                .collect(),
            ..Records::default()
        };
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn response_count(&self) -> usize {
        self.records.read().await.responses.len()
    }

    pub async fn advice_count(&self) -> usize {
        self.records.read().await.advice.len()
    }
}

impl TemplateStore for MemoryStore {
    async fn get_template_by_code(&self, code: &str) -> Result<Option<SurveyTemplate>, StorageError> {
        Ok(self.records.read().await.templates.get(code).cloned())
    }

    async fn get_template_by_id(&self, id: Uuid) -> Result<Option<SurveyTemplate>, StorageError> {
        let records = self.records.read().await;
        Ok(records.templates.values().find(|t| t.id == id).cloned())
    }

    async fn list_active_templates(&self) -> Result<Vec<SurveyTemplate>, StorageError> {
        let templates = self.records.read().await.templates.values().cloned().collect();
        Ok(active_by_name(templates))
    }

    async fn put_template(&self, template: &SurveyTemplate) -> Result<(), StorageError> {
        self.records
            .write()
            .await
            .templates
            .insert(template.code.clone(), template.clone());
        Ok(())
    }
}

impl ResponseStore for MemoryStore {
    async fn create_response(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.responses.contains_key(&response.id) {
            return Err(StorageError::PreconditionFailed {
                key: s3_keys::response(response.id),
            });
        }
        records.responses.insert(response.id, response.clone());
        Ok(())
    }

    async fn get_response(&self, id: Uuid) -> Result<Option<SurveyResponse>, StorageError> {
        Ok(self.records.read().await.responses.get(&id).cloned())
    }

    async fn update_calculated(
        &self,
        id: Uuid,
        update: CalculatedUpdate,
    ) -> Result<SurveyResponse, StorageError> {
        let mut records = self.records.write().await;
        let response = records
            .responses
            .get_mut(&id)
            .ok_or_else(|| StorageError::NotFound {
                key: s3_keys::response(id),
            })?;
        response.apply(update);
        Ok(response.clone())
    }
}

impl PatientStore for MemoryStore {
    async fn get_patient_by_user_id(&self, user_id: Uuid) -> Result<Option<Patient>, StorageError> {
        Ok(self.records.read().await.patients.get(&user_id).cloned())
    }

    async fn create_patient(&self, patient: &Patient) -> Result<Patient, StorageError> {
        let mut records = self.records.write().await;
        Ok(records
            .patients
            .entry(patient.user_id)
            .or_insert_with(|| patient.clone())
            .clone())
    }
}

impl AdviceStore for MemoryStore {
    async fn create_advice(&self, advice: &AiAdvice) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.advice.iter().any(|a| a.id == advice.id) {
            return Err(StorageError::PreconditionFailed {
                key: s3_keys::advice(advice.patient_id, advice.id),
            });
        }
        records.advice.push(advice.clone());
        Ok(())
    }

    async fn list_advice_by_patient(
        &self,
        patient_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<AiAdvice>, StorageError> {
        let mut advice: Vec<AiAdvice> = self
            .records
            .read()
            .await
            .advice
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        newest_first(&mut advice);
        Ok(advice.into_iter().skip(offset).take(limit).collect())
    }
}
