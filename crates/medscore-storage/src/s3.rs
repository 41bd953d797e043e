//! S3-backed store. One JSON object per record, laid out by
//! [`medscore_core::s3_keys`].

use aws_sdk_s3::Client;
use medscore_core::models::advice::AiAdvice;
use medscore_core::models::patient::Patient;
use medscore_core::models::response::{CalculatedUpdate, SurveyResponse};
use medscore_core::models::template::SurveyTemplate;
use medscore_core::s3_keys;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use crate::documents::{create_document, load_document, save_document};
use crate::error::StorageError;
use crate::objects;
use crate::store::{
    active_by_name, newest_first, AdviceStore, PatientStore, ResponseStore, TemplateStore,
};

#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Load every document under `prefix`. Keys that disappear between the
    /// listing and the read are skipped.
    async fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        let mut documents = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            if let Some(doc) = load_document(&self.client, &self.bucket, key).await? {
                documents.push(doc);
            }
        }
        debug!(prefix, count = documents.len(), "loaded documents");
        Ok(documents)
    }
}

impl TemplateStore for S3Store {
    async fn get_template_by_code(&self, code: &str) -> Result<Option<SurveyTemplate>, StorageError> {
        load_document(&self.client, &self.bucket, &s3_keys::template(code)).await
    }

    async fn get_template_by_id(&self, id: Uuid) -> Result<Option<SurveyTemplate>, StorageError> {
        let templates: Vec<SurveyTemplate> = self.load_all(s3_keys::TEMPLATES_PREFIX).await?;
        Ok(templates.into_iter().find(|t| t.id == id))
    }

    async fn list_active_templates(&self) -> Result<Vec<SurveyTemplate>, StorageError> {
        Ok(active_by_name(self.load_all(s3_keys::TEMPLATES_PREFIX).await?))
    }

    async fn put_template(&self, template: &SurveyTemplate) -> Result<(), StorageError> {
        let key = s3_keys::template(&template.code);
        save_document(&self.client, &self.bucket, &key, template).await?;
        info!(code = %template.code, version = template.version, "template saved");
        Ok(())
    }
}

impl ResponseStore for S3Store {
    async fn create_response(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let key = s3_keys::response(response.id);
        create_document(&self.client, &self.bucket, &key, response).await
    }

    async fn get_response(&self, id: Uuid) -> Result<Option<SurveyResponse>, StorageError> {
        load_document(&self.client, &self.bucket, &s3_keys::response(id)).await
    }

    async fn update_calculated(
        &self,
        id: Uuid,
        update: CalculatedUpdate,
    ) -> Result<SurveyResponse, StorageError> {
        let key = s3_keys::response(id);
        let mut response: SurveyResponse = load_document(&self.client, &self.bucket, &key)
            .await?
            .ok_or_else(|| StorageError::NotFound { key: key.clone() })?;

        response.apply(update);
        save_document(&self.client, &self.bucket, &key, &response).await?;
        Ok(response)
    }
}

impl PatientStore for S3Store {
    async fn get_patient_by_user_id(&self, user_id: Uuid) -> Result<Option<Patient>, StorageError> {
        load_document(&self.client, &self.bucket, &s3_keys::patient(user_id)).await
    }

    async fn create_patient(&self, patient: &Patient) -> Result<Patient, StorageError> {
        let key = s3_keys::patient(patient.user_id);
        match create_document(&self.client, &self.bucket, &key, patient).await {
            Ok(()) => Ok(patient.clone()),
            Err(StorageError::PreconditionFailed { .. }) => {
                info!(user_id = %patient.user_id, "patient already exists, reusing");
                load_document(&self.client, &self.bucket, &key)
                    .await?
                    .ok_or_else(|| StorageError::NotFound { key: key.clone() })
            }
            Err(e) => Err(e),
        }
    }
}

impl AdviceStore for S3Store {
    async fn create_advice(&self, advice: &AiAdvice) -> Result<(), StorageError> {
        let key = s3_keys::advice(advice.patient_id, advice.id);
        create_document(&self.client, &self.bucket, &key, advice).await
    }

    async fn list_advice_by_patient(
        &self,
        patient_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<AiAdvice>, StorageError> {
        let mut advice: Vec<AiAdvice> = self.load_all(&s3_keys::advice_prefix(patient_id)).await?;
        newest_first(&mut advice);
        Ok(advice.into_iter().skip(offset).take(limit).collect())
    }
}
