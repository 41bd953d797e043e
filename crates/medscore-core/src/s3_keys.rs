//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of records in the medscore bucket.

use uuid::Uuid;

pub const TEMPLATES_PREFIX: &str = "templates/";

pub fn template(code: &str) -> String {
    format!("templates/{code}.json")
}

pub fn response(id: Uuid) -> String {
    format!("responses/{id}.json")
}

pub fn patient(user_id: Uuid) -> String {
    format!("patients/{user_id}.json")
}

pub fn advice_prefix(patient_id: Uuid) -> String {
    format!("advice/{patient_id}/")
}

pub fn advice(patient_id: Uuid, id: Uuid) -> String {
    format!("advice/{patient_id}/{id}.json")
}
